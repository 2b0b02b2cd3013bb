//! Terminal 15-puzzle.
//!
//! `core` holds the pure puzzle state machine (grid, moves, win check,
//! shuffle), `term` the framebuffer renderer, `input` the key mapping.
//! The binary in `main.rs` ties them together in a blocking input loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

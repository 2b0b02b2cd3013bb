//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PuzzleAction`]. The
//! mapping is a pure function so the game loop stays testable.

pub mod map;

pub use map::handle_key_event;

//! Core module - pure puzzle logic with no external dependencies
//!
//! This module contains the board state, move rules, win check, and the
//! shuffler. It has zero dependencies on UI or I/O.

pub mod grid;
pub mod rng;
pub mod shuffle;

// Re-export commonly used types
pub use grid::PuzzleGrid;
pub use rng::{seed_from_time, SimpleRng};
pub use shuffle::shuffle;

//! Shuffle module - randomizes the board by replaying legal moves
//!
//! Starting from the solved layout and applying only legal moves keeps every
//! shuffled board solvable by construction; no parity check is needed.

use crate::core::grid::PuzzleGrid;
use crate::core::rng::SimpleRng;
use crate::types::{Direction, SHUFFLE_MOVES};

/// Randomize the grid with exactly [`SHUFFLE_MOVES`] successful moves.
///
/// Clears the solved flag first. Shuffling is pure state mutation; the
/// caller decides when to redraw (once, after this returns).
pub fn shuffle(grid: &mut PuzzleGrid, rng: &mut SimpleRng) {
    grid.clear_solved();
    shuffle_moves(grid, rng, SHUFFLE_MOVES);
}

/// Apply exactly `count` successful random moves and return how many were
/// applied. A sampled direction that is blocked at the board edge does not
/// count; the draw is simply retried.
pub fn shuffle_moves(grid: &mut PuzzleGrid, rng: &mut SimpleRng, count: usize) -> usize {
    let mut applied = 0;
    while applied < count {
        let dir = Direction::ALL[rng.next_range(Direction::ALL.len() as u32) as usize];
        if grid.attempt_move(dir) {
            applied += 1;
        }
    }
    applied
}

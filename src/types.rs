//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board is a fixed 4x4 grid. No CLI or config surface changes this.
pub const GRID_SIZE: usize = 4;

/// Sentinel stored in the one empty cell.
pub const BLANK: i8 = -1;

/// Number of successful random moves a shuffle applies.
pub const SHUFFLE_MOVES: usize = 10_000;

/// Directional slide commands.
///
/// Naming follows the player's view of the tiles, not the blank: pressing
/// Left slides a tile leftward into the blank, which means the blank itself
/// travels right. This mapping is a behavior contract; do not "fix" it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// What the input layer hands to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    Slide(Direction),
    Restart,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}

//! View tests - projecting the board into a character framebuffer

use tui_fifteen::core::PuzzleGrid;
use tui_fifteen::term::{PuzzleView, Viewport, CLEAR_BANNER};
use tui_fifteen::types::{Direction, GRID_SIZE};

/// Viewport that puts the frame's top-left corner at (0, 0).
fn snug_viewport() -> Viewport {
    Viewport::new(13, 10)
}

#[test]
fn test_solved_layout_rows() {
    let grid = PuzzleGrid::new(GRID_SIZE);
    let fb = PuzzleView.render(&grid, snug_viewport());

    assert_eq!(fb.row_text(0), "+--+--+--+--+");
    assert_eq!(fb.row_text(1), "| 1| 2| 3| 4|");
    assert_eq!(fb.row_text(2), "+--+--+--+--+");
    assert_eq!(fb.row_text(3), "| 5| 6| 7| 8|");
    assert_eq!(fb.row_text(5), "| 9|10|11|12|");
    assert_eq!(fb.row_text(7), "|13|14|15|  |");
    assert_eq!(fb.row_text(8), "+--+--+--+--+");
}

#[test]
fn test_blank_renders_as_two_spaces_anywhere() {
    let mut grid = PuzzleGrid::new(GRID_SIZE);
    // Slide 15 into the old blank slot: row becomes 13, 14, blank, 15.
    assert!(grid.attempt_move(Direction::Right));
    let fb = PuzzleView.render(&grid, snug_viewport());
    assert_eq!(fb.row_text(7), "|13|14|  |15|");
}

#[test]
fn test_banner_absent_while_unsolved() {
    let mut grid = PuzzleGrid::new(GRID_SIZE);
    grid.attempt_move(Direction::Right);
    grid.check_solved();
    let fb = PuzzleView.render(&grid, snug_viewport());
    assert_eq!(fb.row_text(9).trim_end(), "");
}

#[test]
fn test_banner_present_when_solved() {
    let mut grid = PuzzleGrid::new(GRID_SIZE);
    assert!(grid.check_solved());
    let fb = PuzzleView.render(&grid, snug_viewport());
    // Leading space is part of the banner text.
    assert_eq!(fb.row_text(9).trim_end(), CLEAR_BANNER);
}

#[test]
fn test_banner_does_not_shift_the_board() {
    let mut grid = PuzzleGrid::new(GRID_SIZE);
    let before = PuzzleView.render(&grid, snug_viewport());
    grid.check_solved();
    let after = PuzzleView.render(&grid, snug_viewport());
    for y in 0..9 {
        assert_eq!(before.row_text(y), after.row_text(y));
    }
}

#[test]
fn test_frame_is_centered_in_larger_viewport() {
    let grid = PuzzleGrid::new(GRID_SIZE);
    let fb = PuzzleView.render(&grid, Viewport::new(80, 24));

    let start_x = (80 - 13) / 2;
    let start_y = (24 - 10) / 2;
    assert_eq!(fb.get(start_x, start_y).unwrap().ch, '+');
    assert_eq!(fb.get(start_x, start_y + 1).unwrap().ch, '|');
    assert_eq!(fb.get(start_x + 12, start_y + 8).unwrap().ch, '+');
    // Outside the frame stays blank.
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let grid = PuzzleGrid::new(GRID_SIZE);
    let fb = PuzzleView.render(&grid, Viewport::new(5, 3));
    // Clipped, but well-defined.
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

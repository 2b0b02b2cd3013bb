//! PuzzleView: maps `core::PuzzleGrid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board renders as an ASCII table, one rule row above each tile row and
//! one below the last:
//!
//! ```text
//! +--+--+--+--+
//! | 1| 2| 3| 4|
//! +--+--+--+--+
//! ...
//! ```

use crate::core::PuzzleGrid;
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::BLANK;

/// Trailing line shown under the board once the puzzle is solved.
pub const CLEAR_BANNER: &str = " [CLEAR!!]";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the puzzle board.
#[derive(Debug, Default)]
pub struct PuzzleView;

impl PuzzleView {
    /// Columns the board frame occupies: `|` plus 3 per tile column.
    pub fn frame_width(grid: &PuzzleGrid) -> u16 {
        (grid.size() * 3 + 1) as u16
    }

    /// Rows the board frame occupies, banner excluded.
    pub fn frame_height(grid: &PuzzleGrid) -> u16 {
        (grid.size() * 2 + 1) as u16
    }

    /// Render the current board into a framebuffer sized to the viewport.
    pub fn render(&self, grid: &PuzzleGrid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = Self::frame_width(grid);
        let frame_h = Self::frame_height(grid);

        // Center on the frame alone, so the board stays put when the
        // banner row appears underneath it.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let border = CellStyle::default();
        let tile = CellStyle::default();

        let mut y = start_y;
        self.draw_rule(&mut fb, start_x, y, frame_w, border);
        y += 1;

        for r in 0..grid.size() {
            let mut x = start_x;
            fb.put_char(x, y, '|', border);
            for c in 0..grid.size() {
                let v = grid.get(r, c).unwrap_or(BLANK);
                if v == BLANK {
                    fb.put_char(x + 1, y, ' ', tile);
                    fb.put_char(x + 2, y, ' ', tile);
                } else {
                    let s = format!("{:2}", v);
                    let mut chars = s.chars();
                    fb.put_char(x + 1, y, chars.next().unwrap_or(' '), tile);
                    fb.put_char(x + 2, y, chars.next().unwrap_or(' '), tile);
                }
                fb.put_char(x + 3, y, '|', border);
                x += 3;
            }
            y += 1;
            self.draw_rule(&mut fb, start_x, y, frame_w, border);
            y += 1;
        }

        if grid.is_solved_flag() {
            fb.put_str(start_x, y, CLEAR_BANNER, CellStyle::bold());
        }

        fb
    }

    /// Horizontal rule: `+` at every cell boundary, `-` between.
    fn draw_rule(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, style: CellStyle) {
        for dx in 0..w {
            let ch = if dx % 3 == 0 { '+' } else { '-' };
            fb.put_char(x + dx, y, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    #[test]
    fn test_frame_dimensions() {
        let grid = PuzzleGrid::new(GRID_SIZE);
        assert_eq!(PuzzleView::frame_width(&grid), 13);
        assert_eq!(PuzzleView::frame_height(&grid), 9);
    }

    #[test]
    fn test_rule_row_pattern() {
        let grid = PuzzleGrid::new(GRID_SIZE);
        let fb = PuzzleView.render(&grid, Viewport::new(13, 10));
        assert_eq!(fb.row_text(0), "+--+--+--+--+");
    }
}

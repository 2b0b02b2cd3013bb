//! Terminal rendering module.
//!
//! Rendering is split into a pure view (`PuzzleView` projects the grid into
//! a framebuffer, unit-testable with no terminal) and a thin crossterm
//! backend (`TerminalRenderer`) that owns raw mode and flushes frames.

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use puzzle_view::{PuzzleView, Viewport, CLEAR_BANNER};
pub use renderer::TerminalRenderer;

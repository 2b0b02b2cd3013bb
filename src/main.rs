//! Terminal 15-puzzle runner.
//!
//! Blocking read-eval loop: render, wait for a key, apply it. Two modes:
//! playing (arrows slide tiles) and solved (Space reshuffles). Esc quits
//! from either.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_fifteen::core::{seed_from_time, shuffle, PuzzleGrid, SimpleRng};
use tui_fifteen::input::handle_key_event;
use tui_fifteen::term::{PuzzleView, TerminalRenderer, Viewport};
use tui_fifteen::types::{PuzzleAction, GRID_SIZE};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut rng = SimpleRng::new(seed_from_time());
    let mut grid = PuzzleGrid::new(GRID_SIZE);
    shuffle(&mut grid, &mut rng);

    let view = PuzzleView;

    loop {
        draw(term, &view, &grid)?;

        match next_action()? {
            PuzzleAction::Quit => return Ok(()),
            PuzzleAction::Slide(dir) => {
                if !grid.attempt_move(dir) {
                    // Blocked at the board edge: redraw and keep waiting.
                    continue;
                }
            }
            // Space only restarts from the solved screen.
            PuzzleAction::Restart => continue,
        }

        if grid.check_solved() {
            // One more frame so the banner is on screen while we wait.
            draw(term, &view, &grid)?;
            loop {
                match next_action()? {
                    PuzzleAction::Quit => return Ok(()),
                    PuzzleAction::Restart => {
                        shuffle(&mut grid, &mut rng);
                        break;
                    }
                    PuzzleAction::Slide(_) => {}
                }
            }
        }
    }
}

/// Block until a key press maps to an action.
fn next_action() -> Result<PuzzleAction> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = handle_key_event(key) {
                return Ok(action);
            }
        }
        // Resizes, releases, and unmapped keys: keep waiting.
    }
}

fn draw(term: &mut TerminalRenderer, view: &PuzzleView, grid: &PuzzleGrid) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let fb = view.render(grid, Viewport::new(w, h));
    term.draw(&fb)
}

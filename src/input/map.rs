//! Key mapping from terminal events to puzzle actions.

use crate::types::{Direction, PuzzleAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to puzzle actions.
///
/// Arrow keys slide tiles, Space restarts (only honored in the solved
/// state), Esc quits. Ctrl-C also quits: with the terminal in raw mode
/// nothing else would deliver an interrupt. Every other key is ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<PuzzleAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(PuzzleAction::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(PuzzleAction::Quit),
        KeyCode::Left => Some(PuzzleAction::Slide(Direction::Left)),
        KeyCode::Right => Some(PuzzleAction::Slide(Direction::Right)),
        KeyCode::Up => Some(PuzzleAction::Slide(Direction::Up)),
        KeyCode::Down => Some(PuzzleAction::Slide(Direction::Down)),
        KeyCode::Char(' ') => Some(PuzzleAction::Restart),
        _ => None,
    }
}

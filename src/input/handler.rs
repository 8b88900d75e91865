use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::Game;

/// Map one key event onto the session: one step per press (or terminal
/// auto-repeat). A rejected move or turn is absorbed silently.
pub fn handle_input(game: &mut Game, code: KeyCode, kind: KeyEventKind) {
    if kind != KeyEventKind::Press && kind != KeyEventKind::Repeat {
        return;
    }
    match code {
        KeyCode::Left => {
            game.try_move(-1, 0);
        }
        KeyCode::Right => {
            game.try_move(1, 0);
        }
        KeyCode::Down => {
            game.try_move(0, 1);
        }
        KeyCode::Up => {
            game.try_rotate();
        }
        _ => {}
    }
}

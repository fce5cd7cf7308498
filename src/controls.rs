/// Key → direction mapping.  Only the four arrow keys move the player.

use crossterm::event::KeyCode;

use crate::entities::Direction;

pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

pub fn is_restart_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
}

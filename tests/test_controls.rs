use bug_crossing::controls::*;
use bug_crossing::entities::Direction;

use crossterm::event::KeyCode;

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
    assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::Right));
    assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::Up));
    assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::Down));
}

#[test]
fn other_keys_are_ignored() {
    for code in [KeyCode::Char('a'), KeyCode::Char('w'), KeyCode::Enter, KeyCode::Char(' ')] {
        assert_eq!(direction_for_key(code), None);
    }
}

#[test]
fn quit_and_restart_keys() {
    assert!(is_quit_key(KeyCode::Char('q')));
    assert!(is_quit_key(KeyCode::Esc));
    assert!(!is_quit_key(KeyCode::Char('r')));
    assert!(is_restart_key(KeyCode::Char('R')));
    assert!(!is_restart_key(KeyCode::Up));
}

//! Key mapping from terminal events to movement actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_raycast_types::InputAction;

/// Map keyboard input to a movement action.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputAction::RotateLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputAction::RotateRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputAction::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::MoveBackward),
        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(InputAction::RotateLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(InputAction::RotateRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(InputAction::RotateLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('D'))),
            Some(InputAction::RotateRight)
        );
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(InputAction::MoveForward)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(InputAction::MoveBackward)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(InputAction::MoveForward)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(InputAction::MoveBackward)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}

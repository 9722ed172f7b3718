//! Key mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map one keyboard event (press, repeat or release) to a game event.
///
/// Presses map to their action. Terminal auto-repeat only repeats horizontal
/// moves. Releases only matter for the soft drop key.
pub fn map_key_event(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Release && should_quit(key) {
        return Some(GameEvent::Quit);
    }

    match key.kind {
        KeyEventKind::Press => match key.code {
            code if is_left(code) => Some(GameEvent::MoveLeft),
            code if is_right(code) => Some(GameEvent::MoveRight),
            code if is_rotate(code) => Some(GameEvent::RotateCw),
            code if is_soft_drop(code) => Some(GameEvent::SoftDropStart),
            _ => None,
        },
        KeyEventKind::Repeat => match key.code {
            code if is_left(code) => Some(GameEvent::MoveLeft),
            code if is_right(code) => Some(GameEvent::MoveRight),
            _ => None,
        },
        KeyEventKind::Release => {
            if is_soft_drop(key.code) {
                Some(GameEvent::SoftDropEnd)
            } else {
                None
            }
        }
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn is_left(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H')
    )
}

fn is_right(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L')
    )
}

fn is_rotate(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K')
    )
}

pub(crate) fn is_soft_drop(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameEvent::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameEvent::MoveRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameEvent::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameEvent::MoveRight)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameEvent::RotateCw)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameEvent::RotateCw)
        );
        // No counter-clockwise rotation.
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_soft_drop_edges() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameEvent::SoftDropStart)
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Down, KeyEventKind::Release)),
            Some(GameEvent::SoftDropEnd)
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Char('s'), KeyEventKind::Repeat)),
            None
        );
    }

    #[test]
    fn test_repeat_only_moves_sideways() {
        assert_eq!(
            map_key_event(with_kind(KeyCode::Left, KeyEventKind::Repeat)),
            Some(GameEvent::MoveLeft)
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Up, KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Left, KeyEventKind::Release)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(GameEvent::Quit)
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Char('q'), KeyEventKind::Release)),
            None
        );
    }
}

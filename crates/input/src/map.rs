//! Key mapping from terminal events to the characters the game loop reads.
//!
//! Actions are parsed from those characters with [`GameAction::from_char`], so a
//! real keyboard and a scripted one go through the same path.
//!
//! [`GameAction::from_char`]: crate::types::GameAction::from_char

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Character a key press stands for.
///
/// Arrow keys alias the `a`/`d` steering keys, `Ctrl+C` reads as `q` (raw mode
/// swallows the interrupt), and keys without a character read as NUL.
pub fn key_to_char(key: KeyEvent) -> char {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            'q'
        }
        KeyCode::Char(ch) => ch,
        KeyCode::Left => 'a',
        KeyCode::Right => 'd',
        KeyCode::Enter => '\n',
        KeyCode::Tab => '\t',
        KeyCode::Esc => '\u{1b}',
        _ => '\0',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    fn action_for(key: KeyEvent) -> Option<GameAction> {
        GameAction::from_char(key_to_char(key))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            action_for(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            action_for(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            action_for(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            action_for(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
    }

    #[test]
    fn test_other_keys_have_no_action() {
        assert_eq!(action_for(KeyEvent::from(KeyCode::Char('w'))), None);
        assert_eq!(action_for(KeyEvent::from(KeyCode::Up)), None);
        assert_eq!(key_to_char(KeyEvent::from(KeyCode::Up)), '\0');
        assert_eq!(key_to_char(KeyEvent::from(KeyCode::Enter)), '\n');
        assert_eq!(key_to_char(KeyEvent::from(KeyCode::Char('7'))), '7');
    }

    #[test]
    fn test_quit_keys() {
        let quit = Some(GameAction::Quit);
        assert_eq!(action_for(KeyEvent::from(KeyCode::Char('q'))), quit);
        assert_eq!(action_for(KeyEvent::from(KeyCode::Char('Q'))), quit);
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            quit
        );
        assert_eq!(action_for(KeyEvent::from(KeyCode::Char('c'))), None);
        assert_eq!(action_for(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}

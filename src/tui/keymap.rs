use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;
use crate::pass::CharacterClass;

/// Translate a key press into an action. Releases and unbound keys map to
/// `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(Action::Decrease),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Increase)
        }
        KeyCode::Home => Some(Action::SetLength(0)),
        KeyCode::End => Some(Action::SetLength(usize::MAX)),
        KeyCode::Char('1') => Some(Action::Toggle(CharacterClass::Upper)),
        KeyCode::Char('2') => Some(Action::Toggle(CharacterClass::Lower)),
        KeyCode::Char('3') => Some(Action::Toggle(CharacterClass::Number)),
        KeyCode::Char('4') => Some(Action::Toggle(CharacterClass::Symbol)),
        KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Regenerate),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_bindings() {
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::Decrease));
        assert_eq!(action_for(press(KeyCode::Char('+'))), Some(Action::Increase));
        assert_eq!(
            action_for(press(KeyCode::Char('4'))),
            Some(Action::Toggle(CharacterClass::Symbol))
        );
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::Regenerate));
        assert_eq!(action_for(press(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_instead_of_copying() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
    }

    #[test]
    fn releases_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for(key), None);
    }
}

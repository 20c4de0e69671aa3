use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, App};

/// Map a raw key press to a logical action.
pub fn action_for_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::MovePrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveNext,
        KeyCode::Enter => Action::Activate,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Char('r') | KeyCode::F(5) => Action::Refresh,
        _ => Action::Unrecognized,
    }
}

/// Handle a key event. Only presses count; releases and repeats reported by
/// some terminals are ignored.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    app.dispatch(action_for_key(key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ContentConfig};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for_key(press(KeyCode::Up)), Action::MovePrevious);
        assert_eq!(action_for_key(press(KeyCode::Char('k'))), Action::MovePrevious);
        assert_eq!(action_for_key(press(KeyCode::Down)), Action::MoveNext);
        assert_eq!(action_for_key(press(KeyCode::Char('j'))), Action::MoveNext);
        assert_eq!(action_for_key(press(KeyCode::Enter)), Action::Activate);
        assert_eq!(action_for_key(press(KeyCode::Tab)), Action::ToggleFocus);
    }

    #[test]
    fn test_paging_keys() {
        assert_eq!(action_for_key(press(KeyCode::PageUp)), Action::PageUp);
        assert_eq!(action_for_key(press(KeyCode::PageDown)), Action::PageDown);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(action_for_key(press(KeyCode::Char('Q'))), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        assert_eq!(action_for_key(press(KeyCode::Char('c'))), Action::Unrecognized);
    }

    #[test]
    fn test_refresh_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('r'))), Action::Refresh);
        assert_eq!(action_for_key(press(KeyCode::F(5))), Action::Refresh);
    }

    #[test]
    fn test_other_keys_are_unrecognized() {
        assert_eq!(action_for_key(press(KeyCode::Esc)), Action::Unrecognized);
        assert_eq!(action_for_key(press(KeyCode::Char('x'))), Action::Unrecognized);
        assert_eq!(action_for_key(press(KeyCode::Left)), Action::Unrecognized);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            content: ContentConfig {
                syntax_highlight: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(dir.path(), &config).unwrap();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(!app.should_quit);
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}

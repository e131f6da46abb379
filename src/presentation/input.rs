use crate::application::{App, AppMode};
use crate::infrastructure::RequestDispatcher;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(
        app: &mut App,
        key: KeyCode,
        modifiers: KeyModifiers,
        api: &RequestDispatcher,
    ) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::EditingName => Self::handle_name_entry_mode(app, key, modifiers, api),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
                app.start_name_entry();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
            }
            KeyCode::Char('q') => {
                // Quit is handled by the main loop
            }
            _ => {}
        }
    }

    fn handle_name_entry_mode(
        app: &mut App,
        key: KeyCode,
        modifiers: KeyModifiers,
        api: &RequestDispatcher,
    ) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('u') = key {
                app.name_input.clear();
                app.cursor_position = 0;
            }
            return;
        }

        match key {
            KeyCode::Enter => {
                // Submission is suppressed while a request is in flight;
                // the blank-input guard lives in the state layer.
                if app.is_loading {
                    return;
                }
                if let Some(name) = app.start_greeting_request() {
                    api.spawn_greeting_fetch(&name);
                    app.mode = AppMode::Normal;
                }
            }
            KeyCode::Esc => {
                app.cancel_name_entry();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.cursor_position -= prev_char_len(&app.name_input, app.cursor_position);
                    app.name_input.remove(app.cursor_position);
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.name_input.len() {
                    app.name_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                app.cursor_position -= prev_char_len(&app.name_input, app.cursor_position);
            }
            KeyCode::Right => {
                app.cursor_position += next_char_len(&app.name_input, app.cursor_position);
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.name_input.len();
            }
            KeyCode::Char(c) => {
                app.name_input.insert(app.cursor_position, c);
                app.cursor_position += c.len_utf8();
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            _ => {}
        }
    }
}

fn prev_char_len(s: &str, at: usize) -> usize {
    s[..at].chars().next_back().map(char::len_utf8).unwrap_or(0)
}

fn next_char_len(s: &str, at: usize) -> usize {
    s[at..].chars().next().map(char::len_utf8).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RemoteEvent;
    use crate::infrastructure::ApiClient;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    // Points at a closed port: dispatched requests settle with a failure,
    // undispatched ones leave the channel empty.
    fn test_dispatcher() -> (RequestDispatcher, Receiver<RemoteEvent>) {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let (tx, rx) = mpsc::channel();
        (RequestDispatcher::new(client, tx), rx)
    }

    fn press(app: &mut App, key: KeyCode, api: &RequestDispatcher) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE, api);
    }

    #[test]
    fn test_enter_starts_name_entry() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();

        press(&mut app, KeyCode::Enter, &api);

        assert!(matches!(app.mode, AppMode::EditingName));
    }

    #[test]
    fn test_e_key_starts_name_entry() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();

        press(&mut app, KeyCode::Char('e'), &api);

        assert!(matches!(app.mode, AppMode::EditingName));
    }

    #[test]
    fn test_typing_updates_name_input() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();
        app.start_name_entry();

        for c in ['A', 'd', 'a'] {
            press(&mut app, KeyCode::Char(c), &api);
        }

        assert_eq!(app.name_input, "Ada");
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "Ada".to_string();
        app.start_name_entry();

        press(&mut app, KeyCode::Backspace, &api);

        assert_eq!(app.name_input, "Ad");
        assert_eq!(app.cursor_position, 2);
    }

    #[test]
    fn test_cursor_movement() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "Ada".to_string();
        app.start_name_entry();

        press(&mut app, KeyCode::Left, &api);
        assert_eq!(app.cursor_position, 2);
        press(&mut app, KeyCode::Home, &api);
        assert_eq!(app.cursor_position, 0);
        // Left at the start stays put
        press(&mut app, KeyCode::Left, &api);
        assert_eq!(app.cursor_position, 0);
        press(&mut app, KeyCode::Right, &api);
        assert_eq!(app.cursor_position, 1);
        press(&mut app, KeyCode::End, &api);
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_editing_multibyte_name() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();
        app.start_name_entry();

        for c in ['J', 'o', 's', 'é'] {
            press(&mut app, KeyCode::Char(c), &api);
        }
        assert_eq!(app.name_input, "José");

        press(&mut app, KeyCode::Backspace, &api);
        assert_eq!(app.name_input, "Jos");
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_ctrl_u_clears_name_input() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "Ada".to_string();
        app.start_name_entry();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL, &api);

        assert!(app.name_input.is_empty());
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_escape_cancels_name_entry_keeps_text() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "Ada".to_string();
        app.start_name_entry();

        press(&mut app, KeyCode::Esc, &api);

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.name_input, "Ada");
    }

    #[test]
    fn test_submit_empty_name_is_noop() {
        let (api, rx) = test_dispatcher();
        let mut app = App::default();
        app.start_name_entry();

        press(&mut app, KeyCode::Enter, &api);

        assert!(matches!(app.mode, AppMode::EditingName));
        assert!(!app.is_loading);
        assert!(app.greeting_result.is_empty());
        assert!(rx.try_recv().is_err()); // nothing was dispatched
    }

    #[test]
    fn test_submit_whitespace_name_is_noop() {
        let (api, rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "   ".to_string();
        app.start_name_entry();

        press(&mut app, KeyCode::Enter, &api);

        assert!(matches!(app.mode, AppMode::EditingName));
        assert!(!app.is_loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_dispatches_greeting_request() {
        let (api, rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "Ada".to_string();
        app.start_name_entry();

        press(&mut app, KeyCode::Enter, &api);

        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.is_loading);

        // The request was issued and settles (with a failure, since the
        // dispatcher points at a closed port)
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(event, RemoteEvent::GreetingSettled(Err(_))));
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let (api, rx) = test_dispatcher();
        let mut app = App::default();
        app.name_input = "Ada".to_string();
        app.start_name_entry();
        app.is_loading = true;

        press(&mut app, KeyCode::Enter, &api);

        assert!(matches!(app.mode, AppMode::EditingName));
        assert!(app.is_loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_help_toggle() {
        let (api, _rx) = test_dispatcher();
        let mut app = App::default();

        press(&mut app, KeyCode::Char('?'), &api);
        assert!(matches!(app.mode, AppMode::Help));

        // 'q' closes help instead of quitting
        press(&mut app, KeyCode::Char('q'), &api);
        assert!(matches!(app.mode, AppMode::Normal));
    }
}

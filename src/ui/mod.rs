pub mod layout;
pub mod widgets;

use crate::app::AppState;
use crate::error::Result;
use crate::types::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Route a key press based on UI mode, then on the active page
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Result<()> {
    match &app.ui_mode {
        UiMode::AckPopup(_) | UiMode::Help => {
            handle_popup(app, key);
        }
        UiMode::Normal => {
            if app.is_page_active("contact") {
                handle_contact_page(app, key);
            } else {
                handle_browse(app, key);
            }
        }
    }
    Ok(())
}

/// Pointer movement feeds the navbar's inactivity timer
pub fn handle_mouse_event(app: &mut AppState, ev: MouseEvent, now_ms: u64) -> Result<()> {
    if matches!(
        ev.kind,
        MouseEventKind::Moved | MouseEventKind::Drag(_)
    ) {
        app.pointer_moved(now_ms);
    }
    Ok(())
}

fn handle_popup(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
            app.ui_mode = UiMode::Normal;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        _ => {}
    }
}

fn handle_browse(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Page navigation
        KeyCode::Char('1') => {
            app.navigate("home");
        }
        KeyCode::Char('2') => {
            app.navigate("features");
        }
        KeyCode::Char('3') => {
            app.navigate("contact");
        }

        // Carousel (home page only)
        KeyCode::Right | KeyCode::Char('l') if app.is_page_active("home") => {
            app.carousel_next();
        }
        KeyCode::Left | KeyCode::Char('h') if app.is_page_active("home") => {
            app.carousel_prev();
        }

        // Manual scrolling
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
        }

        // Help
        KeyCode::Char('?') => {
            app.ui_mode = UiMode::Help;
        }

        _ => {}
    }
}

/// On the contact page printable keys edit the focused field, so quitting
/// and navigation fall back to control keys
fn handle_contact_page(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Esc => {
            app.navigate("home");
        }
        KeyCode::Tab => {
            app.focus_next_field();
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Backspace => {
            app.field_backspace();
        }
        KeyCode::Down => {
            app.scroll_down(1);
        }
        KeyCode::Up => {
            app.scroll_up(1);
        }
        KeyCode::Char(c) => {
            app.field_input(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::document::ElementRegistry;
    use crate::types::Config;

    fn create_test_app() -> AppState {
        let mut app = AppState::new(Config::default());
        app.update_viewport_size(80, 24);
        app.attach();
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = create_test_app();
        handle_key_event(&mut app, press(KeyCode::Char('2'))).unwrap();
        assert!(app.is_page_active("features"));
    }

    #[test]
    fn test_typing_on_contact_page_edits_field() {
        let mut app = create_test_app();
        handle_key_event(&mut app, press(KeyCode::Char('3'))).unwrap();

        handle_key_event(&mut app, press(KeyCode::Char('A'))).unwrap();
        handle_key_event(&mut app, press(KeyCode::Char('d'))).unwrap();
        handle_key_event(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.document.find("name").unwrap().value, "Ada");

        // Submit raises the acknowledgement popup instead of navigating
        handle_key_event(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(matches!(app.ui_mode, UiMode::AckPopup(_)));
    }

    #[test]
    fn test_popup_closes_on_escape() {
        let mut app = create_test_app();
        app.ui_mode = UiMode::Help;
        handle_key_event(&mut app, press(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_mouse_movement_reaches_navbar() {
        let mut app = create_test_app();
        let ev = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, ev, 1000).unwrap();
        assert_eq!(
            app.navbar.hide_deadline(),
            Some(1000 + app.config.hide_delay_ms)
        );
    }
}

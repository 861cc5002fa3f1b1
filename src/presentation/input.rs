use crate::application::{App, AppMode};
use crate::infrastructure::ClipboardService;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('y') = key {
                Self::copy_value_to_clipboard(app);
                return;
            }
        }

        app.status_message = None;

        match key {
            KeyCode::Up => app.move_selection(-1, 0),
            KeyCode::Down => app.move_selection(1, 0),
            KeyCode::Left => app.move_selection(0, -1),
            KeyCode::Right => app.move_selection(0, 1),
            KeyCode::Char(' ') => app.press_selected(),
            KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            other => {
                if let Some(token) = Self::map_key_to_token(other) {
                    app.press_button(token);
                }
            }
        }
    }

    /// Maps a key press to the calculator button it stands for.
    ///
    /// Digits and the arithmetic symbols map to themselves; the rest
    /// follows the original desktop key map: Enter is "=", Backspace is
    /// "⌫", Delete clears, Esc clears the entry, and the letters p/r/x/i/s
    /// reach the operators that have no dedicated key.
    fn map_key_to_token(key: KeyCode) -> Option<&'static str> {
        match key {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                '0' => Some("0"),
                '1' => Some("1"),
                '2' => Some("2"),
                '3' => Some("3"),
                '4' => Some("4"),
                '5' => Some("5"),
                '6' => Some("6"),
                '7' => Some("7"),
                '8' => Some("8"),
                '9' => Some("9"),
                '.' => Some("."),
                '+' => Some("+"),
                '-' => Some("-"),
                '*' => Some("*"),
                '/' => Some("/"),
                '%' | 'p' => Some("%"),
                'r' => Some("√x"),
                'x' => Some("x^2"),
                'i' => Some("1/x"),
                's' => Some("+/-"),
                _ => None,
            },
            KeyCode::Enter => Some("="),
            KeyCode::Backspace => Some("⌫"),
            KeyCode::Delete => Some("C"),
            KeyCode::Esc => Some("CE"),
            _ => None,
        }
    }

    fn copy_value_to_clipboard(app: &mut App) {
        let value = app.calculator.get_current_value();
        match ClipboardService::copy(&value) {
            Ok(()) => {
                app.status_message = Some(format!("Copied {} to clipboard", value));
            }
            Err(error) => {
                app.status_message = Some(error);
            }
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

//! Application state management for the terminal calculator.
//!
//! This module contains the main application state, mode management, and
//! the button grid the presentation layer renders.

use crate::domain::{Calculator, InputDispatcher};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// The calculator button grid, laid out exactly as rendered.
///
/// Row and column indices into this array double as the selection
/// coordinates in [`App`].
pub const BUTTON_GRID: [[&str; 4]; 6] = [
    ["%", "CE", "C", "⌫"],
    ["1/x", "x^2", "√x", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["+/-", "0", ".", "="],
];

/// How long a pressed button stays visually highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(100);

/// Represents the current mode of the application.
#[derive(Debug)]
pub enum AppMode {
    /// Normal calculator mode - keys press buttons, arrows move selection
    Normal,
    /// Help screen is displayed
    Help,
}

/// Color theme for the calculator UI.
///
/// Mirrors the three stylesheets of the desktop original. The active
/// theme is persisted across sessions in the UI config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Gamer,
}

impl Theme {
    /// The next theme in the cycle order.
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Gamer,
            Theme::Gamer => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Gamer => "Gamer",
        }
    }
}

/// A button press awaiting highlight expiry.
#[derive(Debug)]
pub struct PressedButton {
    /// Label of the pressed button
    pub label: String,
    /// When the press happened
    pub at: Instant,
}

/// Main application state containing the calculator and UI state.
///
/// # Examples
///
/// ```
/// use tcalc::application::App;
///
/// let app = App::default();
/// assert_eq!(app.calculator.get_current_value(), "0");
/// assert_eq!(app.selected_row, 0);
/// assert_eq!(app.selected_col, 0);
/// ```
#[derive(Debug)]
pub struct App {
    /// The calculator state machine
    pub calculator: Calculator,
    /// Current application mode
    pub mode: AppMode,
    /// Active color theme
    pub theme: Theme,
    /// Row of the selected button in [`BUTTON_GRID`]
    pub selected_row: usize,
    /// Column of the selected button in [`BUTTON_GRID`]
    pub selected_col: usize,
    /// Most recent button press, kept until its highlight expires
    pub pressed: Option<PressedButton>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            calculator: Calculator::new(),
            mode: AppMode::Normal,
            theme: Theme::default(),
            selected_row: 0,
            selected_col: 0,
            pressed: None,
            status_message: None,
            help_scroll: 0,
        }
    }
}

impl App {
    /// Presses a calculator button by label.
    ///
    /// Dispatches the token to the calculator and starts the press
    /// highlight for the button.
    pub fn press_button(&mut self, label: &str) {
        InputDispatcher::process_input(&mut self.calculator, label);
        self.pressed = Some(PressedButton {
            label: label.to_string(),
            at: Instant::now(),
        });
    }

    /// Presses the button under the selection cursor.
    pub fn press_selected(&mut self) {
        let label = BUTTON_GRID[self.selected_row][self.selected_col];
        self.press_button(label);
    }

    /// Moves the selection cursor, clamped to the grid bounds.
    pub fn move_selection(&mut self, row_delta: isize, col_delta: isize) {
        let max_row = BUTTON_GRID.len() as isize - 1;
        let max_col = BUTTON_GRID[0].len() as isize - 1;
        self.selected_row = (self.selected_row as isize + row_delta).clamp(0, max_row) as usize;
        self.selected_col = (self.selected_col as isize + col_delta).clamp(0, max_col) as usize;
    }

    /// Whether the given button is currently highlighted as pressed.
    pub fn is_pressed(&self, label: &str) -> bool {
        self.pressed
            .as_ref()
            .is_some_and(|pressed| pressed.label == label)
    }

    /// Drops the press highlight once its duration has elapsed.
    ///
    /// Called once per event-loop iteration before drawing; this is the
    /// deferred-callback stand-in for the original's highlight timer.
    pub fn clear_expired_highlight(&mut self) {
        if let Some(pressed) = &self.pressed {
            if pressed.at.elapsed() >= HIGHLIGHT_DURATION {
                self.pressed = None;
            }
        }
    }

    /// Switches to the next color theme and reports it in the status bar.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status_message = Some(format!("Theme: {}", self.theme.name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.selected_row, 0);
        assert_eq!(app.selected_col, 0);
        assert!(app.pressed.is_none());
        assert!(app.status_message.is_none());
        assert_eq!(app.help_scroll, 0);
        assert_eq!(app.calculator.get_current_value(), "0");
    }

    #[test]
    fn test_press_button_dispatches_and_highlights() {
        let mut app = App::default();
        app.press_button("7");
        assert_eq!(app.calculator.get_current_value(), "7");
        assert!(app.is_pressed("7"));
        assert!(!app.is_pressed("8"));
    }

    #[test]
    fn test_press_selected_uses_grid_position() {
        let mut app = App::default();
        app.selected_row = 2;
        app.selected_col = 0;
        app.press_selected();
        assert_eq!(app.calculator.get_current_value(), "7");
        assert!(app.is_pressed("7"));
    }

    #[test]
    fn test_move_selection_clamps_to_grid() {
        let mut app = App::default();
        app.move_selection(-1, -1);
        assert_eq!((app.selected_row, app.selected_col), (0, 0));

        app.move_selection(100, 100);
        assert_eq!(
            (app.selected_row, app.selected_col),
            (BUTTON_GRID.len() - 1, BUTTON_GRID[0].len() - 1)
        );

        app.move_selection(-1, 0);
        assert_eq!((app.selected_row, app.selected_col), (4, 3));
    }

    #[test]
    fn test_highlight_expires() {
        let mut app = App::default();
        app.press_button("5");
        assert!(app.is_pressed("5"));

        // Not expired yet
        app.clear_expired_highlight();
        assert!(app.is_pressed("5"));

        // Backdate the press beyond the highlight duration
        app.pressed = Some(PressedButton {
            label: "5".to_string(),
            at: Instant::now() - HIGHLIGHT_DURATION,
        });
        app.clear_expired_highlight();
        assert!(app.pressed.is_none());
    }

    #[test]
    fn test_cycle_theme_wraps_around() {
        let mut app = App::default();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Light);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Gamer);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.status_message.as_deref(), Some("Theme: Dark"));
    }

    #[test]
    fn test_button_grid_matches_token_set() {
        // Every grid label must be a token the dispatcher recognizes as
        // something other than verbatim entry, except digits and the point.
        let entry_labels = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."];
        for row in BUTTON_GRID {
            for label in row {
                let classified = crate::domain::InputToken::classify(label);
                if entry_labels.contains(&label) {
                    assert!(matches!(classified, crate::domain::InputToken::Entry(_)));
                } else {
                    assert!(!matches!(classified, crate::domain::InputToken::Entry(_)));
                }
            }
        }
    }

    #[test]
    fn test_full_session_through_buttons() {
        let mut app = App::default();
        for label in ["1", "2", "+", "7", "="] {
            app.press_button(label);
        }
        assert_eq!(app.calculator.get_current_value(), "19");
        assert_eq!(app.calculator.get_current_expression(), "12 + 7 = 19");
    }
}

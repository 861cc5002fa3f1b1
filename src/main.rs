//! TCALC - Terminal Calculator
//!
//! A terminal-based calculator application, built in Rust.
//! Presents the classic button grid with chained arithmetic, unary
//! operators, theme switching, and clipboard copy of the result.

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use infrastructure::{ConfigRepository, UiConfig};
use presentation::{render_ui, InputHandler};

/// How long the event loop waits for a key before redrawing.
///
/// Kept short so expired button-press highlights disappear promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Entry point for the TCALC terminal calculator application.
///
/// Sets up the terminal interface, restores the persisted UI config,
/// and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let config_path = ConfigRepository::default_path();
    if let Ok(config) = ConfigRepository::load_config(&config_path) {
        app.theme = config.theme;
    }

    let res = run_app(&mut terminal, &mut app);

    // Best effort; a failed config write should not mask the session result.
    let _ = ConfigRepository::save_config(&UiConfig { theme: app.theme }, &config_path);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing.
/// Polls with a timeout so button-press highlights expire even when
/// no keys arrive. Continues running until the user presses 'q' in
/// normal mode.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.clear_expired_highlight();
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, application::AppMode::Normal) => {
                            return Ok(())
                        }
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }
    }
}

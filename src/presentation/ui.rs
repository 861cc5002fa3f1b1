use crate::application::{App, AppMode, Theme, BUTTON_GRID};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Styles for every themed element of the calculator screen.
pub struct Palette {
    pub header: Style,
    pub expression: Style,
    pub display: Style,
    pub number_button: Style,
    pub operator_button: Style,
    pub equals_button: Style,
    pub selected: Style,
    pub pressed: Style,
    pub status: Style,
}

/// Resolves a theme to its concrete styles.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            header: Style::default().fg(Color::Cyan),
            expression: Style::default().fg(Color::DarkGray),
            display: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            number_button: Style::default().fg(Color::White),
            operator_button: Style::default().fg(Color::Yellow),
            equals_button: Style::default().fg(Color::Black).bg(Color::Cyan),
            selected: Style::default().fg(Color::Black).bg(Color::LightBlue),
            pressed: Style::default().fg(Color::Black).bg(Color::Yellow),
            status: Style::default(),
        },
        Theme::Light => Palette {
            header: Style::default().fg(Color::Blue),
            expression: Style::default().fg(Color::Gray),
            display: Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
            number_button: Style::default().fg(Color::Black).bg(Color::White),
            operator_button: Style::default().fg(Color::Blue).bg(Color::White),
            equals_button: Style::default().fg(Color::White).bg(Color::Blue),
            selected: Style::default().fg(Color::White).bg(Color::DarkGray),
            pressed: Style::default().fg(Color::Black).bg(Color::Yellow),
            status: Style::default().fg(Color::Black).bg(Color::White),
        },
        Theme::Gamer => Palette {
            header: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            expression: Style::default().fg(Color::Green),
            display: Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            number_button: Style::default().fg(Color::LightMagenta),
            operator_button: Style::default().fg(Color::LightGreen),
            equals_button: Style::default().fg(Color::Black).bg(Color::Magenta),
            selected: Style::default().fg(Color::Black).bg(Color::LightGreen),
            pressed: Style::default().fg(Color::Black).bg(Color::LightYellow),
            status: Style::default().fg(Color::Magenta),
        },
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let palette = palette(app.theme);

    render_header(f, app, &palette, chunks[0]);
    render_expression(f, app, &palette, chunks[1]);
    render_display(f, app, &palette, chunks[2]);
    render_button_grid(f, app, &palette, chunks[3]);
    render_status_bar(f, app, &palette, chunks[4]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let header = Paragraph::new(format!(
        "tcalc - Terminal Calculator | Theme: {}",
        app.theme.name()
    ))
    .style(palette.header);
    f.render_widget(header, area);
}

fn render_expression(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let expression = Paragraph::new(app.calculator.get_current_expression())
        .alignment(Alignment::Right)
        .style(palette.expression);
    f.render_widget(expression, area);
}

fn render_display(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let display = Paragraph::new(app.calculator.get_current_value())
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL))
        .style(palette.display);
    f.render_widget(display, area);
}

fn render_button_grid(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Ratio(1, BUTTON_GRID.len() as u32);
            BUTTON_GRID.len()
        ])
        .split(area);

    for (row, labels) in BUTTON_GRID.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, labels.len() as u32); labels.len()])
            .split(rows[row]);

        for (col, label) in labels.iter().enumerate() {
            let button = Paragraph::new(*label)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL))
                .style(button_style(app, palette, label, row, col));
            f.render_widget(button, cols[col]);
        }
    }
}

/// Picks the style for one button.
///
/// A press highlight takes precedence over the selection cursor, which
/// takes precedence over the button's class style.
fn button_style(app: &App, palette: &Palette, label: &str, row: usize, col: usize) -> Style {
    if app.is_pressed(label) {
        palette.pressed
    } else if row == app.selected_row && col == app.selected_col {
        palette.selected
    } else if label.len() == 1 && label.chars().all(|c| c.is_ascii_digit()) {
        palette.number_button
    } else if label == "=" {
        palette.equals_button
    } else {
        palette.operator_button
    }
}

fn render_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "arrows: select | Space: press | t: theme | Ctrl+Y: copy | F1/?: help | q: quit"
                    .to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help"
            .to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(palette.status);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tcalc Key Reference (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TCALC KEY REFERENCE

=== ENTRY ===
0-9         Enter digits
.           Decimal point (one per number)
Backspace   Delete the last character
Esc         Clear entry (CE) - drops the number being typed
Delete      Clear (C) - resets everything, recovers from errors
s           Toggle sign (+/-)

=== OPERATORS ===
+  -  *  /  Basic arithmetic (chains left to right, no precedence)
%  or p     Remainder
r           Square root  (√x)
x           Square       (x^2)
i           Reciprocal   (1/x)
Enter       Equals (=)

Note: √x, x^2 and 1/x transform the number on the display.

=== BUTTON GRID ===
Arrow keys  Move the selection cursor
Space       Press the selected button

=== APPLICATION ===
t           Cycle theme (Dark / Light / Gamer); persisted on exit
Ctrl+Y      Copy the displayed value to the clipboard
F1 or ?     This help screen
q           Quit

=== ERRORS ===
Division by zero, the reciprocal of zero, and the square root of a
negative number show an error on the display. Press Delete (C) to
recover; other entry is ignored while the error is shown.
"#.to_string()
}

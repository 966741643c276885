//! UI rendering
//!
//! Rendering functions that turn state into terminal frames. They read
//! state and draw; they never change it.

mod calculator;
mod verification;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Screen};

/// Orange used for operator keys
pub const OPERATOR_COLOR: Color = Color::Rgb(0xFF, 0x98, 0x00);

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    match state.current_screen {
        Screen::Calculator => calculator::render(frame, area, state),
        Screen::Verification => verification::render(frame, area, state),
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Style helper honoring `colors_enabled`
pub(crate) fn styled(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default().add_modifier(style.add_modifier)
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  F2       - Calculator"),
        Line::from("  F3       - Verification"),
        Line::from(""),
        Line::from("Calculator:"),
        Line::from("  0-9 .    - Enter number"),
        Line::from("  + - * /  - Operation (x also multiplies)"),
        Line::from("  Enter =  - Evaluate"),
        Line::from("  Bksp     - Delete last input"),
        Line::from("  c Del    - Clear"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

//! Calculator screen: display line over a keypad

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{styled, OPERATOR_COLOR};
use crate::app::AppState;

#[derive(Clone, Copy)]
enum KeyKind {
    Function,
    Digit,
    Operator,
}

/// Keypad rows as (label, width weight, kind)
const KEYPAD: [&[(&str, u32, KeyKind)]; 5] = [
    &[
        ("AC", 2, KeyKind::Function),
        ("Del", 1, KeyKind::Function),
        ("/", 1, KeyKind::Operator),
    ],
    &[
        ("7", 1, KeyKind::Digit),
        ("8", 1, KeyKind::Digit),
        ("9", 1, KeyKind::Digit),
        ("x", 1, KeyKind::Operator),
    ],
    &[
        ("4", 1, KeyKind::Digit),
        ("5", 1, KeyKind::Digit),
        ("6", 1, KeyKind::Digit),
        ("-", 1, KeyKind::Operator),
    ],
    &[
        ("1", 1, KeyKind::Digit),
        ("2", 1, KeyKind::Digit),
        ("3", 1, KeyKind::Digit),
        ("+", 1, KeyKind::Operator),
    ],
    &[
        ("0", 2, KeyKind::Digit),
        (".", 1, KeyKind::Digit),
        ("=", 1, KeyKind::Operator),
    ],
];

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(5),    // Keypad
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_display(frame, chunks[0], state);
    render_keypad(frame, chunks[1], state);

    let hints = Paragraph::new("F1: Help | F3: Verification | q: Quit")
        .style(styled(state, Style::default().fg(Color::Gray)));
    frame.render_widget(hints, chunks[2]);
}

fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = state.calculator.display();
    let display = Paragraph::new(Line::from(text))
        .alignment(Alignment::Right)
        .style(styled(
            state,
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().title(" Calculator ").borders(Borders::ALL));
    frame.render_widget(display, area);
}

fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (row, keys) in rows.iter().zip(KEYPAD) {
        let total: u32 = keys.iter().map(|(_, weight, _)| weight).sum();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                keys.iter()
                    .map(|(_, weight, _)| Constraint::Ratio(*weight, total))
                    .collect::<Vec<_>>(),
            )
            .split(*row);

        for (cell, (label, _, kind)) in cells.iter().zip(keys.iter()) {
            let background = match kind {
                KeyKind::Function => Color::Gray,
                KeyKind::Digit => Color::DarkGray,
                KeyKind::Operator => OPERATOR_COLOR,
            };
            let key = Paragraph::new(*label)
                .alignment(Alignment::Center)
                .style(styled(state, Style::default().fg(Color::White).bg(background)))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(key, *cell);
        }
    }
}

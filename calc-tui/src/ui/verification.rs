//! Verification screen: success banner and live clock

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{centered_rect, styled};
use crate::app::AppState;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let verification = &state.verification;
    let mark = if state.config.unicode_enabled { "✓ " } else { "" };
    let text = vec![
        Line::from(vec![
            Span::styled(mark, styled(state, Style::default().fg(Color::Green))),
            Span::styled(
                verification.banner(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            verification.clock(),
            styled(state, Style::default().fg(Color::Red)),
        )),
    ];

    let outer = Block::default()
        .title(" Verification (F2: Calculator) ")
        .borders(Borders::ALL);
    frame.render_widget(outer, area);

    let body = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(body, centered_rect(80, 30, area));
}

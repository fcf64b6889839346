//! Input editor popup

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rectangle `width` columns wide and `height` rows tall, clipped to `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the edit box over `area`
pub fn render_input_prompt(frame: &mut Frame, area: Rect, buffer: &str, error: Option<&str>) {
    let popup = centered(area, area.width.saturating_mul(3) / 4, 7);

    let block = Block::default()
        .title(" Input: <nums>; <target> ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                "█",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(Span::styled(
            "e.g. [2,7,11,15]; 9",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}

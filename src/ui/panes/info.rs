//! Step caption pane: description, action, calculation and answer

use crate::steps::{result_from_steps, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the info pane for the current step.
///
/// `steps` is the whole sequence; the answer line only appears once the
/// player sits on its last step.
pub fn render_info_pane(frame: &mut Frame, area: Rect, steps: &[Step], current: usize) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(step) = steps.get(current) else {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            step.description.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.action_label.clone(),
            Style::default().fg(DEFAULT_THEME.secondary),
        )),
    ];

    if let Some(calc) = &step.calculation {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                calc.expression.clone(),
                Style::default().fg(DEFAULT_THEME.function),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ⇒ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                calc.result.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.number)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    for arrow in &step.arrows {
        lines.push(Line::from(Span::styled(
            format!("  ↪ {}", arrow.label),
            Style::default().fg(DEFAULT_THEME.tone(arrow.tone)),
        )));
    }

    if current + 1 == steps.len() {
        lines.push(Line::from(""));
        let answer = match result_from_steps(steps) {
            Some((j, i)) => Span::styled(
                format!("Answer: [{}, {}]", j, i),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                "No solution",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(answer));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

//! Array pane: one cell per input element
//!
//! Each cell shows the element's index, its value and the label of any
//! pointer aimed at it. Pointer labels and annotations are listed below
//! the cells. Arrays wider than the pane are windowed around the
//! element the step focuses on.

use crate::steps::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MIN_CELL_WIDTH: usize = 5;
const CELL_GAP: usize = 1;

/// Width of one cell, wide enough for every value and index
fn cell_width(step: &Step) -> usize {
    step.array_state
        .iter()
        .map(|cell| cell.value.to_string().len().max(cell.index.to_string().len()))
        .max()
        .unwrap_or(0)
        .saturating_add(2)
        .max(MIN_CELL_WIDTH)
}

/// Index the step is about: first highlight, else first pointer, else 0
fn focus_index(step: &Step) -> usize {
    step.highlighted_indices
        .first()
        .or_else(|| step.pointers.first().map(|p| &p.target_index))
        .copied()
        .unwrap_or(0)
}

/// First visible cell so that `focus` stays on screen
pub(crate) fn window_start(len: usize, visible: usize, focus: usize) -> usize {
    if len <= visible {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(len - visible)
}

fn fit(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{:^width$}", clipped, width = width)
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, step: &Step, target: i64, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" nums ({} elements) ", step.array_state.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if step.array_state.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = cell_width(step);
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = (inner_width / (width + CELL_GAP)).max(1);
    let len = step.array_state.len();
    let start = window_start(len, visible, focus_index(step));
    let end = (start + visible).min(len);

    let gap = " ".repeat(CELL_GAP);
    let mut index_row = Vec::new();
    let mut value_row = Vec::new();
    let mut pointer_row = Vec::new();

    for cell in &step.array_state[start..end] {
        index_row.push(Span::styled(
            fit(&cell.index.to_string(), width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        index_row.push(Span::raw(gap.clone()));

        let value_style = match cell.highlight_color {
            Some(tone) => Style::default()
                .bg(DEFAULT_THEME.tone(tone))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            None => Style::default()
                .bg(DEFAULT_THEME.cell_bg)
                .fg(DEFAULT_THEME.number),
        };
        value_row.push(Span::styled(fit(&cell.value.to_string(), width), value_style));
        value_row.push(Span::raw(gap.clone()));

        match step.pointers.iter().find(|p| p.target_index == cell.index) {
            Some(pointer) => {
                pointer_row.push(Span::styled(
                    fit("↑", width),
                    Style::default().fg(DEFAULT_THEME.tone(pointer.tone)),
                ));
            }
            None => pointer_row.push(Span::raw(" ".repeat(width))),
        }
        pointer_row.push(Span::raw(gap.clone()));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("target = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(target.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]),
        Line::from(""),
        Line::from(index_row),
        Line::from(value_row),
        Line::from(pointer_row),
    ];

    // Pointer labels are usually wider than a cell, so list them below
    for pointer in &step.pointers {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", pointer.target_index),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                pointer.label.clone(),
                Style::default().fg(DEFAULT_THEME.tone(pointer.tone)),
            ),
        ]));
    }

    for note in &step.annotations {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] {} ", note.target_index, note.position.symbol()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                note.text.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.variable)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    if start > 0 || end < len {
        lines.push(Line::from(Span::styled(
            format!("  showing {}..{} of {}", start, end, len),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_keeps_focus_visible() {
        assert_eq!(window_start(5, 10, 4), 0);
        assert_eq!(window_start(100, 10, 0), 0);
        assert_eq!(window_start(100, 10, 50), 45);
        assert_eq!(window_start(100, 10, 99), 90);
        for focus in 0..100 {
            let start = window_start(100, 7, focus);
            assert!((start..start + 7).contains(&focus));
        }
    }

    #[test]
    fn test_fit_centers_and_clips() {
        assert_eq!(fit("7", 5), "  7  ");
        assert_eq!(fit("1234567", 5), "12345");
    }
}

//! Hash-map pane rendering

use crate::steps::{Endpoint, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Scroll state for the hash-map pane
#[derive(Debug, Default)]
pub struct HashMapScrollState {
    pub offset: usize,
    /// Step whose marked entry was last pulled into view
    pub followed_step: Option<usize>,
}

/// Position of the entry the step draws attention to, if any
fn marked_entry(step: &Step) -> Option<usize> {
    step.arrows
        .iter()
        .find_map(|arrow| match (arrow.from, arrow.to) {
            (Endpoint::HashMap(pos), _) | (_, Endpoint::HashMap(pos)) => Some(pos),
            _ => None,
        })
        .or_else(|| step.hash_map_state.iter().position(|e| e.is_new))
}

/// Render the hash-map pane
pub fn render_hashmap_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    is_focused: bool,
    scroll: &mut HashMapScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(
            " HashMap<value, index> ({}) ",
            step.hash_map_state.len()
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    if step.hash_map_state.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let key_width = step
        .hash_map_state
        .iter()
        .map(|e| e.key.to_string().len())
        .max()
        .unwrap_or(1);

    let arrow_label = |pos: usize| {
        step.arrows
            .iter()
            .find(|a| a.from == Endpoint::HashMap(pos) || a.to == Endpoint::HashMap(pos))
    };

    let all_items: Vec<ListItem> = step
        .hash_map_state
        .iter()
        .enumerate()
        .map(|(pos, entry)| {
            let entry_style = if entry.is_new {
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let mut spans = vec![
                Span::styled(
                    format!(" {:>width$} ", entry.key, width = key_width),
                    entry_style,
                ),
                Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    entry.value.to_string(),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ];

            if let Some(arrow) = arrow_label(pos) {
                spans.push(Span::styled(
                    format!("  ◀ {}", arrow.label),
                    Style::default().fg(DEFAULT_THEME.tone(arrow.tone)),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        scroll.offset = scroll.offset.min(max_scroll);

        // Follow the marked entry once per step; manual scrolling wins after that
        if scroll.followed_step != Some(step.index) {
            if let Some(pos) = marked_entry(step) {
                if pos < scroll.offset {
                    scroll.offset = pos;
                } else if pos >= scroll.offset + visible_height {
                    scroll.offset = pos + 1 - visible_height;
                }
            }
        }
    } else {
        scroll.offset = 0;
    }
    scroll.followed_step = Some(step.index);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

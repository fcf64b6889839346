//! Source code pane rendering with syntax highlighting
//!
//! This module renders the reference listing in the selected display
//! language, with the line the current step executes highlighted and the
//! step's variables shown inline next to the lines that bind them.
//!
//! # Features
//!
//! - Per-language keyword, type and comment highlighting
//! - Current line highlighting with arrow indicator
//! - Inline `name = value` hints for the step's variables
//! - Scroll state that keeps the current line at a fixed visual row
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer. Canonical line numbers
//! from the step are remapped through [`crate::listing::map_line`].

use crate::listing::{self, Language};
use crate::steps::VariableState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for one line of the listing
pub(crate) fn highlight_source_code(line: &str, language: Language) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    // Simple tokenizer over char boundaries
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte_pos, c) = chars[i];

        // Handle comments
        let is_comment = match language {
            Language::Python => c == '#',
            _ => c == '/' && i + 1 < chars.len() && chars[i + 1].1 == '/',
        };
        if is_comment {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            spans.push(Span::styled(
                line[byte_pos..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        // Handle strings
        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                if chars[end].1 == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map(|(b, _)| *b).unwrap_or(line.len());
            spans.push(Span::styled(
                line[byte_pos..end_byte].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_func = c == '(';
                let style = get_keyword_style(&current_word, is_func, language);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                ';' | ',' | '.' | ':' => Style::default().fg(DEFAULT_THEME.fg),
                '+' | '-' | '*' | '/' | '=' | '&' | '|' | '!' | '<' | '>' => {
                    Style::default().fg(DEFAULT_THEME.fg)
                } // Operators
                _ => Style::default(),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false, language);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn is_type_name(word: &str, language: Language) -> bool {
    match language {
        Language::Java => matches!(word, "int" | "Integer" | "Map" | "HashMap" | "void"),
        Language::Python => matches!(word, "int" | "List" | "dict"),
        Language::Go => matches!(word, "int" | "map" | "bool"),
        Language::JavaScript => matches!(word, "Map"),
    }
}

fn is_keyword(word: &str, language: Language) -> bool {
    match language {
        Language::Java => matches!(
            word,
            "public" | "private" | "static" | "new" | "for" | "if" | "else" | "return" | "while"
        ),
        Language::Python => matches!(
            word,
            "def" | "for" | "in" | "if" | "else" | "return" | "while" | "not" | "and" | "or"
        ),
        Language::Go => matches!(
            word,
            "func" | "for" | "range" | "if" | "else" | "return" | "make" | "var"
        ),
        Language::JavaScript => matches!(
            word,
            "function" | "const" | "let" | "var" | "new" | "for" | "if" | "else" | "return"
        ),
    }
}

fn get_keyword_style(word: &str, is_function: bool, language: Language) -> Style {
    if is_type_name(word, language) {
        Style::default().fg(DEFAULT_THEME.type_name)
    } else if is_keyword(word, language) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_function {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg) // Variables/Identifiers
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    language: Language,
    canonical_line: usize,
    variables: &[VariableState],
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Source Code ({}) ", language.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let snippet = listing::snippet(language);
    let current_line = listing::map_line(canonical_line, language);
    let lines: Vec<&str> = snippet.code.lines().collect();
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = current_line.saturating_sub(1).saturating_sub(target_row);

        if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            scroll_state.offset = scroll_state.offset.min(max_scroll);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;

            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content_line = highlight_source_code(line, language);
            if is_current {
                for span in &mut content_line.spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let mut final_spans = vec![Span::styled(format!("{}{:3} ", marker, line_num), num_style)];
            final_spans.extend(content_line.spans);

            let hints: Vec<String> = variables
                .iter()
                .filter(|v| listing::map_line(v.line, language) == line_num)
                .map(|v| format!("{} = {}", v.name, v.value))
                .collect();
            if !hints.is_empty() {
                final_spans.push(Span::styled(
                    format!("   {}", hints.join(", ")),
                    Style::default()
                        .fg(DEFAULT_THEME.variable)
                        .add_modifier(Modifier::ITALIC),
                ));
            }

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

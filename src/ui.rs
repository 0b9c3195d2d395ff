use ratatui::{prelude::*, widgets::*};

use crate::models::ToneTag;

/// Renders a bordered text input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders the tone tag list, checkbox style
pub fn render_tone_list<'a>(
    tones: &'a [ToneTag],
    selected: usize,
    title: &'a str,
    is_focused: bool,
) -> List<'a> {
    let items: Vec<ListItem> = tones
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let style = if is_focused && i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else if tag.selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            let prefix = if tag.selected { "[x]" } else { "[ ]" };
            ListItem::new(format!("{} {}", prefix, tag.name)).style(style)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    )
}

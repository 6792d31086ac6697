//! Step log pane: messages of every step applied so far

use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the step log
///
/// `scroll_offset` is clamped here; set it to `usize::MAX` to follow the
/// newest step.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    trace: Option<&Trace>,
    applied: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let steps = trace
        .map(|t| &t.steps()[..applied.min(t.len())])
        .unwrap_or(&[]);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = steps.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(n, step)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4} ", n + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<12} ", step.kind.as_str()),
                    Style::default().fg(DEFAULT_THEME.for_kind(step.kind)),
                ),
                Span::styled(step.message.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

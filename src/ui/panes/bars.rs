//! Array pane: one bar per element
//!
//! Bars touched by the last applied step take the color of its kind; bars
//! already confirmed in place are drawn as sorted. Everything else uses the
//! neutral bar color.

use crate::ui::app::Lane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render one lane's array as a bar chart
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    lane: &Lane,
    is_focused: bool,
    is_winner: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if is_winner {
        format!(" {} ★ winner ", lane.title())
    } else {
        format!(" {} ", lane.title())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = &lane.error {
        let paragraph = Paragraph::new(error.as_str())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let view = &lane.view;
    let inner_width = block.inner(area).width as usize;
    let (bar_width, bar_gap) = bar_geometry(inner_width, view.values.len());

    let bars: Vec<Bar> = view
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = match view.kind {
                Some(kind) if view.active.contains(&i) => DEFAULT_THEME.for_kind(kind),
                _ if view.is_sorted_at(i) => DEFAULT_THEME.sorted,
                _ => DEFAULT_THEME.bar,
            };
            let bar = Bar::default()
                .value(u64::from(value))
                .style(Style::default().fg(color));
            // Value labels only fit on wide bars
            if bar_width >= 3 {
                bar.text_value(value.to_string())
                    .value_style(Style::default().fg(DEFAULT_THEME.status_bg).bg(color))
            } else {
                bar.text_value(String::new())
            }
        })
        .collect();

    let max = view.values.iter().copied().max().unwrap_or(1).max(1);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(max));

    frame.render_widget(chart, area);
}

/// Widest bars (and a gap, when there is room) that fit `count` bars
fn bar_geometry(width: usize, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let gap = if width >= count * 2 { 1 } else { 0 };
    let bar = ((width + gap) / count).saturating_sub(gap).max(1);
    (bar.min(u16::MAX as usize) as u16, gap as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_geometry(80, 4), (19, 1));
        assert_eq!(bar_geometry(80, 100), (1, 0));
        assert_eq!(bar_geometry(20, 10), (1, 1));
        assert_eq!(bar_geometry(10, 0), (1, 0));
    }
}

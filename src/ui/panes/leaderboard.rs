//! Race results pane, fastest first

use crate::ui::app::Lane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_leaderboard_pane(
    frame: &mut Frame,
    area: Rect,
    lanes: &[Lane],
    winner: Option<&str>,
) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    // Finishers by elapsed time, failures last
    let mut order: Vec<&Lane> = lanes.iter().collect();
    order.sort_by(|a, b| match (&a.metrics, &b.metrics) {
        (Some(x), Some(y)) => x.elapsed.cmp(&y.elapsed),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.label.cmp(&b.label),
    });

    let mut lines = Vec::new();
    for (rank, lane) in order.iter().enumerate() {
        let is_winner = winner == Some(lane.label.as_str());
        let name_style = if is_winner {
            Style::default()
                .fg(DEFAULT_THEME.winner)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", rank + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(lane.title(), name_style),
            Span::styled(
                if is_winner { " ★" } else { "" },
                Style::default().fg(DEFAULT_THEME.winner),
            ),
        ]));

        let detail = match (&lane.metrics, &lane.error) {
            (Some(m), _) => Span::styled(
                format!(
                    "   {:.3} ms · {} cmp · {} swaps",
                    m.elapsed_ms(),
                    m.comparisons,
                    m.swaps
                ),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            (None, Some(error)) => Span::styled(
                format!("   {}", error),
                Style::default().fg(DEFAULT_THEME.error),
            ),
            (None, None) => Span::raw(""),
        };
        lines.push(Line::from(detail));
    }

    if winner.is_none() {
        lines.push(Line::from(Span::styled(
            "No finisher",
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Status bar rendering with keybindings and playback indicators

use crate::playback::Speed;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Steps applied on the focused lane
    pub applied: usize,
    /// Steps in the focused lane's trace
    pub total: usize,
    pub speed: Speed,
    pub is_playing: bool,
    pub is_complete: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bg = Style::default().bg(DEFAULT_THEME.status_bg);

    // Left side: step counter and last message
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.applied, data.total),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" x{} ", data.speed.get()),
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black),
        ),
        Span::styled(format!(" {} ", data.message), bg.fg(DEFAULT_THEME.fg)),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bg)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bg.fg(DEFAULT_THEME.fg);
    let sep_style = bg.fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" → ", " step "),
        (" ⎵ ", " play "),
        (" +/- ", " speed "),
        (" ↵ / ⌫ ", " end/start "),
        (" ⇥ ", " lane "),
        ("q", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let indicator = if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if data.is_complete {
        Some((" END ", DEFAULT_THEME.error))
    } else if data.applied == 0 {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bg)
            .alignment(Alignment::Right),
        layout[1],
    );
}

//! Algorithm pane: run metrics plus catalog entry for the focused lane

use crate::catalog::{self, AlgorithmInfo};
use crate::ui::app::Lane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

/// Snippet shown under the walkthrough
const SNIPPET_LANGUAGE: &str = "rust";

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn catalog_lines(info: &'static AlgorithmInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(info.name),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        field("best", info.time_complexity.best.to_string()),
        field("average", info.time_complexity.average.to_string()),
        field("worst", info.time_complexity.worst.to_string()),
        field("space", info.space_complexity.to_string()),
        field("stable", yes_no(info.stable)),
        field("adaptive", yes_no(info.adaptive)),
        Line::default(),
    ];
    for app in info.applications {
        lines.push(Line::from(Span::styled(
            format!("• {}", app),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    lines.push(Line::default());
    lines.push(heading("How it works"));
    for (n, step) in info.how_it_works.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2}. ", n + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(*step, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    if let Some(snippet) = info.snippet(SNIPPET_LANGUAGE) {
        lines.push(Line::default());
        lines.push(heading("Code"));
        for row in snippet.source.lines() {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(DEFAULT_THEME.secondary),
            )));
        }
    }
    lines
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, lane: &Lane) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut lines = Vec::new();

    if let Some(metrics) = &lane.metrics {
        let total = lane.playback.len();
        lines.push(field("step", format!("{} / {}", lane.view.applied, total)));
        lines.push(field("comparisons", metrics.comparisons.to_string()));
        lines.push(field("swaps", metrics.swaps.to_string()));
        lines.push(field("time", format!("{:.3} ms", metrics.elapsed_ms())));
        lines.push(Line::default());
    }

    match lane.algorithm {
        Some(id) => lines.extend(catalog_lines(catalog::info(id))),
        None => lines.push(Line::from(Span::styled(
            "Unknown algorithm",
            Style::default().fg(DEFAULT_THEME.error),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AlgorithmId;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_walkthrough_is_numbered() {
        let text = plain(&catalog_lines(catalog::info(AlgorithmId::Bubble)));
        let at = text.iter().position(|l| l == "How it works").unwrap();
        assert_eq!(text[at + 1], " 1. Start at the beginning of the array");
        assert_eq!(
            text[at + 6],
            " 6. Repeat the entire process until no swaps are needed"
        );
    }

    #[test]
    fn test_code_keeps_indentation() {
        let text = plain(&catalog_lines(catalog::info(AlgorithmId::Heap)));
        let at = text.iter().position(|l| l == "Code").unwrap();
        assert_eq!(text[at + 1], "fn heap_sort(arr: &mut [u32]) {");
        assert_eq!(text[at + 2], "    let n = arr.len();");
    }
}

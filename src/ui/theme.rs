use crate::trace::StepKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar: Color,       // Untouched element
    pub compare: Color,   // Yellow
    pub swap: Color,      // Red
    pub overwrite: Color, // Teal
    pub pivot: Color,     // Pink
    pub sorted: Color,    // Green
    pub winner: Color,    // Gold
}

impl Theme {
    /// Bar color for an element touched by a step of this kind
    pub fn for_kind(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Compare => self.compare,
            StepKind::Swap => self.swap,
            StepKind::Overwrite => self.overwrite,
            StepKind::PivotSelect => self.pivot,
            StepKind::MarkSorted => self.sorted,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175),
    swap: Color::Rgb(243, 139, 168),
    overwrite: Color::Rgb(148, 226, 213),
    pivot: Color::Rgb(245, 194, 231),
    sorted: Color::Rgb(166, 227, 161),
    winner: Color::Rgb(250, 179, 135),
};

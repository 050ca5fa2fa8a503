use lifeterm_core::grid::ColorTier;
use ratatui::style::{Color, Style};

pub const CHAR_FULL_BLOCK: &str = "█";
pub const CHAR_UPPER_HALF: &str = "▀";
pub const CHAR_LOWER_HALF: &str = "▄";
pub const CHAR_GRAPH_DOT: &str = "•";

pub fn tier_color(tier: ColorTier) -> Color {
    match tier {
        ColorTier::Fresh => Color::Red,
        ColorTier::Young => Color::Green,
        ColorTier::Mature => Color::Blue,
        ColorTier::Ancient => Color::Yellow,
    }
}

/// Style for a two-column cell in normal mode.
pub fn tier_style(tier: ColorTier) -> Style {
    Style::default().fg(tier_color(tier)).bg(Color::White)
}

use lifeterm_core::grid::{Cell, Grid};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::palette::{
    tier_color, tier_style, CHAR_FULL_BLOCK, CHAR_LOWER_HALF, CHAR_UPPER_HALF,
};

/// Draws the board. Dead cells are left untouched.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    double_height: bool,
    use_colors: bool,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, double_height: bool, use_colors: bool) -> Self {
        Self {
            grid,
            double_height,
            use_colors,
        }
    }

    fn render_wide(&self, area: Rect, buf: &mut Buffer) {
        let rows = self.grid.height().min(area.height as usize);
        let cols = self.grid.width().min(area.width as usize / 2);
        for r in 0..rows {
            for (c, cell) in self.grid.row(r)[..cols].iter().enumerate() {
                if !cell.alive {
                    continue;
                }
                let style = if self.use_colors {
                    tier_style(cell.color_tier())
                } else {
                    Style::default()
                };
                let x = area.x + (c * 2) as u16;
                let y = area.y + r as u16;
                buf.set_string(x, y, "██", style);
            }
        }
    }

    fn render_packed(&self, area: Rect, buf: &mut Buffer) {
        let rows = (self.grid.height() / 2).min(area.height as usize);
        let cols = self.grid.width().min(area.width as usize);
        for r in 0..rows {
            let upper = &self.grid.row(r * 2)[..cols];
            let lower = &self.grid.row(r * 2 + 1)[..cols];
            for (c, (top, bottom)) in upper.iter().zip(lower).enumerate() {
                if let Some((symbol, style)) = self.packed_glyph(top, bottom) {
                    buf.set_string(area.x + c as u16, area.y + r as u16, symbol, style);
                }
            }
        }
    }

    fn packed_glyph(&self, top: &Cell, bottom: &Cell) -> Option<(&'static str, Style)> {
        let glyph = match (top.alive, bottom.alive) {
            (false, false) => return None,
            (true, true) if self.use_colors => (
                CHAR_UPPER_HALF,
                Style::default()
                    .fg(tier_color(top.color_tier()))
                    .bg(tier_color(bottom.color_tier())),
            ),
            (true, true) => (CHAR_FULL_BLOCK, Style::default()),
            (true, false) => (CHAR_UPPER_HALF, self.half_style(top)),
            (false, true) => (CHAR_LOWER_HALF, self.half_style(bottom)),
        };
        Some(glyph)
    }

    fn half_style(&self, cell: &Cell) -> Style {
        if self.use_colors {
            Style::default().fg(tier_color(cell.color_tier())).bg(Color::Reset)
        } else {
            Style::default()
        }
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.double_height {
            self.render_packed(area, buf);
        } else {
            self.render_wide(area, buf);
        }
    }
}

use lifeterm_core::simulation::SimulationState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use super::history_graph::HistoryGraph;

/// Bordered stats box with optional duration plots.
pub struct InfoPanel<'a> {
    sim: &'a SimulationState,
    show_history: bool,
}

impl<'a> InfoPanel<'a> {
    pub fn new(sim: &'a SimulationState, show_history: bool) -> Self {
        Self { sim, show_history }
    }

    /// The bottom `height` rows of `screen`, clamped to the screen.
    pub fn area(screen: Rect, height: u16) -> Rect {
        let height = height.min(screen.height);
        Rect::new(
            screen.x,
            screen.y + screen.height - height,
            screen.width,
            height,
        )
    }

    fn lines(&self) -> Vec<String> {
        let grid = &self.sim.grid;
        let paused = if self.sim.is_paused() { " [PAUSED]" } else { "" };
        vec![
            "Game of Life".to_string(),
            format!(
                "Grid: {}x{} ({})",
                grid.width(),
                grid.height(),
                grid.width() * grid.height()
            ),
            format!(
                "Last calculation time   : {:.6} sec",
                self.sim.last_step_duration
            ),
            format!(
                "Average calculation time: {:.6} sec",
                self.sim.average_step_duration
            ),
            format!("Cycles: {}{}", self.sim.iteration_count, paused),
        ]
    }
}

impl<'a> Widget for InfoPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        Clear.render(area, buf);
        Block::default()
            .title("[i]")
            .borders(Borders::ALL)
            .render(area, buf);

        let max_width = (area.width - 2) as usize;
        let text_x = area.x + 1;
        let has_help = area.height >= 4;
        // Stat lines stop above the two help rows.
        let stats_end = if has_help {
            area.bottom() - 3
        } else {
            area.bottom() - 1
        };
        for (i, line) in self.lines().iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= stats_end {
                break;
            }
            buf.set_stringn(text_x, y, line, max_width, Style::default());
        }

        if has_help {
            let help = Style::default().fg(Color::DarkGray);
            buf.set_stringn(
                text_x,
                area.bottom() - 3,
                "[q]uit [r]eset [p]ause [n]ew",
                max_width,
                help,
            );
            buf.set_stringn(
                text_x,
                area.bottom() - 2,
                "[c]olors [h]istory [2]mode",
                max_width,
                help,
            );
        }

        if self.show_history {
            HistoryGraph::new(&self.sim.history, self.sim.iteration_count as usize)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeterm_core::config::{SimulationConfig, MIN_INFO_BOX_HEIGHT};

    fn sim() -> SimulationState {
        let config = SimulationConfig {
            seed: Some(1),
            ..Default::default()
        };
        SimulationState::new(&config, 20, 40).unwrap()
    }

    fn content(buf: &Buffer) -> String {
        format!("{:?}", buf)
    }

    #[test]
    fn test_area_is_bottom_band() {
        let screen = Rect::new(0, 0, 80, 24);
        assert_eq!(InfoPanel::area(screen, 10), Rect::new(0, 14, 80, 10));
        assert_eq!(InfoPanel::area(screen, 40), screen);
    }

    #[test]
    fn test_renders_stats() {
        let mut sim = sim();
        sim.record_step(0.25).unwrap();
        let area = Rect::new(0, 0, 100, 10);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&sim, false).render(area, &mut buf);

        let text = content(&buf);
        assert!(text.contains("Game of Life"));
        assert!(text.contains("Grid: 40x20 (800)"));
        assert!(text.contains("Last calculation time   : 0.250000 sec"));
        assert!(text.contains("Cycles: 1"));
        assert!(text.contains("[c]olors [h]istory [2]mode"));
    }

    #[test]
    fn test_smallest_box_keeps_stats_and_help() {
        let mut sim = sim();
        sim.record_step(0.1).unwrap();
        sim.toggle_pause();
        let area = Rect::new(0, 0, 100, MIN_INFO_BOX_HEIGHT);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&sim, false).render(area, &mut buf);

        let text = content(&buf);
        assert!(text.contains("Cycles: 1 [PAUSED]"));
        assert!(text.contains("[q]uit [r]eset [p]ause [n]ew"));
        assert!(text.contains("[c]olors [h]istory [2]mode"));
    }

    #[test]
    fn test_short_box_drops_stats_not_help() {
        let mut sim = sim();
        sim.toggle_pause();
        let area = Rect::new(0, 0, 100, 8);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&sim, false).render(area, &mut buf);

        let text = content(&buf);
        assert!(!text.contains("[PAUSED]"));
        assert!(text.contains("[q]uit [r]eset [p]ause [n]ew"));
    }

    #[test]
    fn test_paused_marker() {
        let mut sim = sim();
        sim.toggle_pause();
        let area = Rect::new(0, 0, 100, 10);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&sim, false).render(area, &mut buf);
        assert!(content(&buf).contains("[PAUSED]"));
    }

    #[test]
    fn test_history_toggle() {
        let mut sim = sim();
        for d in [0.001, 0.002, 0.003] {
            sim.record_step(d).unwrap();
        }
        let area = Rect::new(0, 0, 160, 10);

        let mut hidden = Buffer::empty(area);
        InfoPanel::new(&sim, false).render(area, &mut hidden);
        assert!(!content(&hidden).contains('•'));

        let mut shown = Buffer::empty(area);
        InfoPanel::new(&sim, true).render(area, &mut shown);
        assert!(content(&shown).contains('•'));
    }
}

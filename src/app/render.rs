use lifeterm_tui::views::history_graph::{FIRST_PLOT_OFFSET, MIN_PLOT_SPACE};
use lifeterm_tui::views::{GridWidget, InfoPanel};
use ratatui::Frame;

use crate::app::state::App;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(
            GridWidget::new(
                &self.sim.grid,
                self.display.double_height,
                self.display.use_colors,
            ),
            area,
        );

        if !self.display.show_info {
            return;
        }
        self.note_graph_fit(area.width);
        f.render_widget(
            InfoPanel::new(&self.sim, self.display.show_history),
            InfoPanel::area(area, self.display.info_box_height),
        );
    }

    fn note_graph_fit(&mut self, width: u16) {
        let omitted = self.display.show_history && FIRST_PLOT_OFFSET + MIN_PLOT_SPACE >= width;
        if omitted && !self.graph_omitted {
            tracing::warn!(width, "Terminal too narrow, history graph omitted");
        }
        self.graph_omitted = omitted;
    }
}

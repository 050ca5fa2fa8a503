pub mod input;
pub mod render;
pub mod shutdown;
pub mod state;

pub use input::Command;
pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;

use lifeterm_tui::Tui;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        self.shutdown.listen_for_ctrl_c();

        while self.should_run() {
            let frame_start = Instant::now();

            let (rows, cols) = Tui::size()?;
            let (height, width) = self.target_dimensions(rows, cols);
            self.sim.tick(height, width)?;

            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            // Wait out the rest of the frame, returning early on input.
            let remaining = self.frame_delay.saturating_sub(frame_start.elapsed());
            if event::poll(remaining)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }
        }

        tracing::info!(
            cycles = self.sim.iteration_count,
            avg_secs = self.sim.average_step_duration,
            "Main loop finished"
        );
        Ok(())
    }
}

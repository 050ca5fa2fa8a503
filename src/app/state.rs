use anyhow::Result;
use std::time::Duration;

use lifeterm_core::config::{AppConfig, DisplayConfig};
use lifeterm_core::grid::grid_dimensions;
use lifeterm_core::simulation::SimulationState;

use crate::app::shutdown::ShutdownManager;

pub struct App {
    pub running: bool,
    /// Live toggles, seeded from the config and flags.
    pub display: DisplayConfig,
    pub sim: SimulationState,
    pub frame_delay: Duration,
    pub shutdown: ShutdownManager,
    /// Set while the history plots do not fit, so the warning is logged once.
    pub graph_omitted: bool,
}

impl App {
    /// Builds the app for a `rows` x `cols` terminal.
    pub fn new(config: AppConfig, rows: u16, cols: u16) -> Result<Self> {
        let (height, width) = grid_dimensions(rows, cols, config.display.double_height);
        let sim = SimulationState::new(&config.simulation, height, width)?;
        tracing::info!(height, width, seed = ?config.simulation.seed, "Simulation created");

        Ok(Self {
            running: true,
            display: config.display,
            sim,
            frame_delay: Duration::from_millis(config.simulation.frame_delay_ms),
            shutdown: ShutdownManager::new(),
            graph_omitted: false,
        })
    }

    /// Grid size the next tick should resize to.
    pub fn target_dimensions(&self, rows: u16, cols: u16) -> (usize, usize) {
        grid_dimensions(rows, cols, self.display.double_height)
    }

    pub fn should_run(&self) -> bool {
        self.running && !self.shutdown.is_shutdown_requested()
    }
}

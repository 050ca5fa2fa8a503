//! The per-frame simulation loop: resize, step, measure, record.

use std::time::Instant;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::fill::RandomFill;
use crate::grid::{Grid, Resize};
use crate::history::HistoryWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// What happened during one call to [`SimulationState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    pub resized: Option<Resize>,
    /// Seconds spent in `Grid::step`, `None` while paused.
    pub step_duration: Option<f64>,
}

/// Grid, telemetry and counters for one running simulation.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub grid: Grid,
    pub history: HistoryWindow,
    pub iteration_count: u64,
    pub last_step_duration: f64,
    pub average_step_duration: f64,
    run_state: RunState,
    fill: RandomFill,
}

impl SimulationState {
    /// Builds a randomly populated `height` x `width` simulation.
    pub fn new(config: &SimulationConfig, height: usize, width: usize) -> Result<Self> {
        let history = HistoryWindow::new(config.window_capacity)?;
        let mut fill = RandomFill::new(config.seed);
        let grid = Grid::new(height, width, &mut fill);
        Ok(Self::from_parts(grid, history, fill))
    }

    pub fn from_parts(grid: Grid, history: HistoryWindow, fill: RandomFill) -> Self {
        Self {
            grid,
            history,
            iteration_count: 0,
            last_step_duration: 0.0,
            average_step_duration: 0.0,
            run_state: RunState::Running,
            fill,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn toggle_pause(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        tracing::debug!(state = ?self.run_state, "Pause toggled");
        self.run_state
    }

    /// Runs one frame of the simulation against the current target size.
    ///
    /// The grid is resized first; a running simulation then steps once and
    /// records how long the step took.
    pub fn tick(&mut self, height: usize, width: usize) -> Result<TickReport> {
        let resized = self.grid.resize(height, width, &mut self.fill);
        if let Some(change) = resized {
            tracing::info!("Size-update: {}", change);
        }

        if self.is_paused() {
            return Ok(TickReport {
                resized,
                step_duration: None,
            });
        }

        let started = Instant::now();
        self.grid.step();
        let elapsed = started.elapsed().as_secs_f64();
        self.record_step(elapsed)?;

        Ok(TickReport {
            resized,
            step_duration: Some(elapsed),
        })
    }

    /// Books a finished step of `duration` seconds. Ignored while paused.
    pub fn record_step(&mut self, duration: f64) -> Result<()> {
        if self.is_paused() {
            return Ok(());
        }
        self.last_step_duration = duration;
        self.history.record(duration, self.iteration_count as usize)?;
        self.iteration_count += 1;

        let n = self.iteration_count as f64;
        self.average_step_duration = (self.average_step_duration * (n - 1.0) + duration) / n;

        if self.iteration_count % 1000 == 0 {
            tracing::debug!(
                iteration = self.iteration_count,
                avg_secs = self.average_step_duration,
                population = self.grid.population(),
                "Simulation telemetry"
            );
        }
        Ok(())
    }

    /// Clears counters and telemetry. The board is left as it is.
    pub fn reset(&mut self) -> Result<()> {
        let history = HistoryWindow::new(self.history.window_capacity())?;
        self.history = history;
        self.iteration_count = 0;
        self.last_step_duration = 0.0;
        self.average_step_duration = 0.0;
        tracing::debug!("Telemetry reset");
        Ok(())
    }

    /// Re-draws the whole board and clears telemetry.
    pub fn reseed(&mut self) -> Result<()> {
        self.grid.randomize(&mut self.fill);
        self.reset()
    }
}

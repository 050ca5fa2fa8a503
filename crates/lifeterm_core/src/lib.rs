//! # Lifeterm Core
//!
//! The simulation and telemetry engine behind the `lifeterm` terminal app:
//! - Conway's Game of Life (B3/S23) on a bounded grid, with per-cell ages
//! - Terminal-driven resizing that keeps the overlapping board
//! - A ring of recent step durations plus a growing all-time log
//! - Configuration, error types and the file log sink
//!
//! ## Example
//!
//! ```
//! use lifeterm_core::fill::RandomFill;
//! use lifeterm_core::grid::Grid;
//!
//! let mut fill = RandomFill::from_seed(42);
//! let mut grid = Grid::new(24, 40, &mut fill);
//! grid.step();
//! grid.resize(30, 40, &mut fill);
//! assert_eq!(grid.height(), 30);
//! ```

/// Configuration for simulation, display and logging
pub mod config;
/// Error types
pub mod error;
/// Random fill for newly exposed cells
pub mod fill;
/// Cell matrix, step function and resizing
pub mod grid;
/// Step-duration history and downsampling
pub mod history;
/// File-backed tracing subscriber
pub mod logging;
/// Per-frame simulation loop
pub mod simulation;

pub use error::LifeError;
pub use grid::{grid_dimensions, Cell, ColorTier, Grid};
pub use history::{downsample, HistoryWindow};
pub use logging::init_logging;
pub use simulation::{RunState, SimulationState, TickReport};

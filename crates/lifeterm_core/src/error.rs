//! Error types for lifeterm_core.

use thiserror::Error;

/// Main error type for simulation and telemetry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// History window capacity too small to be useful for graphing.
    #[error("History size must be greater than 10 (got {capacity})")]
    HistoryCapacity { capacity: usize },

    /// A sample was written past the end of the all-time log.
    #[error("History index {index} out of range (capacity {capacity})")]
    HistoryIndexOutOfRange { index: usize, capacity: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for lifeterm_core operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

//! Configuration management for simulation, display and logging.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. A TOML file (`lifeterm.toml` unless `--config` says otherwise)
//! 3. Command-line flags
//!
//! ## Example `lifeterm.toml`
//!
//! ```toml
//! [simulation]
//! window_capacity = 100
//! seed = 42
//! frame_delay_ms = 15
//!
//! [display]
//! double_height = true
//! use_colors = true
//!
//! [logging]
//! level = "info"
//! path = "log.log"
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::error::{LifeError, Result};
use crate::history::MIN_WINDOW_CAPACITY;

pub const DEFAULT_CONFIG_PATH: &str = "lifeterm.toml";
/// Largest accepted history window.
pub const MAX_WINDOW_CAPACITY: usize = 10_000;
/// Border, five stat rows and two help rows.
pub const MIN_INFO_BOX_HEIGHT: u16 = 9;

/// Simulation and telemetry parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Slots in the recent-duration ring; also the all-time growth step.
    pub window_capacity: usize,
    /// Fixed RNG seed for reproducible boards. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Upper bound on the input poll between frames.
    pub frame_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_capacity: 100,
            seed: None,
            frame_delay_ms: 15,
        }
    }
}

/// Panel visibility and glyph mode at startup. All of these can be toggled live.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub double_height: bool,
    pub use_colors: bool,
    pub show_info: bool,
    pub show_history: bool,
    pub info_box_height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            double_height: false,
            use_colors: true,
            show_info: true,
            show_history: true,
            info_box_height: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `tracing` level filter: `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Append-only diagnostic log file.
    pub path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            path: "log.log".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.level.trim())
            .map_err(|_| LifeError::config(format!("Unknown log level: {}", self.level)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - History window must hold more than 10 and at most 10000 samples
    /// - Info box must fit its text rows (9..=50)
    /// - Frame delay must stay under one second
    /// - Log level must be a known level and the log path non-empty
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.simulation.window_capacity > MIN_WINDOW_CAPACITY,
            "History window must be greater than {}",
            MIN_WINDOW_CAPACITY
        );
        anyhow::ensure!(
            self.simulation.window_capacity <= MAX_WINDOW_CAPACITY,
            "History window too large (max {})",
            MAX_WINDOW_CAPACITY
        );
        anyhow::ensure!(
            self.simulation.frame_delay_ms <= 1000,
            "Frame delay too large (max 1000 ms)"
        );
        anyhow::ensure!(
            (MIN_INFO_BOX_HEIGHT..=50).contains(&self.display.info_box_height),
            "Info box height must be in [{}, 50]",
            MIN_INFO_BOX_HEIGHT
        );
        self.logging.level_filter()?;
        anyhow::ensure!(
            !self.logging.path.trim().is_empty(),
            "Log path must not be empty"
        );
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_window_capacity() {
        let config = AppConfig {
            simulation: SimulationConfig {
                window_capacity: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_window_capacity_upper_bound() {
        let mut config = AppConfig::default();
        config.simulation.window_capacity = MAX_WINDOW_CAPACITY;
        assert!(config.validate().is_ok());
        config.simulation.window_capacity = 65_530;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_info_box_needs_room_for_every_row() {
        let mut config = AppConfig::default();
        config.display.info_box_height = 8;
        assert!(config.validate().is_err());
        config.display.info_box_height = MIN_INFO_BOX_HEIGHT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_info_box_height() {
        let config = AppConfig {
            display: DisplayConfig {
                info_box_height: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: "loud".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [simulation]
            seed = 42

            [display]
            double_height = true
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.simulation.window_capacity, 100);
        assert!(config.display.double_height);
        assert!(config.display.use_colors);
        assert_eq!(config.logging.path, "log.log");
    }

    #[test]
    fn test_toml_rejected_when_invalid() {
        assert!(AppConfig::from_toml("[simulation]\nwindow_capacity = 5\n").is_err());
        assert!(AppConfig::from_toml("[simulation\n").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("definitely/not/here/lifeterm.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_level_filter_parsing() {
        let logging = LoggingConfig {
            level: "WARN".to_string(),
            ..Default::default()
        };
        assert_eq!(logging.level_filter().unwrap(), LevelFilter::WARN);
    }
}

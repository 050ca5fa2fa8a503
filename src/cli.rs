//! Command-line flags.
//!
//! The historical short flags `-nc`, `-nh` and `-ni` are multi-letter, which
//! clap cannot express, so they are rewritten to their long forms first.

use std::ffi::OsString;

use clap::Parser;
use lifeterm_core::config::{AppConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "Conway's Game of Life in the terminal", long_about = None)]
pub struct Args {
    /// Pack two grid rows into each terminal row
    #[arg(short = '2', long = "double-height")]
    pub double_height: bool,

    /// Draw without colors (also -nc)
    #[arg(long)]
    pub no_color: bool,

    /// Hide the duration history at start (also -nh)
    #[arg(long)]
    pub no_history: bool,

    /// Hide the info box at start (also -ni)
    #[arg(long)]
    pub no_info: bool,

    /// Config file path
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Seed for the random board
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Layers the flags over a loaded config. Only flags that were given win.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if self.double_height {
            config.display.double_height = true;
        }
        if self.no_color {
            config.display.use_colors = false;
        }
        if self.no_history {
            config.display.show_history = false;
        }
        if self.no_info {
            config.display.show_info = false;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

/// Rewrites `-nc`, `-nh` and `-ni` to `--no-color`, `--no-history`, `--no-info`.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-nc") => OsString::from("--no-color"),
            Some("-nh") => OsString::from("--no-history"),
            Some("-ni") => OsString::from("--no-info"),
            _ => arg,
        })
        .collect()
}

pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(normalize_legacy_flags(args))
}

/// 0 for `--help`/`--version`, 1 for anything clap rejected.
pub fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Parses the flags, printing usage and exiting on `-h` or a bad flag.
pub fn parse_or_exit<I, T>(args: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_code(&err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_flags_rewritten() {
        let normalized = normalize_legacy_flags(["lifeterm", "-nc", "-2", "-ni", "-nh"]);
        assert_eq!(
            normalized,
            vec!["lifeterm", "--no-color", "-2", "--no-info", "--no-history"]
        );
    }

    #[test]
    fn test_defaults() {
        let args = parse_from(["lifeterm"]).unwrap();
        assert!(!args.double_height);
        assert!(!args.no_color);
        assert_eq!(args.config, DEFAULT_CONFIG_PATH);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let err = parse_from(["lifeterm", "-h"]).unwrap_err();
        assert_eq!(exit_code(&err), 0);
        let err = parse_from(["lifeterm", "--version"]).unwrap_err();
        assert_eq!(exit_code(&err), 0);
    }

    #[test]
    fn test_unknown_flag_exits_one() {
        let err = parse_from(["lifeterm", "-x"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
        let err = parse_from(["lifeterm", "-nq"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }
}

//! Terminal front end for the `lifeterm` Game of Life.
//!
//! The engine lives in `lifeterm_core`; widgets and the terminal guard live in
//! `lifeterm_tui`. This crate wires them into the interactive app.

pub mod app;
pub mod cli;

pub mod model {
    pub use lifeterm_core::config;
    pub use lifeterm_core::fill;
    pub use lifeterm_core::grid;
    pub use lifeterm_core::history;
    pub use lifeterm_core::simulation;
}

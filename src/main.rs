use anyhow::{Context, Result};
use lifeterm_core::config::AppConfig;
use lifeterm_core::init_logging;
use lifeterm_lib::app::App;
use lifeterm_lib::cli;
use lifeterm_tui::Tui;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse_or_exit(std::env::args_os());

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config))?;
    args.apply_to(&mut config);
    config.validate()?;

    init_logging(&config.logging)?;
    tracing::info!("lifeterm {} starting", env!("CARGO_PKG_VERSION"));

    let (rows, cols) = Tui::size().context("Terminal backend unavailable")?;
    let mut app = App::new(config, rows, cols)?;

    let mut tui = Tui::new()?;
    tui.init()?;
    let res = app.run(&mut tui).await;
    tui.exit()?;

    match res {
        Ok(()) => {
            tracing::info!(cycles = app.sim.iteration_count, "Exited clean");
            std::process::exit(app.shutdown.exit_code());
        }
        Err(e) => {
            tracing::error!("Application error: {e:#}");
            Err(e)
        }
    }
}

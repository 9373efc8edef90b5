use anyhow::Result;
use fleetdeck::config::Config;
use fleetdeck::logger::{self, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    if let Some(path) = logger::init(&config.logging)? {
        log::info!("fleetdeck {} starting, logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }

    // Run the TUI application
    fleetdeck::ui::run_app(config, Logger::new()).await?;

    Ok(())
}

//! Yield Architect - a terminal UI for building and managing AI-assisted
//! DeFi yield strategies.

use anyhow::Context;
use yield_architect::{App, Config, config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; the guard flushes the file writer on exit
    let log_dir = config::log_dir().context("resolving log directory")?;
    let _log_guard = logging::init(&log_dir).context("initializing logging")?;

    // Load configuration
    let config = Config::load_or_default().context("loading configuration")?;

    // Run the application
    let mut app = App::new(config).await.context("setting up terminal")?;
    let result = app.run().await;
    drop(app);

    if let Err(e) = &result {
        tracing::error!("application error: {}", e);
    }
    result.context("running application")
}

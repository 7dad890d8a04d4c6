//! # Shopcart Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (`SHOPCART_*`)
//! 2. Initialize tracing (stderr)
//! 3. Run the session on stdin/stdout

use anyhow::Context;
use shopcart_cli::CliConfig;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env().context("failed to load configuration")?;

    shopcart_cli::init_tracing(&config.log_filter);
    debug!(?config, "Configuration loaded");

    shopcart_cli::run(&config).context("shopping session ended abnormally")?;
    Ok(())
}

//! # Shopcart CLI Library
//!
//! The interactive shopping-cart builder: everything that talks to the
//! terminal lives here, everything that computes lives in `shopcart-core`.
//!
//! ## Module Organization
//! ```text
//! shopcart_cli/
//! ├── lib.rs       ◄─── You are here (logging setup & run)
//! ├── config.rs    ◄─── SHOPCART_* environment configuration
//! ├── error.rs     ◄─── CliError for I/O and config failures
//! ├── input.rs     ◄─── LineSource: injectable line reader
//! ├── prompt.rs    ◄─── The four per-item questions and their retry rules
//! ├── session.rs   ◄─── Session loop and cart accumulator
//! └── summary.rs   ◄─── End-of-session cart summary
//! ```
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout  ◄── prompts, validation messages, confirmations, summary      │
//! │  stderr  ◄── tracing logs (RUST_LOG / SHOPCART_LOG, default "warn")    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod prompt;
pub mod session;
pub mod summary;

use std::io;

use shopcart_core::CartTotals;
use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, ConfigError};
pub use error::{CliError, CliResult};
pub use input::LineSource;
pub use session::Session;

/// Runs one session on the process's stdin and stdout.
pub fn run(config: &CliConfig) -> CliResult<CartTotals> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show rejected inputs and item details
/// - Otherwise `default_filter` (from `SHOPCART_LOG`, default `warn`)
///
/// Logs go to stderr so they never interleave with the prompts.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

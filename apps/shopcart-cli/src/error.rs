//! # CLI Error Type
//!
//! Errors that end the session abnormally.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError ──► printed to the user, never reaches this type      │
//! │                                                                         │
//! │  io::Error    ─┬──► CliError ──► anyhow (main) ──► stderr, exit ≠ 0    │
//! │  CoreError    ─┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopcart_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A cart rule was violated after input validation passed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "terminal I/O failed: closed");

        let err: CliError = CoreError::DuplicateItem("Pen".to_string()).into();
        assert_eq!(err.to_string(), "Item 'Pen' is already in the cart");
    }
}

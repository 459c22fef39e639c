//! # CLI Error Type
//!
//! Errors of the terminal application.
//!
//! ## What Is (and Is Not) an Error Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tipcalc                                │
//! │                                                                         │
//! │  Calculator (tipcalc-core)                                              │
//! │  ─────────────────────────                                              │
//! │  bad keystroke ──► rejected silently     ┐                              │
//! │  split at 20   ──► clamped silently      ├── never an error             │
//! │  bill "."      ──► treated as 0          ┘                              │
//! │                                                                         │
//! │  Terminal application (this crate)                                      │
//! │  ─────────────────────────────────                                      │
//! │  config.toml unreadable / malformed ──► CliError::Config*               │
//! │  stdin / stdout failure             ──► CliError::Io                    │
//! │  --quick value not a preset         ──► CliError::Input                 │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                  main: "error: ..." + exit code 1       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::commands::InputError;

/// Errors surfaced by the `tipcalc` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A config file named on the command line or in `TIPCALC_CONFIG`
    /// does not exist.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for [`ConfigState`](crate::state::ConfigState).
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `calc` argument the session would have rejected as input, such as
    /// a `--quick` value that is not one of the preset buttons.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Terminal I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The view could not be written as JSON.
    #[error("failed to encode view as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::from(InputError::UnknownQuickTip {
            value: 22,
            allowed: "15%, 18%, 20%, 25%".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "22% is not a quick tip (available: 15%, 18%, 20%, 25%)"
        );

        let err = CliError::ConfigNotFound {
            path: PathBuf::from("/tmp/missing.toml"),
        };
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");
    }

    #[test]
    fn test_io_converts_to_cli_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}

//! # Logging
//!
//! Structured logging with `tracing` and `tracing-subscriber`.
//!
//! ## Log Levels
//! - `error`: nothing in normal operation
//! - `warn`: ignored environment overrides, rejected `calc` arguments
//! - `info`: startup and session boundaries
//! - `debug`: one event per command, rejected keystrokes, clamped values
//!
//! ## Filter Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  -v / -q given?                                                         │
//! │     ├── yes ──► "<level>,tipcalc_cli=<level>,tipcalc_core=<level>"      │
//! │     └── no  ──► RUST_LOG if set, else the default filter                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything goes to stderr. Stdout only ever carries the calculator.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{CliError, CliResult};

/// Filter used when neither `-v`/`-q` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn,tipcalc_cli=info,tipcalc_core=info";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field format.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// One JSON object per event.
    Json,
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
    /// Honor `RUST_LOG` and [`DEFAULT_FILTER`] instead of `level_filter`.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: false,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self.use_env_filter = false;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// ## Errors
/// [`CliError::Logging`] if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> CliResult<()> {
    let filter = build_env_filter(config);

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .without_time()
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| CliError::Logging(e.to_string()))
}

/// Builds the filter for `config`.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter {
        return EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    }
    EnvFilter::new(level_directives(config.level_filter))
}

/// Directive string that applies `level` to this workspace's crates.
fn level_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("{level},tipcalc_cli={level},tipcalc_core={level}")
}

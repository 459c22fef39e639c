//! # Tipcalc
//!
//! Entry point of the `tipcalc` binary.

use std::io::{self, IsTerminal};

use clap::Parser;
use tipcalc_cli::cli::Cli;
use tipcalc_cli::logging::{init_logging, LogConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = tipcalc_cli::run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// `-v`/`-q` win over `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_format(cli.log_format.into())
        .with_ansi(io::stderr().is_terminal());
    if cli.verbosity.is_present() {
        config = config.with_level_filter(cli.verbosity.tracing_level_filter());
    }
    config
}

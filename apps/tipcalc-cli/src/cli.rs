//! Command-line argument definitions for `tipcalc`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "tipcalc",
    version,
    about = "Calculate a tip and split the bill",
    long_about = "Calculate a tip and split the bill.\n\n\
                  Runs an interactive calculator by default. Use `calc` for a\n\
                  one-shot calculation suitable for scripts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Read settings from this file instead of the default location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive calculator (the default).
    Interactive,

    /// Calculate once and print the result.
    Calc(CalcArgs),

    /// List the quick tip buttons and the slider range.
    Presets {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Bill amount, e.g. 42.50. Input the calculator would reject is ignored.
    #[arg(long, value_name = "AMOUNT", default_value = "")]
    pub bill: String,

    /// Tip percentage on the slider (clamped to 10-30).
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true, conflicts_with = "quick")]
    pub tip: Option<i64>,

    /// Tip percentage from a quick tip button.
    #[arg(long, value_name = "PERCENT")]
    pub quick: Option<u32>,

    /// Number of people sharing the bill (clamped to 1-20).
    #[arg(long, value_name = "PEOPLE", default_value_t = 1)]
    pub split: u32,

    /// Print the view as JSON instead of the card.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

//! # Tipcalc CLI Library
//!
//! Terminal front end for the tip calculator.
//!
//! ## Module Organization
//! ```text
//! tipcalc_cli/
//! ├── lib.rs          ◄─── You are here (startup & subcommand dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── logging.rs      ◄─── tracing subscriber setup
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── calculator.rs ◄─ Session-owned calculator
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line parsing & dispatch
//! │   ├── bill.rs     ◄─── Bill input commands
//! │   ├── tip.rs      ◄─── Quick tip & slider commands
//! │   └── split.rs    ◄─── Split commands
//! ├── render.rs       ◄─── Text card
//! ├── session.rs      ◄─── Interactive loop
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse arguments (main.rs) ────────────────────────────────────────► │
//! │  2. Initialize logging (main.rs) ─────────────────────────────────────► │
//! │     • stderr, EnvFilter, -v / -q                                        │
//! │  3. Load configuration ───────────────────────────────────────────────► │
//! │     • --config, TIPCALC_CONFIG, or the platform config dir              │
//! │     • TIPCALC_* environment overrides                                   │
//! │  4. Build CalculatorState ────────────────────────────────────────────► │
//! │  5. Run the subcommand ───────────────────────────────────────────────► │
//! │     • interactive: session loop on stdin / stdout                       │
//! │     • calc: replay the arguments, print once                            │
//! │     • presets: list the tip controls                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;
pub mod state;

use std::io::{self, IsTerminal, Write};

use tipcalc_core::CalculatorView;
use tracing::{info, warn};

use cli::{CalcArgs, Cli, Command};
use commands::{bill, split, tip};
use error::CliResult;
use render::{render_card, PresetList};
use state::{CalculatorState, ConfigState};

/// Runs the subcommand selected on the command line.
pub fn run(cli: Cli) -> CliResult<()> {
    let config = ConfigState::load(cli.config.as_deref())?;
    info!(
        default_tip = config.default_tip_percentage,
        currency = %config.currency.code,
        "Configuration loaded"
    );

    let mut state = CalculatorState::from_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session::run_session(&mut state, stdin.lock(), &mut out, prompt)
        }
        Command::Calc(args) => {
            let view = calculate(&mut state, &args)?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                write!(out, "{}", render_card(&view, &state.currency().symbol))?;
            }
            Ok(())
        }
        Command::Presets { json } => {
            let presets = PresetList {
                quick_tips: state.quick_tips().clone(),
                slider: state.slider(),
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&presets)?)?;
            } else {
                write!(out, "{}", presets.render())?;
            }
            Ok(())
        }
    }
}

/// Replays `calc` arguments through the same commands the session uses.
///
/// ## Errors
/// `--quick` with a value that is not a quick tip button.
pub fn calculate(state: &mut CalculatorState, args: &CalcArgs) -> CliResult<CalculatorView> {
    let view = bill::set_bill(state, &args.bill);
    if view.bill_input != args.bill {
        warn!(bill = %args.bill, "Ignoring bill amount the calculator would reject");
    }

    if let Some(percent) = args.quick {
        tip::quick_tip(state, percent)?;
    } else if let Some(raw) = args.tip {
        tip::slide_tip(state, raw);
    }

    Ok(split::split_between(state, args.split))
}

//! # Interactive Session
//!
//! Reads one command per line, applies it and prints the result.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Loop                                         │
//! │                                                                         │
//! │  print card                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  read line ──► EOF ──────────────────────────────────────► done         │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Command::from_str ──► dispatch                                         │
//! │      │                   │                                              │
//! │      │ InputError        ├── Render ──► card                            │
//! │      ▼                   ├── Json   ──► pretty JSON                     │
//! │  "hint: ..."             ├── Help   ──► command list                    │
//! │                          └── Quit   ──────────────────────► done        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad input never ends the session. Only I/O failures do.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::{dispatch, Command, Outcome, HELP};
use crate::error::CliResult;
use crate::render::render_card;
use crate::state::CalculatorState;

/// Prompt printed before each line when attached to a terminal.
pub const PROMPT: &str = "> ";

/// Runs the session until `quit` or end of input.
///
/// `prompt` controls whether [`PROMPT`] is written before each read.
pub fn run_session<R, W>(
    state: &mut CalculatorState,
    input: R,
    out: &mut W,
    prompt: bool,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    write_card(state, out)?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Command>()
            .and_then(|command| dispatch(state, command));

        match outcome {
            Ok(Outcome::Render(view)) => {
                writeln!(out, "{}", render_card(&view, &state.currency().symbol))?;
            }
            Ok(Outcome::Json(view)) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            }
            Ok(Outcome::Help) => writeln!(out, "{HELP}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                debug!(error = %e, "Input rejected");
                writeln!(out, "hint: {e}")?;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

fn write_card<W: Write>(state: &CalculatorState, out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", render_card(&state.view(), &state.currency().symbol))?;
    Ok(())
}

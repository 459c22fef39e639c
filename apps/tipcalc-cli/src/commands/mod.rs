//! # Commands Module
//!
//! Input events of the terminal front end, one per line.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing, dispatch)
//! ├── bill.rs     ◄─── bill, type, back, clear
//! ├── tip.rs      ◄─── quick, tip
//! └── split.rs    ◄─── +, -
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Command Flow                                 │
//! │                                                                         │
//! │  "quick 20"                                                             │
//! │      │ Command::from_str                                                │
//! │      ▼                                                                  │
//! │  Command::QuickTip(20)                                                  │
//! │      │ dispatch(&mut CalculatorState, command)                          │
//! │      ▼                                                                  │
//! │  tip::quick_tip() ──► Calculator::set_tip_percentage()                  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Outcome::Render(CalculatorView) ──► session prints the card            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line that does not parse becomes an [`InputError`]; the session prints
//! it as a hint and carries on. These never reach the calculator.

pub mod bill;
pub mod split;
pub mod tip;

use std::str::FromStr;

use thiserror::Error;
use tipcalc_core::CalculatorView;
use tracing::debug;

use crate::state::CalculatorState;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `bill <text>`: replace the bill input (empty text clears it).
    SetBill(String),
    /// `type <chars>`: one keystroke per character.
    Type(String),
    /// `back`: delete the last character.
    Backspace,
    /// `clear`: empty the bill input.
    Clear,
    /// `quick <n>`: press a preset button.
    QuickTip(u32),
    /// `tip <n>`: move the slider.
    Slide(i64),
    /// `+` / `inc`
    Increment,
    /// `-` / `dec`
    Decrement,
    /// `reset`: back to defaults.
    Reset,
    /// `show`: print the card again.
    Show,
    /// `json`: print the view as JSON.
    Json,
    Help,
    Quit,
}

/// Why a line could not be turned into a [`Command`] or applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}' expects {expected}, got '{value}'")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{value}% is not a quick tip (available: {allowed})")]
    UnknownQuickTip { value: u32, allowed: String },
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "bill" => Command::SetBill(rest.to_string()),
            "type" => {
                if rest.is_empty() {
                    return Err(InputError::MissingArgument {
                        command: "type",
                        expected: "one or more characters",
                    });
                }
                Command::Type(rest.to_string())
            }
            "back" | "backspace" => Command::Backspace,
            "clear" => Command::Clear,
            "quick" => Command::QuickTip(parse_arg("quick", "a whole percentage", rest)?),
            "tip" | "slider" => Command::Slide(parse_arg("tip", "a whole percentage", rest)?),
            "+" | "inc" => Command::Increment,
            "-" | "dec" => Command::Decrement,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(InputError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(
    command: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, InputError> {
    if raw.is_empty() {
        return Err(InputError::MissingArgument { command, expected });
    }
    raw.trim_end_matches('%')
        .parse()
        .map_err(|_| InputError::InvalidArgument {
            command,
            expected,
            value: raw.to_string(),
        })
}

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print the card for this view.
    Render(CalculatorView),
    /// Print this view as JSON.
    Json(CalculatorView),
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Applies one command to the session's calculator.
pub fn dispatch(state: &mut CalculatorState, command: Command) -> Result<Outcome, InputError> {
    let outcome = match command {
        Command::SetBill(raw) => Outcome::Render(bill::set_bill(state, &raw)),
        Command::Type(keys) => Outcome::Render(bill::type_keys(state, &keys)),
        Command::Backspace => Outcome::Render(bill::backspace(state)),
        Command::Clear => Outcome::Render(bill::clear_bill(state)),
        Command::QuickTip(percent) => Outcome::Render(tip::quick_tip(state, percent)?),
        Command::Slide(raw) => Outcome::Render(tip::slide_tip(state, raw)),
        Command::Increment => Outcome::Render(split::increment_split(state)),
        Command::Decrement => Outcome::Render(split::decrement_split(state)),
        Command::Reset => {
            debug!("reset command");
            let tip = state.default_tip();
            state.with_calculator_mut(|c| c.reset(tip));
            Outcome::Render(state.view())
        }
        Command::Show => Outcome::Render(state.view()),
        Command::Json => Outcome::Json(state.view()),
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Command list printed by `help`.
pub const HELP: &str = "\
Commands:
  bill <amount>   set the bill (e.g. bill 42.50); 'bill' alone clears it
  type <keys>     type characters one at a time
  back            delete the last character
  clear           clear the bill
  quick <n>       press a quick tip button
  tip <n>         move the tip slider (10-30)
  + / inc         one more person
  - / dec         one fewer person
  reset           start over
  show            show the calculator
  json            show the calculator as JSON
  help            show this list
  quit            leave";

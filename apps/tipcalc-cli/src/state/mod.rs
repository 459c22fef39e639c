//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────────────┐    │
//! │  │   ConfigState        │          │   CalculatorState            │    │
//! │  │                      │ ───────► │                              │    │
//! │  │  default tip         │  built   │  Calculator (bill/tip/split) │    │
//! │  │  quick tips          │  from    │  presets, slider, currency   │    │
//! │  │  currency format     │          │                              │    │
//! │  └──────────────────────┘          └──────────────────────────────┘    │
//! │                                                                         │
//! │  • ConfigState: read-only after startup                                 │
//! │  • CalculatorState: owned by one session, mutated one event at a time  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorState;
pub use config::{default_config_path, ConfigState, CONFIG_PATH_ENV};

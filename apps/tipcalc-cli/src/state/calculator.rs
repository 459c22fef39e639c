//! # Calculator State
//!
//! The one calculator a session owns, plus the display settings it is
//! rendered with.
//!
//! ## Ownership
//! The session loop is single-threaded and handles one event at a time, so
//! the calculator is owned directly and borrowed mutably by each command.
//! There is no lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State                                     │
//! │                                                                         │
//! │  ConfigState ──► CalculatorState::from_config()                         │
//! │                    ├── calculator   (bill, tip, split)                  │
//! │                    ├── quick_tips   (preset buttons)                    │
//! │                    ├── slider       (10..=30)                           │
//! │                    ├── currency     (display format)                    │
//! │                    └── default_tip  (used by reset)                     │
//! │                                                                         │
//! │  command ──► with_calculator_mut(|c| ...) ──► view() ──► render         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tipcalc_core::{Calculator, CalculatorView, CurrencyFormat, QuickTips, TipPercentage, TipSlider};

use crate::state::ConfigState;

/// Session-owned calculator state.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    calculator: Calculator,
    quick_tips: QuickTips,
    slider: TipSlider,
    currency: CurrencyFormat,
    default_tip: TipPercentage,
}

impl CalculatorState {
    /// Creates a fresh calculator configured by `config`.
    pub fn from_config(config: &ConfigState) -> Self {
        let default_tip = config.default_tip();
        CalculatorState {
            calculator: Calculator::with_tip_percentage(default_tip),
            quick_tips: config.quick_tips(),
            slider: TipSlider::default(),
            currency: config.currency.clone(),
            default_tip,
        }
    }

    /// Executes a function with write access to the calculator.
    pub fn with_calculator_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Calculator) -> R,
    {
        f(&mut self.calculator)
    }

    pub fn quick_tips(&self) -> &QuickTips {
        &self.quick_tips
    }

    pub fn slider(&self) -> TipSlider {
        self.slider
    }

    pub fn default_tip(&self) -> TipPercentage {
        self.default_tip
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Snapshot of what the calculator currently shows.
    pub fn view(&self) -> CalculatorView {
        CalculatorView::build(&self.calculator, &self.currency, &self.quick_tips, self.slider)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::from_config(&ConfigState::default())
    }
}

//! # View Module
//!
//! A serializable snapshot of everything the calculator shows.
//!
//! ## Screen Regions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bill Amount     $ [ 100        ]              ◄── billInput            │
//! │  Quick Tip       [15%] [18%] [20%] [25%]       ◄── quickTips, active    │
//! │  Tip Percentage  ──────●──────── 20%           ◄── slider, tipPercentage│
//! │  Split Between   [ − ]  4 people  [ + ]        ◄── splitCount, canX     │
//! │  ─────────────────────────────────────────────                          │
//! │  Tip Amount                        $20.00      ◄── tipAmount            │
//! │  Grand Total                      $120.00      ◄── grandTotal           │
//! │  Per Person (4 people)             $30.00      ◄── perPerson, splitHint │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot is built fresh after every event and never mutated.

use serde::Serialize;
use ts_rs::TS;

use crate::calculator::{Amounts, Calculator};
use crate::money::CurrencyFormat;
use crate::types::{QuickTips, TipPercentage, TipSlider};

/// Display snapshot of a calculator.
///
/// ## Serialization
/// ```json
/// {
///   "billInput": "100",
///   "tipPercentage": 20,
///   "splitCount": 4,
///   "amounts": { "bill": 100.0, "tip": 20.0, "grandTotal": 120.0, "perPerson": 30.0 },
///   "tipAmount": "$20.00",
///   "grandTotal": "$120.00",
///   "perPerson": "$30.00",
///   ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorView {
    /// Bill text exactly as stored.
    pub bill_input: String,

    pub tip_percentage: TipPercentage,

    pub split_count: u32,

    /// Unrounded derived values.
    pub amounts: Amounts,

    /// Formatted tip amount.
    pub tip_amount: String,

    /// Formatted grand total.
    pub grand_total: String,

    /// Formatted per-person share.
    pub per_person: String,

    /// Preset buttons in display order.
    pub quick_tips: QuickTips,

    /// The preset button that matches the current tip, if any.
    pub active_quick_tip: Option<TipPercentage>,

    pub slider: TipSlider,

    /// `"person"` or `"people"`.
    pub people_label: String,

    /// `"(N people)"` next to the per-person label when split between more
    /// than one.
    pub split_hint: Option<String>,

    pub can_increment_split: bool,

    pub can_decrement_split: bool,
}

impl CalculatorView {
    /// Builds the snapshot for the calculator's current state.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::{Calculator, CalculatorView, CurrencyFormat, QuickTips, TipSlider};
    ///
    /// let mut calc = Calculator::new();
    /// calc.set_bill_input("50");
    ///
    /// let view = CalculatorView::build(
    ///     &calc,
    ///     &CurrencyFormat::default(),
    ///     &QuickTips::default(),
    ///     TipSlider::default(),
    /// );
    /// assert_eq!(view.tip_amount, "$9.00");
    /// assert_eq!(view.grand_total, "$59.00");
    /// assert_eq!(view.active_quick_tip.map(|t| t.percent()), Some(18));
    /// ```
    pub fn build(
        calculator: &Calculator,
        currency: &CurrencyFormat,
        quick_tips: &QuickTips,
        slider: TipSlider,
    ) -> Self {
        let amounts = calculator.amounts();
        let split = calculator.split_count();
        let tip_percentage = calculator.tip_percentage();

        let split_hint = (split.get() > 1).then(|| format!("({} people)", split.get()));

        CalculatorView {
            bill_input: calculator.bill_input().to_string(),
            tip_percentage,
            split_count: split.get(),
            amounts,
            tip_amount: currency.format(amounts.tip),
            grand_total: currency.format(amounts.grand_total),
            per_person: currency.format(amounts.per_person),
            quick_tips: quick_tips.clone(),
            active_quick_tip: quick_tips.active(tip_percentage),
            slider,
            people_label: split.noun().to_string(),
            split_hint,
            can_increment_split: split.can_increment(),
            can_decrement_split: split.can_decrement(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

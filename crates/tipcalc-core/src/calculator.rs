//! # Calculator Module
//!
//! Owns the three input states and derives the four amounts from them.
//!
//! ## State And Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State & Derivation                        │
//! │                                                                         │
//! │  Input Event              Operation               State Change          │
//! │  ───────────              ─────────               ────────────          │
//! │                                                                         │
//! │  Keystroke / paste ──────► set_bill_input() ─────► bill_input (guarded) │
//! │                                                                         │
//! │  Quick tip / slider ─────► set_tip_percentage() ─► tip_percentage       │
//! │                                                                         │
//! │  [ + ] / [ − ] ──────────► increment_split()  ───► split_count (1..=20) │
//! │                            decrement_split()                            │
//! │                                                                         │
//! │  Render ─────────────────► amounts() ────────────► (read only)          │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │              derive_amounts(bill_input, tip, split)                     │
//! │              bill       = parse(bill_input) or 0                        │
//! │              tip        = bill × (tip% / 100)                           │
//! │              grandTotal = bill + tip                                    │
//! │              perPerson  = grandTotal / split                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64?
//! The amounts are never stored, summed across transactions or persisted;
//! they exist only to be shown. Rounding happens once, in the display
//! formatter, so no intermediate value is rounded.

use serde::Serialize;
use ts_rs::TS;

use crate::types::{SplitCount, TipPercentage};
use crate::validation::is_valid_bill_input;

// =============================================================================
// Derived Amounts
// =============================================================================

/// The four values derived from the calculator's inputs.
///
/// All fields are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Amounts {
    /// Parsed bill amount (0 when the input is empty or unparseable).
    pub bill: f64,

    /// `bill × tip% / 100`.
    pub tip: f64,

    /// `bill + tip`.
    pub grand_total: f64,

    /// `grand_total / split`.
    pub per_person: f64,
}

/// Parses the bill input, falling back to zero.
///
/// ## Fallback Rules
/// - Empty string → 0
/// - Anything that is not a complete decimal number (`"."`, `"12abc"`) → 0
/// - `"nan"` and `"inf"` spelled out → 0
///
/// A digit string beyond `f64::MAX` is still a number and parses to infinity.
///
/// ## Example
/// ```rust
/// use tipcalc_core::parse_bill;
///
/// assert_eq!(parse_bill("12.50"), 12.5);
/// assert_eq!(parse_bill("12."), 12.0);
/// assert_eq!(parse_bill(".5"), 0.5);
/// assert_eq!(parse_bill(""), 0.0);
/// assert_eq!(parse_bill("."), 0.0);
/// ```
pub fn parse_bill(bill_input: &str) -> f64 {
    match bill_input.parse::<f64>() {
        Ok(bill) if bill.is_finite() => bill,
        // digits past f64::MAX, as opposed to "inf" or "nan" words
        Ok(bill) if is_valid_bill_input(bill_input) => bill,
        _ => 0.0,
    }
}

/// Derives tip, grand total and per-person share from raw inputs.
///
/// Pure: identical inputs always produce bit-identical outputs.
///
/// ## Example
/// ```rust
/// use tipcalc_core::{derive_amounts, SplitCount, TipPercentage};
///
/// let amounts = derive_amounts("100", TipPercentage::new(20), SplitCount::default());
/// assert_eq!(amounts.tip, 20.0);
/// assert_eq!(amounts.grand_total, 120.0);
/// assert_eq!(amounts.per_person, 120.0);
/// ```
pub fn derive_amounts(bill_input: &str, tip_percentage: TipPercentage, split: SplitCount) -> Amounts {
    let bill = parse_bill(bill_input);
    let tip = bill * tip_percentage.fraction();
    let grand_total = bill + tip;
    let per_person = grand_total / f64::from(split.get());

    Amounts {
        bill,
        tip,
        grand_total,
        per_person,
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// The calculator's mutable state.
///
/// ## Invariants
/// - `bill_input` is empty or matches the bill pattern
///   (see [`is_valid_bill_input`])
/// - `split_count` is within 1..=20
/// - `tip_percentage` is whatever the last control set; no bounds
///
/// No operation fails. Rejected or out-of-range input leaves the state as it
/// was, and the boolean results exist only so callers can log what happened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calculator {
    bill_input: String,
    tip_percentage: TipPercentage,
    split_count: SplitCount,
}

impl Calculator {
    /// Creates a calculator with default state: empty bill, 18%, 1 person.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator whose tip starts at `tip_percentage`.
    pub fn with_tip_percentage(tip_percentage: TipPercentage) -> Self {
        Calculator {
            tip_percentage,
            ..Self::default()
        }
    }

    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    pub fn tip_percentage(&self) -> TipPercentage {
        self.tip_percentage
    }

    pub fn split_count(&self) -> SplitCount {
        self.split_count
    }

    /// Replaces the bill input if `raw` is empty or a valid decimal.
    ///
    /// Returns `true` when the value was stored. A rejected candidate is a
    /// no-op, not an error.
    pub fn set_bill_input(&mut self, raw: &str) -> bool {
        if !is_valid_bill_input(raw) {
            return false;
        }
        raw.clone_into(&mut self.bill_input);
        true
    }

    /// Appends one typed character to the bill input.
    ///
    /// The candidate `current + ch` goes through [`Calculator::set_bill_input`],
    /// so a keystroke that would break the pattern is dropped.
    pub fn type_char(&mut self, ch: char) -> bool {
        let mut candidate = String::with_capacity(self.bill_input.len() + ch.len_utf8());
        candidate.push_str(&self.bill_input);
        candidate.push(ch);
        self.set_bill_input(&candidate)
    }

    /// Deletes the last character of the bill input.
    ///
    /// Returns `false` when the input was already empty.
    pub fn backspace(&mut self) -> bool {
        // every prefix of a valid input is valid, so no re-check is needed
        self.bill_input.pop().is_some()
    }

    /// Sets the tip percentage with no bounds check.
    ///
    /// Quick presets call this directly; the slider clamps first through
    /// [`TipSlider::clamp`](crate::TipSlider::clamp).
    pub fn set_tip_percentage(&mut self, tip_percentage: TipPercentage) {
        self.tip_percentage = tip_percentage;
    }

    /// Adds one person, up to 20. Returns whether the count changed.
    pub fn increment_split(&mut self) -> bool {
        let before = self.split_count;
        self.split_count = before.increment();
        self.split_count != before
    }

    /// Removes one person, down to 1. Returns whether the count changed.
    pub fn decrement_split(&mut self) -> bool {
        let before = self.split_count;
        self.split_count = before.decrement();
        self.split_count != before
    }

    /// Restores the empty bill and a single person, with the given tip.
    pub fn reset(&mut self, tip_percentage: TipPercentage) {
        *self = Calculator::with_tip_percentage(tip_percentage);
    }

    /// Derives the amounts for the current state.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn amounts(&self) -> Amounts {
        derive_amounts(&self.bill_input, self.tip_percentage, self.split_count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn split_of(n: u32) -> SplitCount {
        (1..n).fold(SplitCount::default(), |split, _| split.increment())
    }

    #[test]
    fn test_derive_empty_bill() {
        let amounts = derive_amounts("", TipPercentage::new(18), SplitCount::default());
        assert_eq!(
            amounts,
            Amounts {
                bill: 0.0,
                tip: 0.0,
                grand_total: 0.0,
                per_person: 0.0,
            }
        );
    }

    #[test]
    fn test_derive_hundred_at_twenty_percent() {
        let amounts = derive_amounts("100", TipPercentage::new(20), SplitCount::default());
        assert_eq!(amounts.bill, 100.0);
        assert_eq!(amounts.tip, 20.0);
        assert_eq!(amounts.grand_total, 120.0);
        assert_eq!(amounts.per_person, 120.0);

        let split = derive_amounts("100", TipPercentage::new(20), split_of(4));
        assert_eq!(split.per_person, 30.0);
    }

    #[test]
    fn test_intermediate_values_are_not_rounded() {
        // 33.33 * 0.15 = 4.9995 before display rounding
        let amounts = derive_amounts("33.33", TipPercentage::new(15), split_of(3));
        assert!((amounts.tip - 4.9995).abs() < 1e-9);
        assert!((amounts.per_person - (33.33 + 33.33 * 0.15) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_bill_fallbacks() {
        assert_eq!(parse_bill(""), 0.0);
        assert_eq!(parse_bill("."), 0.0);
        assert_eq!(parse_bill("12abc"), 0.0);
        assert_eq!(parse_bill("NaN"), 0.0);
        assert_eq!(parse_bill("inf"), 0.0);
        assert_eq!(parse_bill("infinity"), 0.0);
        assert_eq!(parse_bill(&"9".repeat(400)), f64::INFINITY);
        assert_eq!(parse_bill("007.25"), 7.25);
    }

    #[test]
    fn test_oversized_bill_is_infinite() {
        let mut calc = Calculator::new();
        assert!(calc.set_bill_input(&format!("1{}", "0".repeat(309))));
        let amounts = calc.amounts();
        assert!(amounts.bill.is_infinite());
        assert!(amounts.grand_total.is_infinite());

        // one digit shorter is still finite
        calc.set_bill_input(&format!("1{}", "0".repeat(308)));
        assert!(calc.amounts().grand_total.is_finite());
    }

    #[test]
    fn test_set_bill_input_guard() {
        let mut calc = Calculator::new();
        assert!(calc.set_bill_input("12.5"));
        assert_eq!(calc.bill_input(), "12.5");

        assert!(!calc.set_bill_input("12.555"));
        assert!(!calc.set_bill_input("12a"));
        assert!(!calc.set_bill_input("1.2.3"));
        assert_eq!(calc.bill_input(), "12.5");

        assert!(calc.set_bill_input(""));
        assert_eq!(calc.bill_input(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut calc = Calculator::new();
        for ch in "12.345x".chars() {
            calc.type_char(ch);
        }
        assert_eq!(calc.bill_input(), "12.34");

        assert!(!calc.type_char('.'));
        assert!(calc.backspace());
        assert_eq!(calc.bill_input(), "12.3");

        let mut empty = Calculator::new();
        assert!(!empty.backspace());
    }

    #[test]
    fn test_split_clamps() {
        let mut calc = Calculator::new();
        assert!(!calc.decrement_split());
        assert_eq!(calc.split_count().get(), 1);

        for _ in 0..25 {
            calc.increment_split();
        }
        assert_eq!(calc.split_count().get(), 20);
        assert!(!calc.increment_split());
        assert!(calc.decrement_split());
        assert_eq!(calc.split_count().get(), 19);
    }

    #[test]
    fn test_tip_setter_has_no_bounds() {
        let mut calc = Calculator::new();
        calc.set_tip_percentage(TipPercentage::new(5));
        assert_eq!(calc.tip_percentage().percent(), 5);
        calc.set_tip_percentage(TipPercentage::new(45));
        assert_eq!(calc.tip_percentage().percent(), 45);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut calc = Calculator::new();
        calc.set_bill_input("80");
        calc.set_tip_percentage(TipPercentage::new(25));
        calc.increment_split();

        calc.reset(TipPercentage::default());
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_amounts_recomputed_each_read() {
        let mut calc = Calculator::new();
        calc.set_bill_input("50");
        let first = calc.amounts();
        assert_eq!(first.tip.to_bits(), calc.amounts().tip.to_bits());

        calc.increment_split();
        assert_eq!(calc.amounts().per_person, first.grand_total / 2.0);
    }
}

//! # Render Module
//!
//! Draws a [`CalculatorView`] as a text card.
//!
//! ```text
//! Tip Calculator
//! Calculate and split your bill
//!
//! Bill Amount      $ 100
//! Quick Tip        15%  18%  [20%]  25%
//! Tip Percentage   20%  (10% to 30%)
//! Split Between    [-]  4 people  [+]
//! ────────────────────────────────────────
//! Tip Amount                        $20.00
//! Grand Total                      $120.00
//! Per Person (4 people)             $30.00
//! ```

use std::fmt::Write;

use serde::Serialize;
use tipcalc_core::{CalculatorView, QuickTips, TipSlider};

use crate::commands::tip::describe_quick_tips;

/// Width of the card, in characters.
pub const CARD_WIDTH: usize = 40;

const LABEL_WIDTH: usize = 17;

/// Renders the full calculator card.
pub fn render_card(view: &CalculatorView, currency_symbol: &str) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "Tip Calculator");
    let _ = writeln!(out, "Calculate and split your bill");
    let _ = writeln!(out);

    let bill = if view.bill_input.is_empty() {
        "0.00"
    } else {
        view.bill_input.as_str()
    };
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{} {}", "Bill Amount", currency_symbol, bill);

    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Quick Tip", render_quick_tips(view));

    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}  ({} to {})",
        "Tip Percentage", view.tip_percentage, view.slider.min, view.slider.max
    );

    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}  {} {}  {}",
        "Split Between",
        if view.can_decrement_split { "[-]" } else { " - " },
        view.split_count,
        view.people_label,
        if view.can_increment_split { "[+]" } else { " + " },
    );

    let _ = writeln!(out, "{}", "─".repeat(CARD_WIDTH));
    out.push_str(&result_line("Tip Amount", &view.tip_amount));
    out.push_str(&result_line("Grand Total", &view.grand_total));

    let per_person_label = match &view.split_hint {
        Some(hint) => format!("Per Person {hint}"),
        None => "Per Person".to_string(),
    };
    out.push_str(&result_line(&per_person_label, &view.per_person));

    out
}

/// Preset buttons with the active one in brackets.
fn render_quick_tips(view: &CalculatorView) -> String {
    view.quick_tips
        .iter()
        .map(|tip| {
            if Some(tip) == view.active_quick_tip {
                format!("[{tip}]")
            } else {
                tip.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// A label on the left and a value flush right.
fn result_line(label: &str, value: &str) -> String {
    let used = label.chars().count() + value.chars().count();
    let pad = CARD_WIDTH.saturating_sub(used).max(1);
    format!("{label}{}{value}\n", " ".repeat(pad))
}

/// The tip controls printed by `tipcalc presets`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetList {
    pub quick_tips: QuickTips,
    pub slider: TipSlider,
}

impl PresetList {
    /// Two lines: the quick tip buttons and the slider range.
    pub fn render(&self) -> String {
        format!(
            "{:<LABEL_WIDTH$}{}\n{:<LABEL_WIDTH$}{} to {}\n",
            "Quick Tip",
            describe_quick_tips(&self.quick_tips),
            "Tip Percentage",
            self.slider.min,
            self.slider.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CalculatorState;

    #[test]
    fn test_card_for_split_bill() {
        let mut state = CalculatorState::default();
        state.with_calculator_mut(|c| {
            c.set_bill_input("100");
            c.set_tip_percentage(tipcalc_core::TipPercentage::new(20));
            for _ in 0..3 {
                c.increment_split();
            }
        });

        let card = render_card(&state.view(), "$");
        assert!(card.contains("Bill Amount      $ 100\n"));
        assert!(card.contains("15%  18%  [20%]  25%"));
        assert!(card.contains("Tip Percentage   20%  (10% to 30%)"));
        assert!(card.contains("[-]  4 people  [+]"));
        assert!(card.contains("Tip Amount                        $20.00\n"));
        assert!(card.contains("Grand Total                      $120.00\n"));
        assert!(card.contains("Per Person (4 people)             $30.00\n"));
    }

    #[test]
    fn test_card_defaults() {
        let card = render_card(&CalculatorState::default().view(), "$");
        assert!(card.contains("$ 0.00"));
        assert!(card.contains(" -   1 person  [+]"));
        assert!(card.contains("[18%]"));
        assert!(card.contains("Per Person                         $0.00\n"));
    }

    #[test]
    fn test_preset_list() {
        let presets = PresetList {
            quick_tips: QuickTips::default(),
            slider: TipSlider::default(),
        };
        assert_eq!(
            presets.render(),
            "Quick Tip        15%, 18%, 20%, 25%\nTip Percentage   10% to 30%\n"
        );

        let json = serde_json::to_value(&presets).unwrap();
        assert_eq!(json["quickTips"], serde_json::json!([15, 18, 20, 25]));
        assert_eq!(json["slider"]["min"], 10);
    }

    #[test]
    fn test_result_line_never_glues() {
        let line = result_line(&"x".repeat(50), "$1.00");
        assert!(line.contains("x $1.00"));
    }
}

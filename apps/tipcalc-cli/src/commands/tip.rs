//! # Tip Commands
//!
//! The two controls that set the tip percentage.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quick <n>  ──► must be a preset ──► set_tip_percentage(n)   (verbatim) │
//! │  tip <n>    ──► slider.clamp(n)  ──► set_tip_percentage(..)  (10..=30)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tipcalc_core::{CalculatorView, QuickTips};
use tracing::debug;

use crate::commands::InputError;
use crate::state::CalculatorState;

/// Presses the quick tip button showing `percent`.
///
/// ## Errors
/// [`InputError::UnknownQuickTip`] when no such button exists.
pub fn quick_tip(state: &mut CalculatorState, percent: u32) -> Result<CalculatorView, InputError> {
    debug!(percent = %percent, "quick_tip command");

    let tip = state
        .quick_tips()
        .find(percent)
        .ok_or_else(|| InputError::UnknownQuickTip {
            value: percent,
            allowed: describe_quick_tips(state.quick_tips()),
        })?;

    state.with_calculator_mut(|c| c.set_tip_percentage(tip));
    Ok(state.view())
}

/// Moves the slider to `raw`, clamped to the slider's range.
pub fn slide_tip(state: &mut CalculatorState, raw: i64) -> CalculatorView {
    debug!(raw = %raw, "slide_tip command");

    let slider = state.slider();
    let tip = slider.clamp(raw);
    if i64::from(tip.percent()) != raw {
        debug!(raw = %raw, clamped = %tip, "Slider value clamped");
    }

    state.with_calculator_mut(|c| c.set_tip_percentage(tip));
    state.view()
}

/// `"15%, 18%, 20%, 25%"`, or `"none"` for an empty list.
pub fn describe_quick_tips(quick_tips: &QuickTips) -> String {
    if quick_tips.is_empty() {
        return "none".to_string();
    }
    quick_tips
        .iter()
        .map(|tip| tip.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    #[test]
    fn test_quick_tip_sets_exact_value() {
        let mut state = CalculatorState::default();
        let view = quick_tip(&mut state, 25).unwrap();
        assert_eq!(view.tip_percentage.percent(), 25);
        assert_eq!(view.active_quick_tip.map(|t| t.percent()), Some(25));
    }

    #[test]
    fn test_quick_tip_outside_slider_range() {
        let config = ConfigState {
            quick_tips: vec![5, 40],
            ..ConfigState::default()
        };
        let mut state = CalculatorState::from_config(&config);

        assert_eq!(quick_tip(&mut state, 40).unwrap().tip_percentage.percent(), 40);
        assert_eq!(quick_tip(&mut state, 5).unwrap().tip_percentage.percent(), 5);
    }

    #[test]
    fn test_unknown_quick_tip() {
        let mut state = CalculatorState::default();
        let err = quick_tip(&mut state, 22).unwrap_err();
        assert_eq!(
            err.to_string(),
            "22% is not a quick tip (available: 15%, 18%, 20%, 25%)"
        );
        assert_eq!(state.view().tip_percentage.percent(), 18);
    }

    #[test]
    fn test_slider_clamps() {
        let mut state = CalculatorState::default();
        assert_eq!(slide_tip(&mut state, 22).tip_percentage.percent(), 22);
        assert_eq!(slide_tip(&mut state, 3).tip_percentage.percent(), 10);
        assert_eq!(slide_tip(&mut state, 75).tip_percentage.percent(), 30);
    }

    #[test]
    fn test_describe_empty_quick_tips() {
        assert_eq!(describe_quick_tips(&QuickTips::from_percents([])), "none");
    }
}

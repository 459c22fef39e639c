//! # Bill Commands
//!
//! Edits of the bill input.
//!
//! ## Keystroke Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > type 12.345                                                          │
//! │                                                                         │
//! │   '1' ──► "1"       accepted                                            │
//! │   '2' ──► "12"      accepted                                            │
//! │   '.' ──► "12."     accepted                                            │
//! │   '3' ──► "12.3"    accepted                                            │
//! │   '4' ──► "12.34"   accepted                                            │
//! │   '5' ──► "12.345"  rejected, input stays "12.34"                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tipcalc_core::CalculatorView;
use tracing::debug;

use crate::state::CalculatorState;

/// Replaces the whole bill input, as a paste would.
///
/// A non-conforming value is dropped and the previous input stays.
pub fn set_bill(state: &mut CalculatorState, raw: &str) -> CalculatorView {
    debug!(raw = %raw, "set_bill command");

    if !state.with_calculator_mut(|c| c.set_bill_input(raw)) {
        debug!(raw = %raw, "Bill input rejected");
    }
    state.view()
}

/// Types each character of `keys` as one keystroke.
pub fn type_keys(state: &mut CalculatorState, keys: &str) -> CalculatorView {
    debug!(keys = %keys, "type_keys command");

    state.with_calculator_mut(|c| {
        for ch in keys.chars() {
            if !c.type_char(ch) {
                debug!(key = %ch, input = %c.bill_input(), "Keystroke rejected");
            }
        }
    });
    state.view()
}

/// Deletes the last character of the bill input.
pub fn backspace(state: &mut CalculatorState) -> CalculatorView {
    debug!("backspace command");
    state.with_calculator_mut(|c| c.backspace());
    state.view()
}

/// Empties the bill input.
pub fn clear_bill(state: &mut CalculatorState) -> CalculatorView {
    debug!("clear_bill command");
    state.with_calculator_mut(|c| c.set_bill_input(""));
    state.view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bill_keeps_previous_on_reject() {
        let mut state = CalculatorState::default();
        assert_eq!(set_bill(&mut state, "25.50").bill_input, "25.50");
        assert_eq!(set_bill(&mut state, "25.505").bill_input, "25.50");
        assert_eq!(set_bill(&mut state, "abc").bill_input, "25.50");
    }

    #[test]
    fn test_type_keys_drops_bad_keystrokes() {
        let mut state = CalculatorState::default();
        let view = type_keys(&mut state, "1a2.3.45");
        assert_eq!(view.bill_input, "12.34");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut state = CalculatorState::default();
        type_keys(&mut state, "99.5");
        assert_eq!(backspace(&mut state).bill_input, "99.");
        assert_eq!(clear_bill(&mut state).bill_input, "");
        assert_eq!(backspace(&mut state).bill_input, "");
    }
}

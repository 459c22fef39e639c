//! # Split Commands
//!
//! The `+` and `−` buttons next to the split count.

use tipcalc_core::CalculatorView;
use tracing::debug;

use crate::state::CalculatorState;

/// Adds one person (no-op at 20).
pub fn increment_split(state: &mut CalculatorState) -> CalculatorView {
    debug!("increment_split command");
    if !state.with_calculator_mut(|c| c.increment_split()) {
        debug!("Split count already at maximum");
    }
    state.view()
}

/// Removes one person (no-op at 1).
pub fn decrement_split(state: &mut CalculatorState) -> CalculatorView {
    debug!("decrement_split command");
    if !state.with_calculator_mut(|c| c.decrement_split()) {
        debug!("Split count already at minimum");
    }
    state.view()
}

/// Moves the split count to `people` one press at a time.
///
/// Used by the one-shot `calc` command. Values beyond the bounds end up at
/// the nearest bound, exactly as repeated button presses would.
pub fn split_between(state: &mut CalculatorState, people: u32) -> CalculatorView {
    debug!(people = %people, "split_between command");
    state.with_calculator_mut(|c| {
        while c.split_count().get() < people && c.increment_split() {}
        while c.split_count().get() > people && c.decrement_split() {}
    });
    state.view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement() {
        let mut state = CalculatorState::default();
        assert_eq!(decrement_split(&mut state).split_count, 1);
        assert_eq!(increment_split(&mut state).split_count, 2);
        assert_eq!(decrement_split(&mut state).split_count, 1);
    }

    #[test]
    fn test_increment_stops_at_twenty() {
        let mut state = CalculatorState::default();
        for _ in 0..25 {
            increment_split(&mut state);
        }
        let view = state.view();
        assert_eq!(view.split_count, 20);
        assert!(!view.can_increment_split);
    }

    #[test]
    fn test_split_between_clamps() {
        let mut state = CalculatorState::default();
        assert_eq!(split_between(&mut state, 4).split_count, 4);
        assert_eq!(split_between(&mut state, 50).split_count, 20);
        assert_eq!(split_between(&mut state, 0).split_count, 1);
    }
}

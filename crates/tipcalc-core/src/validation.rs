//! # Validation Module
//!
//! Keystroke validation for the bill input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Input: Silent Rejection                         │
//! │                                                                         │
//! │  current: "12.5"        user types "7"        candidate: "12.57"        │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                   is_valid_bill_input("12.57") ← THIS MODULE            │
//! │                                │                                        │
//! │               ┌────────────────┴────────────────┐                       │
//! │               ▼                                 ▼                       │
//! │         true: store it                 false: keep "12.5"               │
//! │                                        (no message, no error)           │
//! │                                                                         │
//! │  Pattern:  ^[0-9]*\.?[0-9]{0,2}$     or the empty string                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pattern is prefix-closed: deleting the last character of an accepted
//! input always yields another accepted input.
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::validation::is_valid_bill_input;
//!
//! assert!(is_valid_bill_input("42.50"));
//! assert!(!is_valid_bill_input("42.505"));
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// ASCII digits only: `\d` would also admit other Unicode decimal digits.
static BILL_INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]{0,2}$").expect("Invalid bill input regex"));

/// Returns whether `raw` may be stored as the bill input.
///
/// ## Rules
/// - The empty string is always accepted
/// - Optional integer digits
/// - Optional single `.`
/// - At most two fractional digits
///
/// Signs, exponents, whitespace, separators and letters are all rejected.
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::is_valid_bill_input;
///
/// assert!(is_valid_bill_input(""));
/// assert!(is_valid_bill_input("."));
/// assert!(is_valid_bill_input("12."));
/// assert!(is_valid_bill_input(".5"));
/// assert!(!is_valid_bill_input("1.2.3"));
/// assert!(!is_valid_bill_input("abc"));
/// ```
pub fn is_valid_bill_input(raw: &str) -> bool {
    raw.is_empty() || BILL_INPUT_PATTERN.is_match(raw)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_decimal_inputs() {
        for raw in ["", "0", "7", "100", "12.", "12.3", "12.34", ".", ".5", ".55", "007"] {
            assert!(is_valid_bill_input(raw), "{raw:?} should be accepted");
        }
    }

    #[test]
    fn test_rejects_non_conforming_inputs() {
        for raw in [
            "a", "12a", "12.345", "1.2.3", "..", "-5", "+5", "1e3", " 12", "12 ", "1,000", "12.\n",
            "١٢",
        ] {
            assert!(!is_valid_bill_input(raw), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_pattern_is_prefix_closed() {
        let accepted = "1234.56";
        for end in 0..=accepted.len() {
            assert!(is_valid_bill_input(&accepted[..end]));
        }
    }
}

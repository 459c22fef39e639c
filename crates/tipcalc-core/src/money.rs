//! # Money Module
//!
//! Currency formatting for the three output regions.
//!
//! ## Display-Only Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE ROUNDING HAPPENS                                                 │
//! │                                                                         │
//! │  bill 33.33 ──► tip 4.9995 ──► total 38.3295 ──► per person 12.7765    │
//! │                     │               │                   │               │
//! │                     ▼               ▼                   ▼               │
//! │                  "$5.00"        "$38.33"            "$12.78"            │
//! │                                                                         │
//! │  Arithmetic always uses the unrounded value on the left.                │
//! │  Only the strings on the right are rounded.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! The value is first written as its shortest round-trip decimal
//! (`1.005_f64` is `"1.005"`), then rounded half away from zero to two
//! fractional digits on those decimal digits. So `1.005` shows as `$1.01`,
//! which is what a user who typed `1.005` expects, even though the binary
//! value is slightly below `1.005`.
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::money::CurrencyFormat;
//!
//! let usd = CurrencyFormat::default();
//! assert_eq!(usd.format(1234.5), "$1,234.50");
//! assert_eq!(usd.format(0.0), "$0.00");
//! ```

use serde::{Deserialize, Serialize};

/// Number of fractional digits shown for every amount.
pub const FRACTION_DIGITS: usize = 2;

// =============================================================================
// Currency Format
// =============================================================================

/// How amounts are written for display.
///
/// ## Defaults (en-US, USD)
/// - Symbol: `$`, placed before the number
/// - Thousands separator: `,`
/// - Decimal separator: `.`
/// - Negative values: `-$5.50`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// ISO 4217 code, informational only (no conversion is ever done).
    pub code: String,

    /// Symbol placed in front of the number.
    pub symbol: String,

    /// Digit group separator for the integer part.
    pub thousands_separator: String,

    /// Separator between integer and fractional digits.
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Formats an amount as currency text.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::CurrencyFormat;
    ///
    /// let usd = CurrencyFormat::default();
    /// assert_eq!(usd.format(12.7765), "$12.78");
    /// assert_eq!(usd.format(1_000_000.0), "$1,000,000.00");
    /// assert_eq!(usd.format(-5.5), "-$5.50");
    /// ```
    pub fn format(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };

        if !amount.is_finite() {
            let body = if amount.is_nan() { "NaN" } else { "∞" };
            return format!("{}{}{}", sign, self.symbol, body);
        }

        let (whole, fraction) = round_half_away(amount.abs());
        format!(
            "{}{}{}{}{}",
            sign,
            self.symbol,
            group_thousands(&whole, &self.thousands_separator),
            self.decimal_separator,
            fraction
        )
    }
}

// =============================================================================
// Decimal Helpers
// =============================================================================

/// Rounds a non-negative finite value to [`FRACTION_DIGITS`] places.
///
/// Works on the decimal digits of the shortest round-trip representation,
/// which `f64`'s `Display` produces without exponent notation.
///
/// Returns the integer digits and exactly two fractional digits.
fn round_half_away(value: f64) -> (String, String) {
    let repr = value.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    // integer digits followed by the kept fractional digits, as one number
    let mut digits: Vec<u8> = whole.bytes().collect();
    let mut kept = fraction.bytes().take(FRACTION_DIGITS).collect::<Vec<u8>>();
    kept.resize(FRACTION_DIGITS, b'0');
    digits.extend_from_slice(&kept);

    let round_up = fraction
        .as_bytes()
        .get(FRACTION_DIGITS)
        .is_some_and(|d| *d >= b'5');

    if round_up {
        increment_digits(&mut digits);
    }

    let split = digits.len() - FRACTION_DIGITS;
    let fraction_digits = digits.split_off(split);
    // both halves are ASCII digits
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction_digits).into_owned(),
    )
}

/// Adds one to a string of ASCII digits, growing it on full carry.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Inserts `separator` between groups of three integer digits.
fn group_thousands(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        let usd = CurrencyFormat::default();
        assert_eq!(usd.format(0.0), "$0.00");
        assert_eq!(usd.format(20.0), "$20.00");
        assert_eq!(usd.format(120.0), "$120.00");
        assert_eq!(usd.format(0.5), "$0.50");
        assert_eq!(usd.format(0.01), "$0.01");
    }

    #[test]
    fn test_format_groups_thousands() {
        let usd = CurrencyFormat::default();
        assert_eq!(usd.format(999.99), "$999.99");
        assert_eq!(usd.format(1000.0), "$1,000.00");
        assert_eq!(usd.format(1234.5), "$1,234.50");
        assert_eq!(usd.format(123_456_789.0), "$123,456,789.00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        let usd = CurrencyFormat::default();
        assert_eq!(usd.format(1.005), "$1.01");
        assert_eq!(usd.format(4.9995), "$5.00");
        assert_eq!(usd.format(12.7765), "$12.78");
        assert_eq!(usd.format(2.344), "$2.34");
        assert_eq!(usd.format(999.995), "$1,000.00");
        assert_eq!(usd.format(-0.125), "-$0.13");
    }

    #[test]
    fn test_format_negative() {
        let usd = CurrencyFormat::default();
        assert_eq!(usd.format(-5.5), "-$5.50");
        assert_eq!(usd.format(-1234.0), "-$1,234.00");
    }

    #[test]
    fn test_format_non_finite() {
        let usd = CurrencyFormat::default();
        assert_eq!(usd.format(f64::INFINITY), "$∞");
        assert_eq!(usd.format(f64::NEG_INFINITY), "-$∞");
        assert_eq!(usd.format(f64::NAN), "$NaN");
    }

    #[test]
    fn test_custom_separators() {
        let eur = CurrencyFormat {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        };
        assert_eq!(eur.format(1234.5), "€1.234,50");
    }

    #[test]
    fn test_increment_digits_carries() {
        let mut digits = b"999".to_vec();
        increment_digits(&mut digits);
        assert_eq!(digits, b"1000".to_vec());
    }
}

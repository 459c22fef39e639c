//! # tipcalc-core: Pure Calculator Logic for Tipcalc
//!
//! This crate is the **heart** of Tipcalc. It owns the three input states of
//! the calculator and derives everything the user sees from them, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tipcalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tipcalc-cli (terminal)                       │   │
//! │  │    bill input ──► quick tip / slider ──► split ──► render      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one event at a time                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tipcalc-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │calculator │  │   money   │  │ validation│  │   │
//! │  │   │ TipPct    │  │ state +   │  │ currency  │  │ bill text │  │   │
//! │  │   │ Split     │  │ derive    │  │ format    │  │ pattern   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                         │                                       │   │
//! │  │                   ┌─────▼─────┐                                 │   │
//! │  │                   │   view    │  serializable display snapshot  │   │
//! │  │                   └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ERRORS • PURE DERIVATION                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Tip percentage, split count, slider and preset controls
//! - [`validation`] - Bill input pattern
//! - [`calculator`] - Calculator state and the pure derivation
//! - [`money`] - Currency formatting for display
//! - [`view`] - Display snapshot of a calculator
//!
//! ## Design Principles
//!
//! 1. **Pure Derivation**: amounts are recomputed on every read, never cached
//! 2. **Silent Correction**: invalid input is rejected, clamped or zeroed,
//!    never reported as an error
//! 3. **Unrounded Arithmetic**: only the display string is rounded
//!
//! ## Example Usage
//!
//! ```rust
//! use tipcalc_core::{Calculator, TipPercentage};
//!
//! let mut calc = Calculator::new();
//! calc.set_bill_input("100");
//! calc.set_tip_percentage(TipPercentage::new(20));
//! for _ in 0..3 {
//!     calc.increment_split();
//! }
//!
//! let amounts = calc.amounts();
//! assert_eq!(amounts.tip, 20.0);
//! assert_eq!(amounts.grand_total, 120.0);
//! assert_eq!(amounts.per_person, 30.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{derive_amounts, parse_bill, Amounts, Calculator};
pub use money::CurrencyFormat;
pub use types::{QuickTips, SplitCount, TipPercentage, TipSlider};
pub use validation::is_valid_bill_input;
pub use view::CalculatorView;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tip percentage a fresh calculator starts with.
pub const DEFAULT_TIP_PERCENTAGE: u32 = 18;

/// Quick tip buttons shown by default, in display order.
pub const DEFAULT_QUICK_TIPS: [u32; 4] = [15, 18, 20, 25];

/// Lower bound of the tip slider (inclusive).
pub const MIN_SLIDER_TIP: u32 = 10;

/// Upper bound of the tip slider (inclusive).
pub const MAX_SLIDER_TIP: u32 = 30;

/// Fewest people a bill can be split between.
pub const MIN_SPLIT: u32 = 1;

/// Most people a bill can be split between.
///
/// ## Business Reason
/// Matches the page's counter; beyond 20 the per-person figure stops being
/// useful for a table bill.
pub const MAX_SPLIT: u32 = 20;

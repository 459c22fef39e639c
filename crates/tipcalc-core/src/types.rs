//! # Domain Types
//!
//! The value types behind the calculator's three inputs and the controls
//! that produce them.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ TipPercentage   │   │   SplitCount    │   │    QuickTips    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32, unchecked │   │  1..=20 clamped │   │  15 18 20 25    │       │
//! │  │  default 18     │   │  default 1      │   │  set verbatim   │       │
//! │  └────────▲────────┘   └─────────────────┘   └────────┬────────┘       │
//! │           │                                            │                │
//! │           │          ┌─────────────────┐               │                │
//! │           └──────────│    TipSlider    │◄──────────────┘                │
//! │             clamp()  │  10..=30        │  presets may lie outside       │
//! │                      └─────────────────┘                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Bounds Live
//! `TipPercentage` carries no bounds of its own. The slider clamps before it
//! hands a value over; quick presets never do. `SplitCount` is the opposite:
//! its bounds are an invariant of the type and every mutation clamps.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::{
    DEFAULT_QUICK_TIPS, DEFAULT_TIP_PERCENTAGE, MAX_SLIDER_TIP, MAX_SPLIT, MIN_SLIDER_TIP,
    MIN_SPLIT,
};

// =============================================================================
// Tip Percentage
// =============================================================================

/// Tip percentage in whole percent (18 = 18%).
///
/// ## Why No Bounds?
/// The setter is shared by two controls with different rules. The slider
/// clamps to [10, 30] through [`TipSlider::clamp`]; quick presets are applied
/// exactly as configured, even outside the slider's range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct TipPercentage(u32);

impl TipPercentage {
    /// Creates a tip percentage from whole percent.
    #[inline]
    pub const fn new(percent: u32) -> Self {
        TipPercentage(percent)
    }

    /// Returns the percentage in whole percent.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Returns the tip as a multiplier (18% = 0.18).
    ///
    /// Computed as `percent / 100` so the derivation matches the
    /// `bill * (tip / 100)` form exactly.
    #[inline]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        TipPercentage(DEFAULT_TIP_PERCENTAGE)
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the grand total.
///
/// ## Invariants
/// - Always within [`MIN_SPLIT`, `MAX_SPLIT`] (1 to 20)
/// - Only changes by ±1 through [`SplitCount::increment`] and
///   [`SplitCount::decrement`], which saturate at the bounds
///
/// ## User Workflow
/// ```text
///   [ − ]   1 person   [ + ]      ◄── − disabled at 1
///   [ − ]   4 people   [ + ]
///   [ − ]  20 people   [ + ]      ◄── + disabled at 20
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// The lowest split count.
    pub const MIN: SplitCount = SplitCount(MIN_SPLIT);

    /// The highest split count.
    pub const MAX: SplitCount = SplitCount(MAX_SPLIT);

    /// Returns the number of people.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// One more person, saturating at [`SplitCount::MAX`].
    #[inline]
    pub fn increment(self) -> Self {
        SplitCount((self.0 + 1).min(MAX_SPLIT))
    }

    /// One fewer person, saturating at [`SplitCount::MIN`].
    #[inline]
    pub fn decrement(self) -> Self {
        SplitCount(self.0.saturating_sub(1).max(MIN_SPLIT))
    }

    /// Whether the increment button is enabled.
    #[inline]
    pub const fn can_increment(&self) -> bool {
        self.0 < MAX_SPLIT
    }

    /// Whether the decrement button is enabled.
    #[inline]
    pub const fn can_decrement(&self) -> bool {
        self.0 > MIN_SPLIT
    }

    /// `"person"` for one, `"people"` otherwise.
    pub const fn noun(&self) -> &'static str {
        if self.0 == 1 {
            "person"
        } else {
            "people"
        }
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::MIN
    }
}

impl fmt::Display for SplitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.noun())
    }
}

// =============================================================================
// Tip Slider
// =============================================================================

/// The continuous tip control.
///
/// The slider is the only place the [10, 30] range is enforced: whatever the
/// user drags (or types) is clamped here before it reaches the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipSlider {
    pub min: TipPercentage,
    pub max: TipPercentage,
}

impl TipSlider {
    /// Clamps a raw slider position into the slider's range.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::TipSlider;
    ///
    /// let slider = TipSlider::default();
    /// assert_eq!(slider.clamp(22).percent(), 22);
    /// assert_eq!(slider.clamp(5).percent(), 10);
    /// assert_eq!(slider.clamp(99).percent(), 30);
    /// ```
    pub fn clamp(&self, raw: i64) -> TipPercentage {
        let min = i64::from(self.min.percent());
        let max = i64::from(self.max.percent());
        // both bounds are u32, so the clamped value fits
        TipPercentage::new(raw.clamp(min, max) as u32)
    }
}

impl Default for TipSlider {
    fn default() -> Self {
        TipSlider {
            min: TipPercentage::new(MIN_SLIDER_TIP),
            max: TipPercentage::new(MAX_SLIDER_TIP),
        }
    }
}

// =============================================================================
// Quick Tips
// =============================================================================

/// The preset tip buttons, in ascending order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct QuickTips(Vec<TipPercentage>);

impl QuickTips {
    /// Builds the preset list from whole percentages.
    ///
    /// Values are sorted and deduplicated. Nothing is clamped: a preset may
    /// lie outside the slider's range.
    pub fn from_percents<I>(percents: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut tips: Vec<TipPercentage> = percents.into_iter().map(TipPercentage::new).collect();
        tips.sort_unstable();
        tips.dedup();
        QuickTips(tips)
    }

    /// Looks up the preset with the given value.
    pub fn find(&self, percent: u32) -> Option<TipPercentage> {
        self.0.iter().copied().find(|tip| tip.percent() == percent)
    }

    /// The preset that matches the current percentage, if any.
    pub fn active(&self, current: TipPercentage) -> Option<TipPercentage> {
        self.0.iter().copied().find(|tip| *tip == current)
    }

    pub fn iter(&self) -> impl Iterator<Item = TipPercentage> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for QuickTips {
    fn default() -> Self {
        QuickTips::from_percents(DEFAULT_QUICK_TIPS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percentage_fraction() {
        assert_eq!(TipPercentage::new(20).fraction(), 0.2);
        assert_eq!(TipPercentage::new(0).fraction(), 0.0);
        assert_eq!(TipPercentage::default().percent(), 18);
        assert_eq!(TipPercentage::new(25).to_string(), "25%");
    }

    #[test]
    fn test_split_count_saturates() {
        let mut split = SplitCount::default();
        assert_eq!(split.get(), 1);
        assert_eq!(split.decrement().get(), 1);

        for _ in 0..30 {
            split = split.increment();
        }
        assert_eq!(split, SplitCount::MAX);
        assert_eq!(split.increment().get(), 20);
        assert_eq!(split.decrement().get(), 19);
    }

    #[test]
    fn test_split_count_affordances() {
        let one = SplitCount::default();
        assert!(one.can_increment());
        assert!(!one.can_decrement());
        assert_eq!(one.to_string(), "1 person");

        let two = one.increment();
        assert!(two.can_decrement());
        assert_eq!(two.to_string(), "2 people");

        assert!(!SplitCount::MAX.can_increment());
    }

    #[test]
    fn test_slider_clamp() {
        let slider = TipSlider::default();
        assert_eq!(slider.clamp(10).percent(), 10);
        assert_eq!(slider.clamp(30).percent(), 30);
        assert_eq!(slider.clamp(-4).percent(), 10);
        assert_eq!(slider.clamp(i64::MAX).percent(), 30);
    }

    #[test]
    fn test_quick_tips_sorted_and_deduplicated() {
        let tips = QuickTips::from_percents([25, 5, 18, 25, 40]);
        let values: Vec<u32> = tips.iter().map(|t| t.percent()).collect();
        assert_eq!(values, vec![5, 18, 25, 40]);
        assert_eq!(tips.find(40), Some(TipPercentage::new(40)));
        assert_eq!(tips.find(19), None);
    }

    #[test]
    fn test_quick_tips_active() {
        let tips = QuickTips::default();
        assert_eq!(tips.iter().count(), 4);
        assert_eq!(
            tips.active(TipPercentage::new(18)),
            Some(TipPercentage::new(18))
        );
        assert_eq!(tips.active(TipPercentage::new(22)), None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rating newtypes.
//!
//! This module provides type-safe wrappers for rating values,
//! ensuring they are always within valid ranges.

use crate::config::{DEFAULT_MAX_VALUE, MAX_MAX_VALUE, MIN_MAX_VALUE};

// =============================================================================
// MaxValue
// =============================================================================

/// Number of items in a rating, guaranteed to be at least 1.
///
/// Each integer position `1..=max` gets one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaxValue(u32);

impl MaxValue {
    /// Creates a new max value, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_MAX_VALUE, MAX_MAX_VALUE))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the value as a decimal upper bound.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Iterates over every item position, 1-based.
    pub fn positions(self) -> impl Iterator<Item = u32> {
        1..=self.0
    }

    /// Returns whether `position` names an item of this rating.
    #[must_use]
    pub fn contains(self, position: u32) -> bool {
        (1..=self.0).contains(&position)
    }
}

impl Default for MaxValue {
    fn default() -> Self {
        Self(DEFAULT_MAX_VALUE)
    }
}

// =============================================================================
// RatingValue
// =============================================================================

/// A rating value in `[0, max]`.
///
/// The value may be fractional (2.4 shows two full items and a half one),
/// while clicks always produce whole values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RatingValue(f64);

impl RatingValue {
    /// The cleared rating.
    pub const ZERO: Self = Self(0.0);

    /// Creates a rating value, clamping into `[0, max]`. NaN becomes zero.
    #[must_use]
    pub fn new(value: f64, max: MaxValue) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, max.as_f64()))
    }

    /// Returns the raw decimal value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounds to the nearest whole item, ties to even (2.5 → 2, 3.5 → 4).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // value is clamped to [0, MAX_MAX_VALUE], well within u32
    pub fn rounded(self) -> u32 {
        self.0.round_ties_even() as u32
    }
}

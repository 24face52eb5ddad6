// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Rating**: Item count bounds and icon thresholds
//! - **Snackbar**: Visible count and transition timings

// ==========================================================================
// Rating Defaults
// ==========================================================================

/// Default number of rating items.
pub const DEFAULT_MAX_VALUE: u32 = 5;

/// Minimum number of rating items.
pub const MIN_MAX_VALUE: u32 = 1;

/// Upper bound accepted from configuration files.
pub const MAX_MAX_VALUE: u32 = 100;

/// Whether items show a pressed highlight by default.
pub const DEFAULT_RIPPLE: bool = true;

/// An item is full once the value reaches `position - FULL_THRESHOLD`.
pub const FULL_THRESHOLD: f64 = 0.25;

/// An item is half-filled once the value exceeds `position - HALF_THRESHOLD`.
pub const HALF_THRESHOLD: f64 = 0.75;

// ==========================================================================
// Snackbar Defaults
// ==========================================================================

/// Maximum number of snackbars visible at once.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum accepted value for the visible snackbar count.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum accepted value for the visible snackbar count.
pub const MAX_MAX_VISIBLE: usize = 10;

/// How long a snackbar stays fully visible before hiding (milliseconds).
pub const DEFAULT_VISIBLE_MS: u64 = 3000;

/// Duration of the fade-in transition (milliseconds).
pub const DEFAULT_SHOW_TRANSITION_MS: u64 = 500;

/// Duration of the fade-out transition (milliseconds).
pub const DEFAULT_HIDE_TRANSITION_MS: u64 = 500;

/// Interval of the app tick that advances snackbar timers (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VALUE >= 1);
    assert!(DEFAULT_MAX_VALUE >= MIN_MAX_VALUE);
    assert!(DEFAULT_MAX_VALUE <= MAX_MAX_VALUE);

    assert!(FULL_THRESHOLD < HALF_THRESHOLD);
    assert!(HALF_THRESHOLD < 1.0);

    assert!(MIN_MAX_VISIBLE >= 1);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    assert!(DEFAULT_VISIBLE_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_SHOW_TRANSITION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_VALUE, 5);
        assert!(DEFAULT_MAX_VALUE >= MIN_MAX_VALUE);
        assert!(DEFAULT_RIPPLE);
    }

    #[test]
    fn snackbar_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_VISIBLE, 3);
        assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);
        assert!(DEFAULT_VISIBLE_MS > DEFAULT_SHOW_TRANSITION_MS);
    }
}

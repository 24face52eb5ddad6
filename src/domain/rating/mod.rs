// SPDX-License-Identifier: MPL-2.0
//! Rating domain types.
//!
//! Value objects for the rating widget that are independent of any
//! presentation framework.

pub mod newtypes;

pub use newtypes::{MaxValue, RatingValue};

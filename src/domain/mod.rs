// SPDX-License-Identifier: MPL-2.0
//! Domain value objects independent of the Iced presentation layer.

pub mod appearance;
pub mod rating;

pub use appearance::{Size, ThemeColor, Variant};
pub use rating::{MaxValue, RatingValue};

// SPDX-License-Identifier: MPL-2.0
pub mod star_icon;

pub use star_icon::{StarFill, StarIcon};

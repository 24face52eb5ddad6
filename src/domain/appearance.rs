// SPDX-License-Identifier: MPL-2.0
//! Appearance enums shared by the widgets and the settings file.
//!
//! These only name a choice; resolving them to concrete colors and pixel
//! sizes is done in [`crate::ui::design_tokens`].

use serde::{Deserialize, Serialize};

/// Named theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeColor {
    /// The widget's own default color (amber for rating items).
    #[default]
    Default,
    /// Use the color of the enclosing item.
    Inherit,
    Primary,
    Secondary,
    Tertiary,
    Info,
    Success,
    Warning,
    Error,
    Dark,
}

/// Icon size scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

/// Button/surface fill variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Text,
    Filled,
    Outlined,
}

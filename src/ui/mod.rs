// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes its state, a `Message` type, an `update` that returns events
//! for the host, and a `view` function.
//!
//! - [`rating`] - Star rating widget
//! - [`snackbar`] - Transient notifications with an optional action
//! - [`widgets`] - Custom Iced widgets (star icon)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Resolution of named colors and sizes

pub mod design_tokens;
pub mod rating;
pub mod snackbar;
pub mod theme;
pub mod widgets;

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::rating::RatingMessage;
use crate::ui::snackbar::SnackbarMessage;
use iced::keyboard;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Rating(RatingMessage),
    Snackbar(SnackbarMessage),
    /// Unhandled key press, routed to the rating.
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    },
    /// Periodic tick for snackbar timers.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides `[rating] max-value` from the config file.
    pub max_value: Option<u32>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
}

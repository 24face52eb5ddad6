// SPDX-License-Identifier: MPL-2.0
//! Snackbar notifications for user feedback.
//!
//! Snackbars appear temporarily to report the outcome of an action, can
//! carry one action button and fade in and out.
//!
//! # Components
//!
//! - [`signal`] - Change notification with explicit subscriptions
//! - [`snackbar`] - The notification object: options, phases and timers
//! - [`element`] - Display binding that forwards user input to a snackbar
//! - [`manager`] - Queue and lifecycle of the visible snackbars
//! - [`view`] - Iced rendering of snackbars
//!
//! # Usage
//!
//! ```ignore
//! use iced_feedback::ui::snackbar::{self, Snackbar, SnackbarEvent, SnackbarManager};
//!
//! let mut manager = SnackbarManager::default();
//! manager.push(Snackbar::success("Rating saved").with_action("Undo"));
//!
//! // In update:
//! if let Some(SnackbarEvent::ActionClicked(id)) = manager.update(message) {
//!     // ...
//! }
//!
//! // In view:
//! let overlay = snackbar::view_overlay(&manager).map(Message::Snackbar);
//! ```

pub mod element;
pub mod manager;
pub mod signal;
#[allow(clippy::module_inception)]
pub mod snackbar;
pub mod view;

pub use element::SnackbarElement;
pub use manager::{Event as SnackbarEvent, Manager as SnackbarManager, Message as SnackbarMessage};
pub use signal::{Signal, SubscriptionId};
pub use snackbar::{
    ClickOutcome, Phase, Severity, Snackbar, SnackbarHandle, SnackbarHandleExt, SnackbarId,
    SnackbarOptions, SnackbarState,
};
pub use view::{view, view_at, view_overlay};

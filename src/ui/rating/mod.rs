// SPDX-License-Identifier: MPL-2.0
//! Star rating widget.
//!
//! # Components
//!
//! - [`icon`] - Pure icon/color selection for one item
//! - [`item`] - A single selectable item and its hover state
//! - [`controller`] - Value/hover state machine and keyboard stepping
//! - [`view`] - Iced rendering of the items
//!
//! # Usage
//!
//! ```ignore
//! use iced_feedback::ui::rating::{self, RatingController, RatingEvent};
//!
//! let mut rating = RatingController::default();
//!
//! // In update:
//! for event in rating.update(message) {
//!     if let RatingEvent::ValueChanged(value) = event {
//!         // ...
//!     }
//! }
//!
//! // In view:
//! let element = rating::view(&rating).map(Message::Rating);
//! ```

pub mod controller;
pub mod icon;
pub mod item;
pub mod view;

pub use controller::{Event as RatingEvent, Message as RatingMessage, RatingController};
pub use icon::{select, Icon, IconChoice, IconState, RatingColors, RatingIcons};
pub use item::{ItemEvent, RatingItem, RatingSnapshot};
pub use view::{view, Appearance};

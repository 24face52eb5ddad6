// SPDX-License-Identifier: MPL-2.0
//! A single selectable rating item.
//!
//! Items never reach into their rating. Every operation receives the
//! rating's current [`RatingSnapshot`], or `None` when the item is not
//! attached to a rating, in which case it renders empty and mostly ignores
//! input.

use super::icon::{self, IconChoice, IconState};
use crate::domain::RatingValue;

/// Read-only view of a rating handed down to its items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSnapshot {
    pub value: RatingValue,
    pub hovered: Option<u32>,
    pub disabled: bool,
    pub read_only: bool,
}

/// Notifications an item raises towards its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    /// Pointer entered (`Some(position)`) or left (`None`) the item.
    Hovered(Option<u32>),
    /// The item was clicked; `0` asks the rating to clear its value.
    Clicked(u32),
}

/// One item of a rating, at a 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingItem {
    position: u32,
    active: bool,
}

impl RatingItem {
    #[must_use]
    pub fn new(position: u32) -> Self {
        Self {
            position,
            active: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whether the pointer is currently over this item.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn is_inert(rating: Option<&RatingSnapshot>) -> bool {
        rating.is_some_and(|r| r.disabled || r.read_only)
    }

    pub fn pointer_over(&mut self, rating: Option<&RatingSnapshot>) -> Option<ItemEvent> {
        if Self::is_inert(rating) {
            return None;
        }
        self.active = true;
        Some(ItemEvent::Hovered(Some(self.position)))
    }

    pub fn pointer_out(&mut self, rating: Option<&RatingSnapshot>) -> Option<ItemEvent> {
        if rating.is_none() || Self::is_inert(rating) {
            return None;
        }
        self.active = false;
        Some(ItemEvent::Hovered(None))
    }

    /// Clicking the item that matches the rounded value toggles it off.
    pub fn click(&mut self, rating: Option<&RatingSnapshot>) -> Option<ItemEvent> {
        if Self::is_inert(rating) {
            return None;
        }
        self.active = false;
        let value = match rating {
            Some(r) if r.value.rounded() == self.position => 0,
            _ => self.position,
        };
        Some(ItemEvent::Clicked(value))
    }

    /// Icon for the current snapshot. Recomputed on every call.
    #[must_use]
    pub fn icon(&self, rating: Option<&RatingSnapshot>) -> IconChoice {
        match rating {
            Some(r) => icon::select(r.value.value(), self.position, r.hovered),
            None => IconChoice {
                icon: IconState::Empty,
                uses_hover_palette: false,
            },
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rating state machine.
//!
//! The controller owns the authoritative `(value, hovered)` pair and the
//! items. Every mutation returns the events it caused, in order, before the
//! call returns: `ValueChanged` and `RoundedValueChanged` are computed
//! independently from the same transition, `HoveredChanged` whenever the
//! hovered index moves. Setting a field to its current value emits nothing.

use super::item::{ItemEvent, RatingItem, RatingSnapshot};
use super::view::Appearance;
use crate::config::RatingConfig;
use crate::domain::{MaxValue, RatingValue};
use iced::keyboard::{self, key::Named, Key};

/// Messages produced by the rating view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PointerOver(u32),
    PointerOut(u32),
    Clicked(u32),
    KeyPressed {
        key: Key,
        modifiers: keyboard::Modifiers,
    },
}

/// Notifications raised towards the owner of the rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The decimal value changed.
    ValueChanged(f64),
    /// The value rounded to a whole item changed.
    RoundedValueChanged(u32),
    /// The hovered item changed, `None` when no item is hovered.
    HoveredChanged(Option<u32>),
}

/// State of a rating widget.
#[derive(Debug, Clone)]
pub struct RatingController {
    max_value: MaxValue,
    value: RatingValue,
    hovered: Option<u32>,
    disabled: bool,
    read_only: bool,
    items: Vec<RatingItem>,
    appearance: Appearance,
}

impl Default for RatingController {
    fn default() -> Self {
        Self::new(MaxValue::default())
    }
}

impl RatingController {
    #[must_use]
    pub fn new(max_value: MaxValue) -> Self {
        Self {
            max_value,
            value: RatingValue::ZERO,
            hovered: None,
            disabled: false,
            read_only: false,
            items: max_value.positions().map(RatingItem::new).collect(),
            appearance: Appearance::default(),
        }
    }

    /// Builds a controller from the `[rating]` settings section.
    #[must_use]
    pub fn from_config(config: &RatingConfig) -> Self {
        let mut controller = Self::new(config.max_value());
        controller.disabled = config.disabled;
        controller.read_only = config.read_only;
        controller.appearance = Appearance::from_config(config);
        controller
    }

    /// Sets the initial value without emitting events.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = RatingValue::new(value, self.max_value);
        self
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    /// Value rounded to the nearest item, ties to even.
    #[must_use]
    pub fn rounded_value(&self) -> u32 {
        self.value.rounded()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    #[must_use]
    pub fn max_value(&self) -> MaxValue {
        self.max_value
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[must_use]
    pub fn items(&self) -> &[RatingItem] {
        &self.items
    }

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The immutable view handed to items.
    #[must_use]
    pub fn snapshot(&self) -> RatingSnapshot {
        RatingSnapshot {
            value: self.value,
            hovered: self.hovered,
            disabled: self.disabled,
            read_only: self.read_only,
        }
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.read_only
    }

    // ------------------------------------------------------------------
    // Bound inputs
    // ------------------------------------------------------------------

    /// Two-way binding input. Clamped into `[0, max]`.
    pub fn set_value(&mut self, value: f64) -> Vec<Event> {
        self.apply_value(RatingValue::new(value, self.max_value))
    }

    /// Legacy whole-number setter.
    pub fn set_rounded_value(&mut self, value: u32) -> Vec<Event> {
        self.set_value(f64::from(value))
    }

    /// Changes the item count, re-clamping the value and hover index.
    pub fn set_max_value(&mut self, max_value: MaxValue) -> Vec<Event> {
        self.max_value = max_value;
        self.items = max_value.positions().map(RatingItem::new).collect();

        let mut events = self.apply_value(RatingValue::new(self.value.value(), max_value));
        if self.hovered.is_some_and(|h| h > max_value.value()) {
            events.extend(self.apply_hovered(Some(max_value.value())));
        }
        events
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Selects `position`, or clears the rating when `position` is already
    /// the rounded value. Clearing also clears the hover index.
    pub fn click(&mut self, position: u32) -> Vec<Event> {
        if self.is_inert() {
            return Vec::new();
        }

        let target = if position == self.value.rounded() {
            0
        } else {
            position
        };

        let mut events = self.apply_value(RatingValue::new(f64::from(target), self.max_value));
        if target == 0 {
            events.extend(self.apply_hovered(None));
        }
        events
    }

    /// Sets the hovered index. The stored value is untouched.
    pub fn hover(&mut self, position: Option<u32>) -> Vec<Event> {
        if self.is_inert() {
            return Vec::new();
        }
        let position = position.map(|p| p.min(self.max_value.value()));
        self.apply_hovered(position)
    }

    /// Moves the value by `delta`, clamped into `[0, max]`.
    ///
    /// A step that pushes against the bound the value already sits on is a
    /// no-op. Disabled and read-only states are checked by the callers.
    pub fn increase(&mut self, delta: f64) -> Vec<Event> {
        let value = self.value.value();
        let max = self.max_value.as_f64();

        if (value < max || delta <= 0.0) && (value > 0.0 || delta >= 0.0) {
            self.apply_value(RatingValue::new(value + delta, self.max_value))
        } else {
            Vec::new()
        }
    }

    /// Arrow keys step the value by one; with shift they jump to the bound.
    pub fn handle_key(&mut self, key: &Key, modifiers: keyboard::Modifiers) -> Vec<Event> {
        if self.is_inert() {
            return Vec::new();
        }

        let value = self.value.value();
        match key {
            Key::Named(Named::ArrowRight) if modifiers.shift() => {
                self.increase(self.max_value.as_f64() - value)
            }
            Key::Named(Named::ArrowRight) => self.increase(1.0),
            Key::Named(Named::ArrowLeft) if modifiers.shift() => self.increase(-value),
            Key::Named(Named::ArrowLeft) => self.increase(-1.0),
            _ => Vec::new(),
        }
    }

    /// Routes a view message through the addressed item and back into the
    /// controller.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        let item_event = match message {
            Message::KeyPressed { key, modifiers } => return self.handle_key(&key, modifiers),
            Message::PointerOver(position) => {
                self.with_item(position, |item, rating| item.pointer_over(Some(rating)))
            }
            Message::PointerOut(position) => {
                self.with_item(position, |item, rating| item.pointer_out(Some(rating)))
            }
            Message::Clicked(position) => {
                self.with_item(position, |item, rating| item.click(Some(rating)))
            }
        };

        match item_event {
            Some(ItemEvent::Hovered(position)) => self.hover(position),
            Some(ItemEvent::Clicked(position)) => self.click(position),
            None => Vec::new(),
        }
    }

    fn with_item(
        &mut self,
        position: u32,
        f: impl FnOnce(&mut RatingItem, &RatingSnapshot) -> Option<ItemEvent>,
    ) -> Option<ItemEvent> {
        if !self.max_value.contains(position) {
            return None;
        }
        let snapshot = self.snapshot();
        let index = usize::try_from(position - 1).ok()?;
        self.items.get_mut(index).and_then(|item| f(item, &snapshot))
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn apply_value(&mut self, value: RatingValue) -> Vec<Event> {
        if value == self.value {
            return Vec::new();
        }

        let previous_rounded = self.value.rounded();
        self.value = value;
        log::debug!("rating value {} -> {}", previous_rounded, value.value());

        let mut events = vec![Event::ValueChanged(value.value())];
        if value.rounded() != previous_rounded {
            events.push(Event::RoundedValueChanged(value.rounded()));
        }
        events
    }

    fn apply_hovered(&mut self, hovered: Option<u32>) -> Vec<Event> {
        if hovered == self.hovered {
            return Vec::new();
        }
        self.hovered = hovered;
        log::debug!("rating hover {:?}", hovered);
        vec![Event::HoveredChanged(hovered)]
    }
}

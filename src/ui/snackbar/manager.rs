// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle management.
//!
//! The `Manager` limits how many snackbars are on screen, queues the rest,
//! binds an element to each visible snackbar and drives their timers.

use super::element::SnackbarElement;
use super::snackbar::{
    ClickOutcome, Snackbar, SnackbarHandle, SnackbarHandleExt, SnackbarId, SnackbarOptions,
};
use crate::config::{SnackbarConfig, DEFAULT_MAX_VISIBLE, MAX_MAX_VISIBLE, MIN_MAX_VISIBLE};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for snackbar interaction.
#[derive(Debug, Clone)]
pub enum Message {
    ActionClicked(SnackbarId),
    CloseClicked(SnackbarId),
    BackgroundClicked(SnackbarId),
    /// Pointer entered the snackbar; its auto-dismiss timer pauses.
    InteractionStarted(SnackbarId),
    InteractionEnded(SnackbarId),
    /// Advance transition and auto-dismiss timers.
    Tick(Instant),
}

/// Events reported to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The action button of a snackbar was clicked.
    ActionClicked(SnackbarId),
    /// A snackbar was dismissed by the user without its action.
    Dismissed(SnackbarId),
}

/// Manages the snackbar queue and the visible elements.
#[derive(Debug)]
pub struct Manager {
    /// Elements bound to the visible snackbars (newest first).
    visible: VecDeque<SnackbarElement>,
    /// Snackbars waiting for a free slot.
    queue: VecDeque<SnackbarHandle>,
    max_visible: usize,
    /// Options for snackbars created through [`Manager::options`].
    options: SnackbarOptions,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE)
    }
}

impl Manager {
    /// Creates an empty manager. `max_visible` is clamped to the supported range.
    #[must_use]
    pub fn new(max_visible: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            max_visible: max_visible.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE),
            options: SnackbarOptions::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SnackbarConfig) -> Self {
        Self {
            options: SnackbarOptions::from_config(config),
            ..Self::new(config.max_visible())
        }
    }

    /// Default options for new snackbars.
    #[must_use]
    pub fn options(&self) -> &SnackbarOptions {
        &self.options
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Pushes a new snackbar.
    ///
    /// If fewer than `max_visible` snackbars are showing, it's displayed
    /// immediately. Otherwise it's queued until a slot frees up.
    pub fn push(&mut self, snackbar: Snackbar) -> SnackbarId {
        self.push_handle(snackbar.into_handle())
    }

    /// Pushes a snackbar the caller keeps a handle to.
    pub fn push_handle(&mut self, snackbar: SnackbarHandle) -> SnackbarId {
        let id = snackbar.borrow().id();

        if self.visible.len() < self.max_visible {
            self.visible.push_front(Self::bind(snackbar, Instant::now()));
        } else {
            log::debug!("snackbar {id:?} queued behind {} visible", self.visible.len());
            self.queue.push_back(snackbar);
        }
        id
    }

    /// Removes a snackbar immediately, visible or queued.
    ///
    /// Returns `true` if the snackbar was found.
    pub fn dismiss(&mut self, id: SnackbarId) -> bool {
        if let Some(pos) = self.visible.iter().position(|e| e.id() == Some(id)) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|s| s.borrow().id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances every visible snackbar and removes the finished ones.
    /// Snackbars promoted from the queue start their show transition at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        for element in &self.visible {
            if let Some(snackbar) = element.snackbar() {
                snackbar.tick_at(now);
            }
        }

        let before = self.visible.len();
        self.visible.retain(|element| !element.is_finished());
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    /// Handles a snackbar message.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::ActionClicked(id) => {
                let outcome = self.element(id)?.action_clicked();
                Self::event(id, outcome)
            }
            Message::CloseClicked(id) => {
                let outcome = self.element(id)?.close_clicked();
                Self::event(id, outcome)
            }
            Message::BackgroundClicked(id) => {
                let outcome = self.element(id)?.background_clicked();
                Self::event(id, outcome)
            }
            Message::InteractionStarted(id) => {
                self.element(id)?.interaction_start();
                None
            }
            Message::InteractionEnded(id) => {
                self.element(id)?.interaction_end();
                None
            }
            Message::Tick(now) => {
                self.tick_at(now);
                None
            }
        }
    }

    /// Returns the currently visible elements.
    pub fn visible(&self) -> impl Iterator<Item = &SnackbarElement> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any snackbars (visible or queued).
    #[must_use]
    pub fn has_snackbars(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all snackbars (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn element(&self, id: SnackbarId) -> Option<&SnackbarElement> {
        self.visible.iter().find(|element| element.id() == Some(id))
    }

    fn event(id: SnackbarId, outcome: Option<ClickOutcome>) -> Option<Event> {
        outcome.map(|outcome| match outcome {
            ClickOutcome::Action => Event::ActionClicked(id),
            ClickOutcome::Dismissed => Event::Dismissed(id),
        })
    }

    fn bind(snackbar: SnackbarHandle, now: Instant) -> SnackbarElement {
        let mut element = SnackbarElement::new(snackbar);
        element.attach_at(now);
        element
    }

    /// Promotes queued snackbars while there is space.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.max_visible {
            if let Some(snackbar) = self.queue.pop_front() {
                self.visible.push_back(Self::bind(snackbar, now));
            } else {
                break;
            }
        }
    }
}

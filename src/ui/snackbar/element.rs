// SPDX-License-Identifier: MPL-2.0
//! Display binding for a single snackbar.
//!
//! The element keeps no copy of the snackbar state. It holds the shared
//! handle, its update subscription and a render counter the subscription
//! bumps; everything it displays is read through the handle.

use super::signal::SubscriptionId;
use super::snackbar::{
    ClickOutcome, SnackbarHandle, SnackbarHandleExt, SnackbarId, SnackbarState,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct SnackbarElement {
    snackbar: Option<SnackbarHandle>,
    subscription: Option<SubscriptionId>,
    renders: Rc<Cell<u64>>,
}

impl SnackbarElement {
    /// Creates an element bound to `snackbar`. Call [`attach`](Self::attach)
    /// to start receiving updates.
    #[must_use]
    pub fn new(snackbar: SnackbarHandle) -> Self {
        Self {
            snackbar: Some(snackbar),
            subscription: None,
            renders: Rc::new(Cell::new(0)),
        }
    }

    /// An element with nothing bound. Every handler is a no-op.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snackbar(&self) -> Option<&SnackbarHandle> {
        self.snackbar.as_ref()
    }

    #[must_use]
    pub fn id(&self) -> Option<SnackbarId> {
        self.snackbar.as_ref().map(|snackbar| snackbar.borrow().id())
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Number of update notifications received since attaching.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders.get()
    }

    /// Subscribes to the snackbar's updates and starts its show transition.
    pub fn attach(&mut self) {
        self.attach_at(Instant::now());
    }

    /// Like [`attach`](Self::attach), with the show transition starting at `now`.
    pub fn attach_at(&mut self, now: Instant) {
        let Some(snackbar) = &self.snackbar else {
            return;
        };
        if self.subscription.is_some() {
            return;
        }

        let renders = Rc::clone(&self.renders);
        let id = snackbar
            .borrow()
            .on_update()
            .subscribe(move || renders.set(renders.get() + 1));
        self.subscription = Some(id);

        snackbar.init_at(now);
    }

    /// Drops the update subscription. Safe to call more than once.
    pub fn detach(&mut self) {
        let (Some(snackbar), Some(id)) = (&self.snackbar, self.subscription.take()) else {
            return;
        };
        snackbar.borrow().on_update().unsubscribe(id);
    }

    pub fn action_clicked(&self) -> Option<ClickOutcome> {
        self.forward_click(false)
    }

    pub fn close_clicked(&self) -> Option<ClickOutcome> {
        self.forward_click(true)
    }

    /// Clicking the body dismisses the snackbar, unless an action button
    /// is shown: then only the button does.
    pub fn background_clicked(&self) -> Option<ClickOutcome> {
        if self.show_action_button() {
            return None;
        }
        self.forward_click(false)
    }

    pub fn interaction_start(&self) {
        self.forward_pause(true);
    }

    pub fn interaction_end(&self) {
        self.forward_pause(false);
    }

    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.snackbar
            .as_ref()
            .map(|snackbar| snackbar.borrow().message().to_owned())
    }

    #[must_use]
    pub fn show_action_button(&self) -> bool {
        self.read(|state| state.show_action_button())
    }

    #[must_use]
    pub fn show_close_icon(&self) -> bool {
        self.read(|state| state.show_close_icon())
    }

    #[must_use]
    pub fn hide_icon(&self) -> bool {
        self.read(|state| state.hide_icon())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.snackbar
            .as_ref()
            .is_some_and(|snackbar| snackbar.borrow().is_finished())
    }

    fn read(&self, f: impl FnOnce(&SnackbarState) -> bool) -> bool {
        self.snackbar
            .as_ref()
            .is_some_and(|snackbar| f(snackbar.borrow().state()))
    }

    fn forward_click(&self, is_close: bool) -> Option<ClickOutcome> {
        self.snackbar
            .as_ref()
            .and_then(|snackbar| snackbar.clicked(is_close))
    }

    fn forward_pause(&self, pause: bool) {
        if let Some(snackbar) = &self.snackbar {
            snackbar.pause_transitions(pause);
        }
    }
}

impl Drop for SnackbarElement {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::snackbar::{Phase, Snackbar, SnackbarOptions};
    use std::cell::RefCell;
    use std::time::Duration;

    fn handle() -> SnackbarHandle {
        Snackbar::new("hello", SnackbarOptions::default()).into_handle()
    }

    #[test]
    fn attach_subscribes_and_inits() {
        let snackbar = handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));

        element.attach();
        assert!(element.is_attached());
        assert_eq!(snackbar.borrow().on_update().subscriber_count(), 1);
        assert_eq!(snackbar.borrow().state().phase(), Phase::Showing);
        // the init transition is the first render
        assert_eq!(element.render_count(), 1);
    }

    #[test]
    fn attach_twice_subscribes_once() {
        let snackbar = handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach();
        element.attach();
        assert_eq!(snackbar.borrow().on_update().subscriber_count(), 1);
    }

    #[test]
    fn detach_stops_renders() {
        let snackbar = handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach();
        element.detach();
        element.detach();

        snackbar.pause_transitions(true);
        assert_eq!(element.render_count(), 1);
        assert_eq!(snackbar.borrow().on_update().subscriber_count(), 0);
    }

    #[test]
    fn drop_detaches() {
        let snackbar = handle();
        {
            let mut element = SnackbarElement::new(Rc::clone(&snackbar));
            element.attach();
        }
        assert_eq!(snackbar.borrow().on_update().subscriber_count(), 0);
    }

    #[test]
    fn background_click_is_suppressed_with_action_button() {
        let snackbar = Snackbar::new("saved", SnackbarOptions::default())
            .with_action("Undo")
            .into_handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach();

        assert_eq!(element.background_clicked(), None);
        assert_eq!(snackbar.borrow().state().phase(), Phase::Showing);

        assert_eq!(element.action_clicked(), Some(ClickOutcome::Action));
        assert_eq!(snackbar.borrow().state().phase(), Phase::Hiding);
    }

    #[test]
    fn background_click_dismisses_without_action() {
        let snackbar = handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach();
        assert_eq!(element.background_clicked(), Some(ClickOutcome::Dismissed));
    }

    #[test]
    fn interaction_pauses_and_resumes() {
        let snackbar = handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach();

        element.interaction_start();
        assert!(snackbar.borrow().state().is_paused());
        element.interaction_end();
        assert!(!snackbar.borrow().state().is_paused());
        assert_eq!(element.render_count(), 3);
    }

    #[test]
    fn attach_at_starts_the_show_transition_at_the_given_instant() {
        let start = Instant::now();
        let snackbar = handle();
        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach_at(start);

        assert_eq!(snackbar.borrow().state().phase_elapsed_at(start), Duration::ZERO);
    }

    #[test]
    fn other_subscribers_may_read_during_forwarded_input() {
        let snackbar = Snackbar::new("saved", SnackbarOptions::default())
            .with_action("Undo")
            .into_handle();
        let phases = Rc::new(RefCell::new(Vec::new()));
        let weak = Rc::downgrade(&snackbar);
        let seen = Rc::clone(&phases);
        snackbar.borrow().on_update().subscribe(move || {
            if let Some(snackbar) = weak.upgrade() {
                seen.borrow_mut().push(snackbar.borrow().state().phase());
            }
        });

        let mut element = SnackbarElement::new(Rc::clone(&snackbar));
        element.attach();
        element.interaction_start();
        assert_eq!(element.action_clicked(), Some(ClickOutcome::Action));

        assert_eq!(
            *phases.borrow(),
            vec![Phase::Showing, Phase::Showing, Phase::Hiding]
        );
        assert_eq!(element.render_count(), 3);
    }

    #[test]
    fn unbound_element_is_inert() {
        let mut element = SnackbarElement::unbound();
        element.attach();
        assert!(!element.is_attached());
        assert_eq!(element.action_clicked(), None);
        assert_eq!(element.close_clicked(), None);
        assert_eq!(element.background_clicked(), None);
        element.interaction_start();
        assert_eq!(element.message(), None);
        assert!(!element.show_close_icon());
    }
}

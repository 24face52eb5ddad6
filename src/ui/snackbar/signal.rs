// SPDX-License-Identifier: MPL-2.0
//! Single-threaded change signal with explicit subscription handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

/// Broadcasts "something changed" to every subscriber.
///
/// Cloning a signal yields another handle to the same subscriber list.
#[derive(Clone, Default)]
pub struct Signal {
    subscribers: Rc<RefCell<Subscribers>>,
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Signal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns the handle that removes it.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.callbacks.push((id, Rc::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.callbacks.len();
        subscribers.callbacks.retain(|(sub, _)| *sub != id);
        subscribers.callbacks.len() != before
    }

    /// Calls every subscriber registered at the time of the call.
    ///
    /// Callbacks run on a snapshot of the list, so they may subscribe or
    /// unsubscribe without deadlocking the signal.
    pub fn emit(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .callbacks
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().callbacks.len()
    }
}

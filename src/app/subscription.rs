// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Forwards key presses that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed { key, modifiers }),
        _ => None,
    })
}

/// Ticks only while snackbars exist.
pub fn create_tick_subscription(has_snackbars: bool) -> Subscription<Message> {
    if has_snackbars {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

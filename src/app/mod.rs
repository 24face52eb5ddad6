// SPDX-License-Identifier: MPL-2.0
//! Demo application: a rating whose changes are confirmed by snackbars.
//!
//! Every committed rating change pushes a snackbar with an "Undo" action;
//! clicking it restores the previous value.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MAX_MAX_VALUE};
use crate::domain::MaxValue;
use crate::ui::rating::{RatingController, RatingEvent, RatingMessage};
use crate::ui::snackbar::{Snackbar, SnackbarEvent, SnackbarId, SnackbarManager};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    rating: RatingController,
    snackbars: SnackbarManager,
    /// Last value reported by the rating.
    committed: f64,
    /// Snackbar whose action restores the value it carries.
    undo: Option<(SnackbarId, f64)>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("value", &self.rating.value())
            .field("snackbars", &self.snackbars.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 400;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load_with_override(flags.config_dir);
        if let Some(max_value) = flags.max_value {
            if max_value > MAX_MAX_VALUE {
                log::warn!("--max-value {max_value} is above {MAX_MAX_VALUE}, capping it");
            }
            config.rating.max_value = MaxValue::new(max_value).value();
        }

        let mut app = Self::from_config(&config);
        if let Some(key) = config_warning {
            app.snackbars.push(Snackbar::warning(warning_message(&key)));
        }

        (app, Task::none())
    }

    fn from_config(config: &Config) -> Self {
        Self {
            rating: RatingController::from_config(&config.rating),
            snackbars: SnackbarManager::from_config(&config.snackbar),
            committed: 0.0,
            undo: None,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Feedback")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.snackbars.has_snackbars()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Rating(message) => {
                let events = self.rating.update(message);
                self.handle_rating_events(events);
            }
            Message::KeyPressed { key, modifiers } => {
                let events = self.rating.update(RatingMessage::KeyPressed { key, modifiers });
                self.handle_rating_events(events);
            }
            Message::Snackbar(message) => {
                if let Some(SnackbarEvent::ActionClicked(id)) = self.snackbars.update(message) {
                    self.undo_from(id);
                }
            }
            Message::Tick(now) => self.snackbars.tick_at(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            rating: &self.rating,
            snackbars: &self.snackbars,
        })
    }

    fn handle_rating_events(&mut self, events: Vec<RatingEvent>) {
        for event in events {
            if let RatingEvent::ValueChanged(value) = event {
                let previous = std::mem::replace(&mut self.committed, value);
                let snackbar = Snackbar::new(
                    format!("Rated {value}"),
                    self.snackbars.options().clone(),
                )
                .with_action("Undo");
                let id = self.snackbars.push(snackbar);
                self.undo = Some((id, previous));
            }
        }
    }

    fn undo_from(&mut self, id: SnackbarId) {
        let Some((undo_id, previous)) = self.undo else {
            return;
        };
        if undo_id != id {
            return;
        }

        self.undo = None;
        // no snackbar for the restore itself
        let events = self.rating.set_value(previous);
        if events.iter().any(|e| matches!(e, RatingEvent::ValueChanged(_))) {
            self.committed = self.rating.value();
        }
        log::debug!("rating restored to {previous}");
    }
}

/// User-facing text for a warning key returned by the config loader.
fn warning_message(key: &str) -> String {
    match key {
        config::LOAD_WARNING => String::from("Settings could not be read, using defaults"),
        other => other.to_owned(),
    }
}

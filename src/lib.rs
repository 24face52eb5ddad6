// SPDX-License-Identifier: MPL-2.0
//! `iced_feedback` provides feedback widgets for the Iced GUI framework: a
//! star rating and snackbar notifications.
//!
//! The widgets are plain state machines with Iced views on top, configured
//! from a `settings.toml` file. A small demo application lives in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_feedback/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

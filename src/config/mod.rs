// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving widget
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[rating]` - Item count, interaction flags and colors of the rating
//! - `[snackbar]` - Visible count and transition timings of snackbars
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set the `ICED_FEEDBACK_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_feedback::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.rating.max_value = 10;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{MaxValue, Size, ThemeColor};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFeedback";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FEEDBACK_CONFIG_DIR";

/// Warning key returned by [`load`] when an existing file cannot be read.
pub const LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Rating widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct RatingConfig {
    /// Number of rating items.
    pub max_value: u32,
    /// Whether the rating ignores all interaction.
    pub disabled: bool,
    /// Whether the rating only displays its value.
    pub read_only: bool,
    /// Whether items show a pressed highlight.
    pub ripple: bool,
    /// Icon size.
    pub size: Size,
    /// Item color, used when no per-state color is set.
    pub color: ThemeColor,
    /// Color of full (and hovered) items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_color: Option<ThemeColor>,
    /// Color of half-filled items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_color: Option<ThemeColor>,
    /// Color of empty items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_color: Option<ThemeColor>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
            disabled: false,
            read_only: false,
            ripple: DEFAULT_RIPPLE,
            size: Size::default(),
            color: ThemeColor::default(),
            full_color: None,
            half_color: None,
            empty_color: None,
        }
    }
}

impl RatingConfig {
    /// Returns the item count as a validated newtype.
    #[must_use]
    pub fn max_value(&self) -> MaxValue {
        MaxValue::new(self.max_value)
    }
}

/// Snackbar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct SnackbarConfig {
    /// Maximum number of snackbars shown at once; the rest are queued.
    pub max_visible: usize,
    /// Time a snackbar stays fully visible, in milliseconds.
    pub visible_ms: u64,
    /// Fade-in duration in milliseconds.
    pub show_transition_ms: u64,
    /// Fade-out duration in milliseconds.
    pub hide_transition_ms: u64,
    /// Whether a close icon is shown.
    pub show_close_icon: bool,
    /// Whether snackbars stay until the user dismisses them.
    pub require_interaction: bool,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            visible_ms: DEFAULT_VISIBLE_MS,
            show_transition_ms: DEFAULT_SHOW_TRANSITION_MS,
            hide_transition_ms: DEFAULT_HIDE_TRANSITION_MS,
            show_close_icon: true,
            require_interaction: false,
        }
    }
}

impl SnackbarConfig {
    /// Returns the visible count clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_duration(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    #[must_use]
    pub fn show_transition(&self) -> Duration {
        Duration::from_millis(self.show_transition_ms)
    }

    #[must_use]
    pub fn hide_transition(&self) -> Duration {
        Duration::from_millis(self.hide_transition_ms)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Resolves the settings file path.
///
/// An explicit directory wins over the environment variable, which wins over
/// the platform default.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| {
            std::env::var_os(ENV_CONFIG_DIR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })?;
    Some(dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable one yields
/// defaults plus the [`LOAD_WARNING`] key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
use iced_feedback::config::{self, Config, RatingConfig, SnackbarConfig, DEFAULT_MAX_VALUE};
use iced_feedback::domain::{Size, ThemeColor};
use iced_feedback::ui::rating::RatingController;
use iced_feedback::ui::snackbar::SnackbarManager;
use std::fs;
use tempfile::tempdir;

#[test]
fn config_round_trip_drives_widgets() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let saved = Config {
        rating: RatingConfig {
            max_value: 10,
            size: Size::Large,
            full_color: Some(ThemeColor::Primary),
            ..RatingConfig::default()
        },
        snackbar: SnackbarConfig {
            max_visible: 1,
            require_interaction: true,
            ..SnackbarConfig::default()
        },
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let rating = RatingController::from_config(&loaded.rating);
    assert_eq!(rating.items().len(), 10);

    let snackbars = SnackbarManager::from_config(&loaded.snackbar);
    assert_eq!(snackbars.max_visible(), 1);
    assert!(snackbars.options().require_interaction);
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[snackbar]\nvisible-ms = 5000\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.snackbar.visible_ms, 5000);
    assert_eq!(loaded.rating.max_value, DEFAULT_MAX_VALUE);
}

#[test]
fn out_of_range_max_value_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[rating]\nmax-value = 0\n")
        .expect("Failed to write config");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.rating.max_value().value(), 1);
}

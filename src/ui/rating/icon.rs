// SPDX-License-Identifier: MPL-2.0
//! Icon selection for rating items.
//!
//! An item can show a partially filled icon. This is normally only seen in
//! read-only ratings because a click always sets a whole value. For a
//! fractional value the icons are chosen as follows:
//!
//! - 1.00 – 1.25 → one full item
//! - 1.26 – 1.74 → one full item and a half one
//! - 1.75 – 2.25 → two full items

use crate::config::{FULL_THRESHOLD, HALF_THRESHOLD};
use crate::domain::ThemeColor;

/// Fill state of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    /// Value reached `position - 0.25`, or the pointer is at or past this item.
    Full,
    /// Value strictly between `position - 0.75` and `position - 0.25`.
    Half,
    /// Anything lower.
    Empty,
}

/// Result of [`select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconChoice {
    pub icon: IconState,
    /// Whether the choice comes from hovering rather than the stored value.
    pub uses_hover_palette: bool,
}

/// Picks the icon for the item at `item_position`.
///
/// While a hover index is set it overrides the stored value: items up to and
/// including the hovered one are full, the rest empty.
#[must_use]
pub fn select(rating_value: f64, item_position: u32, hovered_index: Option<u32>) -> IconChoice {
    if let Some(hovered) = hovered_index {
        let icon = if hovered >= item_position {
            IconState::Full
        } else {
            IconState::Empty
        };
        return IconChoice {
            icon,
            uses_hover_palette: true,
        };
    }

    let position = f64::from(item_position);
    let icon = if rating_value >= position - FULL_THRESHOLD {
        IconState::Full
    } else if rating_value > position - HALF_THRESHOLD {
        IconState::Half
    } else {
        IconState::Empty
    };

    IconChoice {
        icon,
        uses_hover_palette: false,
    }
}

/// Visual used for one icon state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Filled star drawn on a canvas.
    Star,
    /// Star with its left half filled.
    HalfStar,
    /// Star outline.
    StarBorder,
    /// Any text glyph, e.g. `'♥'`.
    Glyph(char),
}

/// Icons for the three fill states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingIcons {
    pub full: Icon,
    pub half: Icon,
    pub empty: Icon,
}

impl Default for RatingIcons {
    fn default() -> Self {
        Self {
            full: Icon::Star,
            half: Icon::HalfStar,
            empty: Icon::StarBorder,
        }
    }
}

/// Optional colors for the three fill states. Unset states inherit the
/// item color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingColors {
    pub full: Option<ThemeColor>,
    pub half: Option<ThemeColor>,
    pub empty: Option<ThemeColor>,
}

impl IconChoice {
    /// Returns the configured icon for this choice.
    #[must_use]
    pub fn icon_for<'a>(&self, icons: &'a RatingIcons) -> &'a Icon {
        match self.icon {
            IconState::Full => &icons.full,
            IconState::Half => &icons.half,
            IconState::Empty => &icons.empty,
        }
    }

    /// Returns the configured color for this choice. Unset and `Inherit`
    /// colors fall back to `item_color`.
    #[must_use]
    pub fn color_for(&self, colors: &RatingColors, item_color: ThemeColor) -> ThemeColor {
        let color = match self.icon {
            IconState::Full => colors.full,
            IconState::Half => colors.half,
            IconState::Empty => colors.empty,
        };
        match color {
            None | Some(ThemeColor::Inherit) => item_color,
            Some(color) => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(value: f64, position: u32) -> IconState {
        select(value, position, None).icon
    }

    #[test]
    fn thresholds_around_third_item() {
        assert_eq!(icon(2.24, 3), IconState::Empty);
        assert_eq!(icon(2.25, 3), IconState::Empty);
        assert_eq!(icon(2.26, 3), IconState::Half);
        assert_eq!(icon(2.74, 3), IconState::Half);
        assert_eq!(icon(2.75, 3), IconState::Full);
        assert_eq!(icon(2.76, 3), IconState::Full);
    }

    #[test]
    fn whole_values_fill_lower_items_only() {
        let states: Vec<_> = (1..=5).map(|position| icon(2.0, position)).collect();
        assert_eq!(
            states,
            [
                IconState::Full,
                IconState::Full,
                IconState::Empty,
                IconState::Empty,
                IconState::Empty
            ]
        );
    }

    #[test]
    fn hover_overrides_stored_value() {
        for position in 1..=5 {
            let choice = select(5.0, position, Some(2));
            assert!(choice.uses_hover_palette);
            let expected = if position <= 2 {
                IconState::Full
            } else {
                IconState::Empty
            };
            assert_eq!(choice.icon, expected, "position {position}");
        }
    }

    #[test]
    fn hover_of_zero_empties_every_item() {
        for position in 1..=5 {
            assert_eq!(select(3.0, position, Some(0)).icon, IconState::Empty);
        }
    }

    #[test]
    fn unset_colors_inherit() {
        let colors = RatingColors {
            full: Some(ThemeColor::Primary),
            ..RatingColors::default()
        };
        let full = select(1.0, 1, None);
        let empty = select(0.0, 1, None);
        assert_eq!(full.color_for(&colors, ThemeColor::Dark), ThemeColor::Primary);
        assert_eq!(empty.color_for(&colors, ThemeColor::Dark), ThemeColor::Dark);

        let inherit = RatingColors {
            empty: Some(ThemeColor::Inherit),
            ..colors
        };
        assert_eq!(empty.color_for(&inherit, ThemeColor::Error), ThemeColor::Error);
    }

    #[test]
    fn icons_follow_state() {
        let icons = RatingIcons {
            half: Icon::Glyph('½'),
            ..RatingIcons::default()
        };
        assert_eq!(select(0.5, 1, None).icon_for(&icons), &Icon::Glyph('½'));
        assert_eq!(select(1.0, 1, None).icon_for(&icons), &Icon::Star);
        assert_eq!(select(0.0, 1, None).icon_for(&icons), &Icon::StarBorder);
    }
}

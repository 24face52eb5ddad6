// SPDX-License-Identifier: MPL-2.0
//! Resolution of named appearance choices to concrete Iced values.

use crate::domain::{Size, ThemeColor};
use crate::ui::design_tokens::{palette, sizing};
use iced::{Color, Theme};

/// Resolves a named color against the active theme.
///
/// `ThemeColor::Inherit` yields `inherited`; `ThemeColor::Default` yields
/// `default`, which lets each widget pick its own idle color.
pub fn resolve(color: ThemeColor, theme: &Theme, inherited: Color, default: Color) -> Color {
    match color {
        ThemeColor::Default => default,
        ThemeColor::Inherit => inherited,
        ThemeColor::Primary => theme.palette().primary,
        ThemeColor::Secondary => palette::SECONDARY_500,
        ThemeColor::Tertiary => palette::TERTIARY_500,
        ThemeColor::Info => palette::INFO_500,
        ThemeColor::Success => theme.palette().success,
        ThemeColor::Warning => palette::WARNING_500,
        ThemeColor::Error => theme.palette().danger,
        ThemeColor::Dark => palette::GRAY_900,
    }
}

/// A color choice resolved against the theme at draw time.
///
/// `color` is the state color; `Default` and `Inherit` both fall back to the
/// item color, which itself falls back to `default` (or the theme's text
/// color when the item color is `Inherit`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: ThemeColor,
    pub item: ThemeColor,
    pub default: Color,
}

impl Paint {
    #[must_use]
    pub fn new(color: ThemeColor, item: ThemeColor, default: Color) -> Self {
        Self {
            color,
            item,
            default,
        }
    }

    /// Resolves to a concrete color.
    #[must_use]
    pub fn resolve(&self, theme: &Theme) -> Color {
        let item = resolve(self.item, theme, theme.palette().text, self.default);
        resolve(self.color, theme, item, item)
    }
}

/// Pixel size of an icon.
pub fn icon_size(size: Size) -> f32 {
    match size {
        Size::Small => sizing::ICON_SM,
        Size::Medium => sizing::ICON_MD,
        Size::Large => sizing::ICON_LG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_and_default_use_given_colors() {
        let theme = Theme::Light;
        let inherited = palette::AMBER_600;
        assert_eq!(
            resolve(ThemeColor::Inherit, &theme, inherited, palette::BLACK),
            inherited
        );
        assert_eq!(
            resolve(ThemeColor::Default, &theme, inherited, palette::BLACK),
            palette::BLACK
        );
    }

    #[test]
    fn named_colors_are_distinct() {
        let theme = Theme::Dark;
        let primary = resolve(ThemeColor::Primary, &theme, palette::WHITE, palette::WHITE);
        let secondary = resolve(ThemeColor::Secondary, &theme, palette::WHITE, palette::WHITE);
        let tertiary = resolve(ThemeColor::Tertiary, &theme, palette::WHITE, palette::WHITE);
        assert_ne!(primary, secondary);
        assert_ne!(secondary, tertiary);
    }

    #[test]
    fn paint_falls_back_to_item_color() {
        let theme = Theme::Light;
        let paint = Paint::new(ThemeColor::Inherit, ThemeColor::Default, palette::AMBER_600);
        assert_eq!(paint.resolve(&theme), palette::AMBER_600);

        let tertiary = Paint::new(ThemeColor::Tertiary, ThemeColor::Default, palette::AMBER_600);
        assert_eq!(tertiary.resolve(&theme), palette::TERTIARY_500);
    }

    #[test]
    fn icon_sizes_grow_with_size() {
        assert!(icon_size(Size::Small) < icon_size(Size::Medium));
        assert!(icon_size(Size::Medium) < icon_size(Size::Large));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rendering of a rating as a row of items.

use super::controller::{Message, RatingController};
use super::icon::{Icon, IconChoice, RatingColors, RatingIcons};
use super::item::{RatingItem, RatingSnapshot};
use crate::config::RatingConfig;
use crate::domain::{Size, ThemeColor};
use crate::ui::design_tokens::{opacity, palette, spacing};
use crate::ui::theme::{self, Paint};
use crate::ui::widgets::star_icon::{StarFill, StarIcon};
use iced::widget::{mouse_area, text, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Visual configuration of a rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub icons: RatingIcons,
    pub colors: RatingColors,
    /// Item color; state colors that are unset inherit it.
    pub color: ThemeColor,
    pub size: Size,
    /// Highlight the hovered item.
    pub ripple: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            icons: RatingIcons::default(),
            colors: RatingColors::default(),
            color: ThemeColor::Default,
            size: Size::Medium,
            ripple: true,
        }
    }
}

impl Appearance {
    #[must_use]
    pub fn from_config(config: &RatingConfig) -> Self {
        Self {
            icons: RatingIcons::default(),
            colors: RatingColors {
                full: config.full_color,
                half: config.half_color,
                empty: config.empty_color,
            },
            color: config.color,
            size: config.size,
            ripple: config.ripple,
        }
    }

    /// Paint for an item showing `choice`.
    #[must_use]
    pub fn paint(&self, choice: &IconChoice) -> Paint {
        Paint::new(
            choice.color_for(&self.colors, self.color),
            self.color,
            palette::AMBER_600,
        )
    }
}

/// Renders the rating.
pub fn view(controller: &RatingController) -> Element<'_, Message> {
    let snapshot = controller.snapshot();
    let appearance = controller.appearance();

    let row = controller
        .items()
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, item| {
            row.push(item_view(item, &snapshot, appearance))
        });

    Container::new(row.align_y(alignment::Vertical::Center))
        .width(Length::Shrink)
        .into()
}

/// Renders one item. Icon and color are recomputed from the snapshot.
fn item_view<'a>(
    item: &RatingItem,
    snapshot: &RatingSnapshot,
    appearance: &Appearance,
) -> Element<'a, Message> {
    let choice = item.icon(Some(snapshot));
    let paint = appearance.paint(&choice);
    let size = theme::icon_size(appearance.size);
    let alpha = if snapshot.disabled {
        opacity::DISABLED
    } else {
        opacity::OPAQUE
    };
    let highlight = appearance.ripple && item.is_active();

    let icon: Element<'a, Message> = match choice.icon_for(&appearance.icons) {
        Icon::Star => star(StarFill::Full, paint, size, highlight, alpha),
        Icon::HalfStar => star(StarFill::Half, paint, size, highlight, alpha),
        Icon::StarBorder => star(StarFill::Empty, paint, size, highlight, alpha),
        Icon::Glyph(glyph) => text(glyph.to_string())
            .size(size)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..paint.resolve(theme)
                }),
            })
            .into(),
    };

    if snapshot.disabled || snapshot.read_only {
        return icon;
    }

    let position = item.position();
    mouse_area(icon)
        .on_enter(Message::PointerOver(position))
        .on_exit(Message::PointerOut(position))
        .on_press(Message::Clicked(position))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn star<'a>(
    fill: StarFill,
    paint: Paint,
    size: f32,
    highlight: bool,
    alpha: f32,
) -> Element<'a, Message> {
    StarIcon::new(fill, paint, size)
        .with_highlight(highlight)
        .with_alpha(alpha)
        .into_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rating::icon::select;

    #[test]
    fn appearance_from_config_copies_colors() {
        let config = RatingConfig {
            full_color: Some(ThemeColor::Primary),
            empty_color: Some(ThemeColor::Tertiary),
            ripple: false,
            ..RatingConfig::default()
        };
        let appearance = Appearance::from_config(&config);
        assert_eq!(appearance.colors.full, Some(ThemeColor::Primary));
        assert_eq!(appearance.colors.half, None);
        assert!(!appearance.ripple);
    }

    #[test]
    fn paint_uses_state_color() {
        let appearance = Appearance {
            colors: RatingColors {
                full: Some(ThemeColor::Primary),
                half: Some(ThemeColor::Secondary),
                empty: Some(ThemeColor::Tertiary),
            },
            ..Appearance::default()
        };
        assert_eq!(appearance.paint(&select(2.0, 1, None)).color, ThemeColor::Primary);
        assert_eq!(appearance.paint(&select(2.5, 3, None)).color, ThemeColor::Secondary);
        assert_eq!(appearance.paint(&select(2.0, 3, None)).color, ThemeColor::Tertiary);
    }

    #[test]
    fn view_builds_for_every_state() {
        let mut controller = RatingController::default().with_value(2.4);
        let _ = view(&controller);
        controller.hover(Some(4));
        let _ = view(&controller);
        controller.set_disabled(true);
        let _ = view(&controller);
    }
}

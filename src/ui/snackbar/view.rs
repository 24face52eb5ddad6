// SPDX-License-Identifier: MPL-2.0
//! Rendering of snackbars.
//!
//! Snackbars are small cards with a severity accent, an optional icon, an
//! optional action button and an optional close icon. Their opacity follows
//! the show and hide transitions.

use super::element::SnackbarElement;
use super::manager::{Manager, Message};
use super::snackbar::SnackbarId;
use crate::domain::{ThemeColor, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::theme;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Everything needed to draw one snackbar, read out of the shared handle.
#[derive(Debug, Clone)]
struct Frame {
    id: SnackbarId,
    message: String,
    accent: Color,
    variant: Variant,
    icon: Option<char>,
    icon_color: ThemeColor,
    icon_size: f32,
    action: Option<(String, ThemeColor, Variant)>,
    show_close_icon: bool,
    alpha: f32,
}

impl Frame {
    fn read(element: &SnackbarElement, now: Instant) -> Option<Self> {
        let snackbar = element.snackbar()?.borrow();
        let state = snackbar.state();
        let options = state.options();

        Some(Self {
            id: snackbar.id(),
            message: snackbar.message().to_owned(),
            accent: options.severity.color(),
            variant: options.snackbar_variant,
            icon: if state.hide_icon() { None } else { state.icon() },
            icon_color: options.icon_color,
            icon_size: theme::icon_size(options.icon_size),
            action: options
                .action
                .clone()
                .map(|label| (label, options.action_color, state.action_variant())),
            show_close_icon: state.show_close_icon(),
            alpha: state.opacity_at(now),
        })
    }
}

/// Renders a single snackbar. An unbound element renders nothing.
pub fn view<'a>(element: &SnackbarElement) -> Element<'a, Message> {
    view_at(element, Instant::now())
}

/// Renders a single snackbar with its opacity taken at `now`.
pub fn view_at<'a>(element: &SnackbarElement, now: Instant) -> Element<'a, Message> {
    match Frame::read(element, now) {
        Some(frame) => frame_view(frame),
        None => empty(),
    }
}

/// Renders every visible snackbar, stacked in the bottom-right corner.
pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
    let now = Instant::now();
    let snackbars: Vec<Element<'_, Message>> =
        manager.visible().map(|element| view_at(element, now)).collect();

    if snackbars.is_empty() {
        return empty();
    }

    let column = Column::with_children(snackbars)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

fn frame_view<'a>(frame: Frame) -> Element<'a, Message> {
    let Frame {
        id,
        message,
        accent,
        variant,
        icon,
        icon_color,
        icon_size,
        action,
        show_close_icon,
        alpha,
    } = frame;

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(glyph) = icon {
        let icon_widget = Text::new(glyph.to_string()).size(icon_size).style(
            move |theme: &Theme| text::Style {
                color: Some(with_alpha(
                    theme::resolve(
                        icon_color,
                        theme,
                        foreground(theme, variant, accent),
                        accent,
                    ),
                    alpha,
                )),
            },
        );
        content = content.push(Container::new(icon_widget).padding(spacing::XXS));
    }

    let message_widget = Text::new(message)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(foreground(theme, variant, accent), alpha)),
        });
    content = content.push(
        Container::new(message_widget)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left),
    );

    if let Some((label, color, action_variant)) = action {
        content = content.push(
            button(Text::new(label).size(typography::BODY_SM))
                .on_press(Message::ActionClicked(id))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| {
                    action_button_style(theme, status, color, action_variant, accent, alpha)
                }),
        );
    }

    if show_close_icon {
        content = content.push(
            button(Text::new("✕").size(sizing::ICON_SM))
                .on_press(Message::CloseClicked(id))
                .padding(spacing::XXS)
                .style(move |theme: &Theme, status| {
                    close_button_style(theme, status, foreground(theme, variant, accent), alpha)
                }),
        );
    }

    let card = Container::new(content)
        .width(Length::Fixed(sizing::SNACKBAR_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| snackbar_container_style(theme, variant, accent, alpha));

    mouse_area(card)
        .on_enter(Message::InteractionStarted(id))
        .on_exit(Message::InteractionEnded(id))
        .on_press(Message::BackgroundClicked(id))
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Text color on top of the snackbar surface.
fn foreground(theme: &Theme, variant: Variant, accent: Color) -> Color {
    match variant {
        Variant::Filled => palette::WHITE,
        Variant::Outlined => theme.palette().text,
        Variant::Text => accent,
    }
}

/// Style function for the snackbar card.
fn snackbar_container_style(
    theme: &Theme,
    variant: Variant,
    accent: Color,
    alpha: f32,
) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let (background, border_color, border_width) = match variant {
        Variant::Filled => (accent, accent, 0.0),
        Variant::Outlined => (base, accent, border::WIDTH_MD),
        Variant::Text => (base, accent, 0.0),
    };

    container::Style {
        background: Some(iced::Background::Color(with_alpha(background, alpha))),
        border: iced::Border {
            color: with_alpha(border_color, alpha),
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(Color { a: opacity::OVERLAY_MEDIUM, ..shadow::MD.color }, alpha),
            ..shadow::MD
        },
        text_color: Some(with_alpha(foreground(theme, variant, accent), alpha)),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(
    theme: &Theme,
    status: button::Status,
    color: ThemeColor,
    variant: Variant,
    accent: Color,
    alpha: f32,
) -> button::Style {
    let tint = theme::resolve(color, theme, theme.palette().text, palette::WHITE);
    let overlay = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
    };

    let (background, text_color, border_width) = match variant {
        Variant::Filled => (Some(tint), accent, 0.0),
        Variant::Outlined => (None, tint, border::WIDTH_SM),
        Variant::Text => (None, tint, 0.0),
    };
    let background = background.or((overlay > 0.0).then_some(Color { a: overlay, ..tint }));

    button::Style {
        background: background.map(|color| iced::Background::Color(with_alpha(color, alpha))),
        text_color: with_alpha(text_color, alpha),
        border: iced::Border {
            color: with_alpha(tint, alpha),
            width: border_width,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the close button.
fn close_button_style(
    _theme: &Theme,
    status: button::Status,
    text_color: Color,
    alpha: f32,
) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    }
    .map(|a| iced::Background::Color(with_alpha(Color { a, ..palette::GRAY_400 }, alpha)));

    button::Style {
        background,
        text_color: with_alpha(text_color, alpha),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

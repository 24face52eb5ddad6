// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::rating::{self, RatingController};
use crate::ui::snackbar::{self, SnackbarManager};
use iced::widget::{stack, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub rating: &'a RatingController,
    pub snackbars: &'a SnackbarManager,
}

/// Renders the rating with the snackbar overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let summary = match ctx.rating.hovered() {
        Some(hovered) => format!("{hovered} / {}", ctx.rating.max_value().value()),
        None => format!(
            "{} / {}",
            ctx.rating.rounded_value(),
            ctx.rating.max_value().value()
        ),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(rating::view(ctx.rating).map(Message::Rating))
        .push(Text::new(summary).size(typography::BODY));

    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    stack![
        body,
        snackbar::view_overlay(ctx.snackbars).map(Message::Snackbar)
    ]
    .into()
}

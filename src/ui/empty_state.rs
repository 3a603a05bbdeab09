// SPDX-License-Identifier: MPL-2.0
//! Placeholder view shown before a portfolio directory is chosen.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Render the empty state with an "Open folder…" call to action.
#[must_use]
pub fn view<Message: Clone + 'static>(on_open: Message) -> Element<'static, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("No portfolio loaded").size(typography::TITLE_MD))
        .push(
            Text::new("Choose a folder with one subdirectory per category.")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(
            button(Text::new("Open folder…").size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::primary)
                .on_press(on_open),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

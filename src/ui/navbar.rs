// SPDX-License-Identifier: MPL-2.0
//! Header bar with the studio title and a hamburger menu.
//!
//! The menu toggles open/closed, closes when an entry is selected, and
//! closes on Escape (wired by the app's keyboard subscription).

use crate::config::ThemeMode;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
    pub auto_advance: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenFolder,
    ToggleTheme,
    ToggleAutoAdvance,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFolder,
    ToggleTheme,
    ToggleAutoAdvance,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenFolder => {
            *menu_open = false;
            Event::OpenFolder
        }
        Message::ToggleTheme => {
            *menu_open = false;
            Event::ToggleTheme
        }
        Message::ToggleAutoAdvance => {
            *menu_open = false;
            Event::ToggleAutoAdvance
        }
    }
}

/// Render the header bar (and the dropdown menu when open).
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.title).size(typography::TITLE_MD);

    let menu_toggle = button(Text::new(if ctx.menu_open { "✕" } else { "☰" }).size(typography::TITLE_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::primary)
        .on_press(Message::ToggleMenu);

    let bar = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .padding([spacing::SM, spacing::LG])
        .push(title)
        .push(Container::new(menu_toggle).width(Length::Fill).align_x(Horizontal::Right));

    let mut column = Column::new().push(bar);

    if ctx.menu_open {
        let theme_label = match ctx.theme_mode {
            ThemeMode::Light => "Switch to dark theme",
            ThemeMode::Dark => "Switch to light theme",
        };
        let auto_label = if ctx.auto_advance {
            "Pause slideshows"
        } else {
            "Resume slideshows"
        };

        let menu = Column::new()
            .spacing(spacing::XXS)
            .padding([spacing::XS, spacing::LG])
            .push(menu_entry("Open folder…", Message::OpenFolder))
            .push(menu_entry(theme_label, Message::ToggleTheme))
            .push(menu_entry(auto_label, Message::ToggleAutoAdvance));

        column = column.push(menu);
    }

    Container::new(column)
        .width(Length::Fill)
        .style(styles::header)
        .into()
}

fn menu_entry(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::primary)
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu_open = false;
        update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu_open = false;
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn selecting_an_entry_closes_the_menu() {
        let mut menu_open = true;
        let event = update(Message::OpenFolder, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenFolder));
    }

    #[test]
    fn toggles_propagate_events() {
        let mut menu_open = true;
        assert!(matches!(
            update(Message::ToggleTheme, &mut menu_open),
            Event::ToggleTheme
        ));
        menu_open = true;
        assert!(matches!(
            update(Message::ToggleAutoAdvance, &mut menu_open),
            Event::ToggleAutoAdvance
        ));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Filterable portfolio grid.
//!
//! Shows one filter button per discovered category plus "All", and a
//! thumbnail grid restricted to the active filter. Clicking a thumbnail
//! asks the app to open the lightbox over the currently visible images,
//! so lightbox navigation stays within the filtered set.

use crate::config::GALLERY_COLUMNS;
use crate::portfolio::{Filter, Portfolio};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;
use std::path::PathBuf;

/// Gallery sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    portfolio: Portfolio,
    filter: Filter,
    thumbnails: HashMap<PathBuf, Handle>,
}

/// Messages for the gallery sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A filter button was pressed.
    FilterSelected(Filter),
    /// A thumbnail was pressed.
    ItemPressed(PathBuf),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the lightbox over `images`, starting at `start`.
    OpenLightbox { images: Vec<PathBuf>, start: usize },
}

impl State {
    #[must_use]
    pub fn new(portfolio: Portfolio) -> Self {
        let thumbnails = portfolio
            .items()
            .iter()
            .map(|item| (item.path.clone(), Handle::from_path(&item.path)))
            .collect();
        Self {
            portfolio,
            filter: Filter::All,
            thumbnails,
        }
    }

    /// The currently active filter.
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, message: Message) -> Event {
        match message {
            Message::FilterSelected(filter) => {
                self.filter = filter;
                Event::None
            }
            Message::ItemPressed(path) => {
                let images: Vec<PathBuf> = self
                    .portfolio
                    .visible_items(&self.filter)
                    .iter()
                    .map(|item| item.path.clone())
                    .collect();
                // A stale press (item filtered out meanwhile) falls back
                // to the first visible image.
                let start = images.iter().position(|p| *p == path).unwrap_or(0);
                if images.is_empty() {
                    Event::None
                } else {
                    Event::OpenLightbox { images, start }
                }
            }
        }
    }

    /// Render the filter row and thumbnail grid.
    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(Text::new("Portfolio").size(typography::TITLE_MD))
            .push(self.filter_row())
            .push(self.grid());

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .into()
    }

    fn filter_row(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        row = row.push(
            button(Text::new("All").size(typography::BODY))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::filter(self.filter == Filter::All))
                .on_press(Message::FilterSelected(Filter::All)),
        );

        for category in self.portfolio.categories() {
            let filter = Filter::Category(category.clone());
            row = row.push(
                button(Text::new(category.clone()).size(typography::BODY))
                    .padding([spacing::XXS, spacing::MD])
                    .style(styles::filter(self.filter == filter))
                    .on_press(Message::FilterSelected(filter.clone())),
            );
        }

        row.into()
    }

    fn grid(&self) -> Element<'_, Message> {
        let visible = self.portfolio.visible_items(&self.filter);

        let mut column = Column::new().spacing(spacing::MD);
        for chunk in visible.chunks(GALLERY_COLUMNS) {
            let mut row = Row::new().spacing(spacing::MD);
            for item in chunk {
                let thumbnail: Element<'_, Message> = match self.thumbnails.get(&item.path) {
                    Some(handle) => Image::new(handle.clone())
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                        .into(),
                    None => Container::new(Text::new(""))
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                        .into(),
                };

                let caption = Text::new(item.title.clone()).size(typography::CAPTION);
                let cell = Column::new()
                    .spacing(spacing::XXS)
                    .align_x(Horizontal::Center)
                    .push(thumbnail)
                    .push(caption);

                row = row.push(
                    button(cell)
                        .width(Length::FillPortion(1))
                        .style(styles::thumbnail)
                        .on_press(Message::ItemPressed(item.path.clone())),
                );
            }
            // Pad the last row so cells keep a uniform width.
            for _ in chunk.len()..GALLERY_COLUMNS {
                row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
            }
            column = column.push(row);
        }

        column.width(Length::Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioItem;

    fn portfolio_with(items: &[(&str, &str)]) -> Portfolio {
        // Build via the public scan path in integration tests; here a
        // hand-rolled portfolio keeps the unit tests filesystem-free.
        let items: Vec<PortfolioItem> = items
            .iter()
            .map(|(category, name)| PortfolioItem {
                path: PathBuf::from(format!("/p/{category}/{name}")),
                category: (*category).to_string(),
                title: (*name).to_string(),
            })
            .collect();
        Portfolio::from_parts(Vec::new(), items, vec![
            "landscape".to_string(),
            "portrait".to_string(),
        ])
    }

    #[test]
    fn selecting_a_filter_updates_state() {
        let mut state = State::new(portfolio_with(&[
            ("landscape", "a.jpg"),
            ("portrait", "b.jpg"),
        ]));
        let event = state.handle(Message::FilterSelected(Filter::Category(
            "portrait".to_string(),
        )));
        assert!(matches!(event, Event::None));
        assert_eq!(
            state.filter(),
            &Filter::Category("portrait".to_string())
        );
    }

    #[test]
    fn item_press_opens_lightbox_over_visible_set() {
        let mut state = State::new(portfolio_with(&[
            ("landscape", "a.jpg"),
            ("portrait", "b.jpg"),
            ("portrait", "c.jpg"),
        ]));
        state.handle(Message::FilterSelected(Filter::Category(
            "portrait".to_string(),
        )));

        let event = state.handle(Message::ItemPressed(PathBuf::from("/p/portrait/c.jpg")));
        match event {
            Event::OpenLightbox { images, start } => {
                assert_eq!(images.len(), 2);
                assert_eq!(start, 1);
            }
            Event::None => panic!("expected OpenLightbox"),
        }
    }

    #[test]
    fn stale_item_press_falls_back_to_first_visible() {
        let mut state = State::new(portfolio_with(&[
            ("landscape", "a.jpg"),
            ("portrait", "b.jpg"),
        ]));
        state.handle(Message::FilterSelected(Filter::Category(
            "portrait".to_string(),
        )));

        // Press an item that the active filter hides.
        let event = state.handle(Message::ItemPressed(PathBuf::from("/p/landscape/a.jpg")));
        match event {
            Event::OpenLightbox { start, .. } => assert_eq!(start, 0),
            Event::None => panic!("expected OpenLightbox"),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox overlay.
//!
//! Opened from the gallery over the currently visible images. Navigation
//! has no auto-advance and no settle delay; the neighbors of the shown
//! image are pre-decoded so arrows and swipes never stutter.

use crate::cycler::{Cycler, CyclerConfig, Effect};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Container, Stack, Text};
use iced::{ContentFit, Element, Length, Point};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

/// Lightbox sub-component state; exists only while the overlay is open.
#[derive(Debug, Clone)]
pub struct State {
    images: Vec<PathBuf>,
    handles: HashMap<usize, Handle>,
    cycler: Cycler,
    cursor: Point,
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button or Escape.
    Close,
    /// Right arrow button or ArrowRight key.
    Next,
    /// Left arrow button or ArrowLeft key.
    Previous,
    /// Click on the dimmed area outside the image.
    BackdropPressed,
    /// Pointer pressed over the image (gesture start).
    Pressed,
    /// Pointer moved over the image.
    Moved(Point),
    /// Pointer released (gesture end).
    Released,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The overlay should be torn down.
    Closed,
}

impl State {
    /// Opens the lightbox over `images`, showing `start` first.
    #[must_use]
    pub fn new(images: Vec<PathBuf>, start: usize, now: Instant) -> Self {
        let mut cycler = Cycler::new(images.len(), CyclerConfig::default());
        cycler.go_to(start as isize, now);
        let mut state = Self {
            images,
            handles: HashMap::new(),
            cycler,
            cursor: Point::ORIGIN,
        };
        state.preload_adjacent();
        state
    }

    /// Index of the image currently shown.
    #[must_use]
    pub fn current(&self) -> usize {
        self.cycler.current()
    }

    /// Number of images the overlay navigates over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false: the gallery never opens a lightbox without images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Handle a lightbox message.
    pub fn handle(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Close | Message::BackdropPressed => Event::Closed,
            Message::Next => {
                self.cycler.next(now);
                self.preload_adjacent();
                Event::None
            }
            Message::Previous => {
                self.cycler.prev(now);
                self.preload_adjacent();
                Event::None
            }
            Message::Pressed => {
                self.cycler.gesture_start(self.cursor);
                Event::None
            }
            Message::Moved(position) => {
                self.cursor = position;
                self.cycler.gesture_move(position);
                Event::None
            }
            Message::Released => {
                if let Effect::Show { .. } = self.cycler.gesture_end(self.cursor, now) {
                    self.preload_adjacent();
                }
                Event::None
            }
        }
    }

    /// Ensures handles exist for the shown image and both neighbors so
    /// arrow and swipe navigation never waits on disk.
    fn preload_adjacent(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        let current = self.cycler.current();
        for index in [current, (current + 1) % len, (current + len - 1) % len] {
            if !self.handles.contains_key(&index) {
                self.handles
                    .insert(index, Handle::from_path(&self.images[index]));
            }
        }
    }

    /// Render the lightbox overlay.
    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let current = self.cycler.current();

        let backdrop = mouse_area(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::backdrop),
        )
        .on_press(Message::BackdropPressed);

        let image: Element<'_, Message> = match self.handles.get(&current) {
            Some(handle) => Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT))
                .into(),
            None => Text::new("").into(),
        };

        let picture = mouse_area(image)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_move(Message::Moved);

        let centered_picture = Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        let mut stack = Stack::new().push(backdrop).push(centered_picture);

        if self.images.len() > 1 {
            stack = stack
                .push(arrow_zone("◀", Horizontal::Left, Message::Previous))
                .push(arrow_zone("▶", Horizontal::Right, Message::Next))
                .push(self.counter(current));
        }

        stack = stack.push(close_zone());

        stack.into()
    }

    fn counter(&self, current: usize) -> Element<'_, Message> {
        let label = Text::new(format!("{} / {}", current + 1, self.images.len()))
            .size(typography::BODY)
            .color(palette::WHITE);

        Container::new(label)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::LG)
            .into()
    }
}

fn close_zone<'a>() -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::TITLE_SM))
        .padding(spacing::SM)
        .style(styles::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(Message::Close);

    Container::new(close)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::MD)
        .into()
}

/// Side-aligned arrow button zone, stacked over the backdrop.
fn arrow_zone(
    glyph: &str,
    side: Horizontal,
    message: Message,
) -> Element<'_, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(message);

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| PathBuf::from(format!("/gallery/{i}.jpg")))
            .collect()
    }

    #[test]
    fn opens_at_requested_index() {
        let state = State::new(images(4), 2, Instant::now());
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut state = State::new(images(3), 0, Instant::now());
        let t0 = Instant::now();
        state.handle(Message::Previous, t0);
        assert_eq!(state.current(), 2);
        state.handle(Message::Next, t0);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn close_and_backdrop_both_request_teardown() {
        let mut state = State::new(images(2), 0, Instant::now());
        let t0 = Instant::now();
        assert!(matches!(state.handle(Message::Close, t0), Event::Closed));
        assert!(matches!(
            state.handle(Message::BackdropPressed, t0),
            Event::Closed
        ));
    }

    #[test]
    fn neighbors_are_preloaded() {
        let state = State::new(images(5), 2, Instant::now());
        assert!(state.handles.contains_key(&1));
        assert!(state.handles.contains_key(&2));
        assert!(state.handles.contains_key(&3));
        assert!(!state.handles.contains_key(&0));
    }

    #[test]
    fn swipe_navigates_and_preloads() {
        let mut state = State::new(images(5), 0, Instant::now());
        let t0 = Instant::now();
        state.handle(Message::Moved(Point::new(300.0, 200.0)), t0);
        state.handle(Message::Pressed, t0);
        state.handle(Message::Moved(Point::new(220.0, 200.0)), t0);
        state.handle(Message::Released, t0);
        assert_eq!(state.current(), 1);
        assert!(state.handles.contains_key(&2));
    }

    #[test]
    fn single_image_lightbox_is_stable() {
        let mut state = State::new(images(1), 0, Instant::now());
        let t0 = Instant::now();
        state.handle(Message::Next, t0);
        state.handle(Message::Previous, t0);
        assert_eq!(state.current(), 0);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel: one card at a time with progress dots, arrow
//! buttons, star ratings, swipe, and hover-paused auto-advance.
//!
//! The swipe resume uses a short grace delay so the card settles visually
//! before the idle countdown restarts.

use crate::config::{TESTIMONIAL_INTERVAL, TESTIMONIAL_RESUME_GRACE, TESTIMONIAL_SETTLE};
use crate::cycler::{Cycler, CyclerConfig};
use crate::testimonials::{Testimonial, MAX_RATING};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{Element, Length, Point};
use std::time::Instant;

/// Testimonial carousel state.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<Testimonial>,
    cycler: Cycler,
    cursor: Point,
    auto_advance: bool,
}

/// Messages for the testimonial sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Right arrow pressed.
    Next,
    /// Left arrow pressed.
    Previous,
    /// Progress dot pressed.
    DotPressed(usize),
    /// Pointer pressed over the carousel (gesture start).
    Pressed,
    /// Pointer moved over the carousel.
    Moved(Point),
    /// Pointer released (gesture end).
    Released,
    /// Pointer entered the carousel (pause auto-advance).
    Entered,
    /// Pointer left the carousel (resume auto-advance).
    Exited,
}

impl State {
    /// Builds the carousel. Hosts skip construction when the testimonial
    /// file is missing or empty.
    #[must_use]
    pub fn new(items: Vec<Testimonial>, auto_advance: bool, now: Instant) -> Self {
        let mut cycler = Cycler::new(
            items.len(),
            CyclerConfig {
                interval: Some(TESTIMONIAL_INTERVAL),
                settle: TESTIMONIAL_SETTLE,
                resume_grace: TESTIMONIAL_RESUME_GRACE,
                ..CyclerConfig::default()
            },
        );
        if auto_advance {
            cycler.start_auto_advance(now);
        }
        Self {
            items,
            cycler,
            cursor: Point::ORIGIN,
            auto_advance,
        }
    }

    /// Index of the testimonial currently shown.
    #[must_use]
    pub fn current(&self) -> usize {
        self.cycler.current()
    }

    /// Enables or disables auto-advance (settings change at runtime).
    pub fn set_auto_advance(&mut self, enabled: bool, now: Instant) {
        self.auto_advance = enabled;
        if enabled {
            self.cycler.start_auto_advance(now);
        } else {
            self.cycler.stop_auto_advance();
        }
    }

    /// Drives the auto-advance timer; called from the app tick.
    pub fn tick(&mut self, now: Instant) {
        self.cycler.tick(now);
    }

    /// Handle a testimonial message.
    pub fn handle(&mut self, message: Message, now: Instant) {
        match message {
            Message::Next => {
                self.cycler.next(now);
                self.restart_auto_advance(now);
            }
            Message::Previous => {
                self.cycler.prev(now);
                self.restart_auto_advance(now);
            }
            Message::DotPressed(index) => {
                self.cycler.go_to(index as isize, now);
                self.restart_auto_advance(now);
            }
            Message::Pressed => {
                self.cycler.gesture_start(self.cursor);
            }
            Message::Moved(position) => {
                self.cursor = position;
                self.cycler.gesture_move(position);
            }
            Message::Released => {
                let _ = self.cycler.gesture_end(self.cursor, now);
                if !self.auto_advance {
                    self.cycler.stop_auto_advance();
                }
            }
            Message::Entered => {
                self.cycler.stop_auto_advance();
            }
            Message::Exited => {
                if self.auto_advance && !self.cycler.gesture_active() {
                    self.cycler.start_auto_advance(now);
                }
            }
        }
    }

    fn restart_auto_advance(&mut self, now: Instant) {
        if self.auto_advance {
            self.cycler.stop_auto_advance();
            self.cycler.start_auto_advance(now);
        }
    }

    /// Render the testimonial section.
    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let current = self.cycler.current();
        let testimonial = &self.items[current];

        let card = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(stars(testimonial.rating()))
                .push(
                    Text::new(format!("“{}”", testimonial.quote)).size(typography::BODY_LG),
                )
                .push(Text::new(testimonial.author.clone()).size(typography::TITLE_SM))
                .push(
                    Text::new(testimonial.role.clone())
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                ),
        )
        .width(Length::Fixed(sizing::TESTIMONIAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::card);

        let swipeable_card = mouse_area(card)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_move(Message::Moved)
            .on_enter(Message::Entered)
            .on_exit(Message::Exited);

        let mut controls = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center);

        if self.items.len() > 1 {
            controls = controls.push(arrow("◀", Message::Previous));
        }
        controls = controls.push(swipeable_card);
        if self.items.len() > 1 {
            controls = controls.push(arrow("▶", Message::Next));
        }

        let mut content = Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(Text::new("Kind Words").size(typography::TITLE_MD))
            .push(controls);

        if self.items.len() > 1 {
            content = content.push(self.progress_dots(current));
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .into()
    }

    fn progress_dots(&self, current: usize) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for index in 0..self.items.len() {
            row = row.push(
                button("")
                    .width(Length::Fixed(sizing::PROGRESS_DOT))
                    .height(Length::Fixed(sizing::PROGRESS_DOT))
                    .style(styles::dot(index == current))
                    .on_press(Message::DotPressed(index)),
            );
        }
        row.into()
    }
}

/// Star rating row: filled stars up to the rating, hollow for the rest.
fn stars<'a>(rating: u8) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for position in 1..=MAX_RATING {
        let glyph = if position <= rating { "★" } else { "☆" };
        row = row.push(
            Text::new(glyph)
                .size(typography::BODY_LG)
                .color(palette::STAR_500),
        );
    }
    row.into()
}

fn arrow(glyph: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn testimonials(count: usize) -> Vec<Testimonial> {
        let toml = (0..count)
            .map(|i| {
                format!(
                    "[[testimonials]]\nauthor = \"Client {i}\"\nquote = \"Quote {i}\"\nrating = 5\n"
                )
            })
            .collect::<String>();
        // Parse through the public loader format to keep fixtures honest.
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(temp.path().join("testimonials.toml"), toml)
            .expect("failed to write fixture");
        crate::testimonials::load(temp.path()).expect("fixture should parse")
    }

    #[test]
    fn dot_press_jumps_to_testimonial() {
        let mut state = State::new(testimonials(4), false, Instant::now());
        state.handle(Message::DotPressed(2), Instant::now());
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn auto_advance_fires_on_interval() {
        let t0 = Instant::now();
        let mut state = State::new(testimonials(3), true, t0);
        state.tick(t0 + TESTIMONIAL_INTERVAL);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn swipe_resume_waits_for_grace_delay() {
        let t0 = Instant::now();
        let mut state = State::new(testimonials(3), true, t0);

        state.handle(Message::Moved(Point::new(100.0, 50.0)), t0);
        state.handle(Message::Pressed, t0);
        state.handle(Message::Moved(Point::new(30.0, 50.0)), t0);
        state.handle(Message::Released, t0);
        assert_eq!(state.current(), 1);

        // One interval after the swipe is still inside the grace window.
        state.tick(t0 + TESTIMONIAL_INTERVAL);
        assert_eq!(state.current(), 1);
        state.tick(t0 + TESTIMONIAL_INTERVAL + TESTIMONIAL_RESUME_GRACE);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn rapid_dot_presses_are_debounced_within_settle() {
        let t0 = Instant::now();
        let mut state = State::new(testimonials(5), false, t0);
        state.handle(Message::DotPressed(2), t0);
        state.handle(Message::DotPressed(4), t0 + Duration::from_millis(50));
        assert_eq!(state.current(), 2);
        state.handle(
            Message::DotPressed(4),
            t0 + TESTIMONIAL_SETTLE + Duration::from_millis(1),
        );
        assert_eq!(state.current(), 4);
    }
}

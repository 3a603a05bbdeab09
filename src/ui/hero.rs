// SPDX-License-Identifier: MPL-2.0
//! Hero slideshow: full-width cross-fading slides with indicator dots,
//! arrow buttons, drag-to-swipe, and hover-paused auto-advance.

use crate::config::{HERO_INTERVAL, HERO_SETTLE};
use crate::cycler::{Cycler, CyclerConfig, Effect};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length, Point};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Hero slideshow state. Construction preloads every slide into an image
/// handle so transitions never wait on disk.
#[derive(Debug, Clone)]
pub struct State {
    slides: Vec<Handle>,
    cycler: Cycler,
    cursor: Point,
    auto_advance: bool,
}

/// Messages for the hero sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Right arrow pressed.
    Next,
    /// Left arrow pressed.
    Previous,
    /// Indicator dot pressed.
    IndicatorPressed(usize),
    /// Pointer pressed over the slideshow (gesture start).
    Pressed,
    /// Pointer moved over the slideshow.
    Moved(Point),
    /// Pointer released (gesture end).
    Released,
    /// Pointer entered the slideshow (pause auto-advance).
    Entered,
    /// Pointer left the slideshow (resume auto-advance).
    Exited,
}

impl State {
    /// Builds the slideshow over the given slide paths. Hosts should not
    /// construct one when they have no slides to show.
    #[must_use]
    pub fn new(paths: &[PathBuf], auto_advance: bool, now: Instant) -> Self {
        let slides: Vec<Handle> = paths.iter().map(Handle::from_path).collect();
        let mut cycler = Cycler::new(
            slides.len(),
            CyclerConfig {
                interval: Some(HERO_INTERVAL),
                settle: HERO_SETTLE,
                resume_grace: Duration::ZERO,
                ..CyclerConfig::default()
            },
        );
        if auto_advance {
            cycler.start_auto_advance(now);
        }
        Self {
            slides,
            cycler,
            cursor: Point::ORIGIN,
            auto_advance,
        }
    }

    /// Index of the slide currently shown.
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

    /// Handle a hero message.
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
            Message::IndicatorPressed(index) => {
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

    /// Manual navigation restarts the idle countdown, stop-then-start.
    fn restart_auto_advance(&mut self, now: Instant) {
        if self.auto_advance {
            self.cycler.stop_auto_advance();
            self.cycler.start_auto_advance(now);
        }
    }

    /// Render the hero slideshow.
    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let current = self.cycler.current();

        let slide = Image::new(self.slides[current].clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT));

        let surface = mouse_area(slide)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_move(Message::Moved)
            .on_enter(Message::Entered)
            .on_exit(Message::Exited);

        let mut stack = Stack::new().push(surface);

        if self.slides.len() > 1 {
            stack = stack
                .push(arrow_zone("◀", Horizontal::Left, Message::Previous))
                .push(arrow_zone("▶", Horizontal::Right, Message::Next))
                .push(self.indicator_row(current));
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .into()
    }

    fn indicator_row(&self, current: usize) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for index in 0..self.slides.len() {
            row = row.push(
                button("")
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT))
                    .style(styles::dot(index == current))
                    .on_press(Message::IndicatorPressed(index)),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Side-aligned arrow button zone, stacked over the slide.
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

    fn state_with_slides(count: usize, auto_advance: bool) -> State {
        let paths: Vec<PathBuf> = (0..count)
            .map(|i| PathBuf::from(format!("/slides/{i}.jpg")))
            .collect();
        State::new(&paths, auto_advance, Instant::now())
    }

    #[test]
    fn arrow_navigation_moves_and_wraps() {
        let mut state = state_with_slides(3, false);
        let t0 = Instant::now();
        state.handle(Message::Next, t0);
        assert_eq!(state.current(), 1);
        state.handle(Message::Previous, t0 + Duration::from_secs(1));
        assert_eq!(state.current(), 0);
        state.handle(Message::Previous, t0 + Duration::from_secs(2));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn rapid_double_next_is_debounced() {
        let mut state = state_with_slides(5, false);
        let t0 = Instant::now();
        state.handle(Message::Next, t0);
        state.handle(Message::Next, t0 + Duration::from_millis(100));
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn indicator_press_jumps_to_slide() {
        let mut state = state_with_slides(5, false);
        state.handle(Message::IndicatorPressed(3), Instant::now());
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn tick_auto_advances_when_enabled() {
        let mut state = state_with_slides(3, true);
        let t0 = Instant::now();
        state.tick(t0 + HERO_INTERVAL);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn hover_pauses_and_resumes_auto_advance() {
        let mut state = state_with_slides(3, true);
        let t0 = Instant::now();
        state.handle(Message::Entered, t0);
        state.tick(t0 + HERO_INTERVAL + HERO_INTERVAL);
        assert_eq!(state.current(), 0);
        state.handle(Message::Exited, t0);
        state.tick(t0 + HERO_INTERVAL);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn swipe_left_advances() {
        let mut state = state_with_slides(3, false);
        let t0 = Instant::now();
        state.handle(Message::Moved(Point::new(200.0, 100.0)), t0);
        state.handle(Message::Pressed, t0);
        state.handle(Message::Moved(Point::new(120.0, 100.0)), t0);
        state.handle(Message::Released, t0);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn short_drag_does_not_navigate() {
        let mut state = state_with_slides(3, false);
        let t0 = Instant::now();
        state.handle(Message::Moved(Point::new(200.0, 100.0)), t0);
        state.handle(Message::Pressed, t0);
        state.handle(Message::Moved(Point::new(180.0, 100.0)), t0);
        state.handle(Message::Released, t0);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn disabling_auto_advance_stops_the_timer() {
        let mut state = state_with_slides(3, true);
        let t0 = Instant::now();
        state.set_auto_advance(false, t0);
        state.tick(t0 + HERO_INTERVAL);
        assert_eq!(state.current(), 0);
    }
}

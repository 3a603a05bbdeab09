// SPDX-License-Identifier: MPL-2.0
//! Circular index state machine shared by the hero slideshow, the
//! testimonial carousel, and the lightbox.
//!
//! A [`Cycler`] owns the current index of a fixed-size, circularly ordered
//! collection and mediates every transition between items, whatever the
//! trigger: auto-advance timer, prev/next buttons, indicator dots, keyboard,
//! or swipe gesture. All operations take an explicit `now` instant so the
//! machine can be driven by a simulated clock in tests.

use crate::config::DEFAULT_SWIPE_THRESHOLD;
use iced::Point;
use std::time::{Duration, Instant};

/// Direction of a committed transition, forwarded to the host so it can
/// animate the change accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the following item.
    Next,
    /// Towards the preceding item.
    Previous,
}

/// Per-instance timing and gesture configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclerConfig {
    /// Auto-advance interval; `None` disables the timer entirely (lightbox).
    pub interval: Option<Duration>,
    /// How long index-changing operations stay locked out after a commit.
    /// Must cover the host's visual transition or frames will tear.
    pub settle: Duration,
    /// Extra delay before auto-advance resumes after a gesture ends.
    pub resume_grace: Duration,
    /// Minimum horizontal displacement for a swipe to navigate.
    pub swipe_threshold: f32,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            interval: None,
            settle: Duration::ZERO,
            resume_grace: Duration::ZERO,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Outcome of a cycler operation, for the host to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed (operation dropped or timer not due).
    None,
    /// A new index was committed.
    Show {
        index: usize,
        previous: usize,
        direction: Direction,
    },
}

/// In-flight gesture coordinates, discarded once the gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    start: Point,
    last: Point,
}

/// Bounded circular index state machine with re-entrancy guarding and
/// auto-advance suspension during user interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycler {
    item_count: usize,
    current: usize,
    /// While `now` is before this instant a transition is in flight and
    /// further index changes are dropped.
    settle_until: Option<Instant>,
    /// Next auto-advance deadline; `None` when the timer is stopped.
    next_fire: Option<Instant>,
    gesture: Option<Gesture>,
    config: CyclerConfig,
}

impl Cycler {
    /// Creates a cycler over `item_count` items starting at index 0.
    ///
    /// An empty collection is treated as a single item so navigation stays
    /// well-defined; hosts are expected to skip construction entirely when
    /// they have nothing to show.
    #[must_use]
    pub fn new(item_count: usize, config: CyclerConfig) -> Self {
        Self {
            item_count: item_count.max(1),
            current: 0,
            settle_until: None,
            next_fire: None,
            gesture: None,
            config,
        }
    }

    /// Returns the number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Always false: the collection size is clamped to at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the current index, always in `[0, len)`.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Checks whether a transition is still settling at `now`.
    #[must_use]
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.settle_until.is_some_and(|until| now < until)
    }

    /// Checks whether the auto-advance timer is scheduled.
    #[must_use]
    pub fn auto_advance_active(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Navigates to `target`, normalized into range with euclidean
    /// remainder so `go_to(-1)` on a 5-item cycler lands on index 4.
    ///
    /// Dropped (returns [`Effect::None`]) while a previous transition is
    /// settling. The reported direction is derived from the index order,
    /// matching how indicator dots animate.
    pub fn go_to(&mut self, target: isize, now: Instant) -> Effect {
        let index = self.normalize(target);
        let direction = if index > self.current {
            Direction::Next
        } else {
            Direction::Previous
        };
        self.commit(index, direction, now)
    }

    /// Advances to the following item, wrapping at the end.
    pub fn next(&mut self, now: Instant) -> Effect {
        let index = self.normalize(self.current as isize + 1);
        self.commit(index, Direction::Next, now)
    }

    /// Steps back to the preceding item, wrapping at the start.
    pub fn prev(&mut self, now: Instant) -> Effect {
        let index = self.normalize(self.current as isize - 1);
        self.commit(index, Direction::Previous, now)
    }

    /// Schedules (or reschedules) the auto-advance timer. Idempotent: any
    /// pending deadline is replaced, so two calls leave one timer. No-op
    /// for instances configured without an interval.
    pub fn start_auto_advance(&mut self, now: Instant) {
        self.next_fire = self.config.interval.map(|interval| now + interval);
    }

    /// Clears the auto-advance timer; safe to call when already stopped.
    pub fn stop_auto_advance(&mut self) {
        self.next_fire = None;
    }

    /// Fires the auto-advance if its deadline has passed.
    ///
    /// A tick that lands while a transition is settling skips the advance
    /// and simply waits for the next interval. Rescheduling is relative to
    /// the observed `now` so a stalled event loop cannot queue a burst of
    /// catch-up advances.
    pub fn tick(&mut self, now: Instant) -> Effect {
        let Some(deadline) = self.next_fire else {
            return Effect::None;
        };
        if now < deadline {
            return Effect::None;
        }
        self.next_fire = self.config.interval.map(|interval| now + interval);
        if self.is_transitioning(now) {
            return Effect::None;
        }
        self.next(now)
    }

    /// Records the origin of a touch/drag sequence and suspends the
    /// auto-advance while the user is interacting.
    pub fn gesture_start(&mut self, position: Point) {
        self.gesture = Some(Gesture {
            start: position,
            last: position,
        });
        self.stop_auto_advance();
    }

    /// Tracks gesture movement. Returns true when horizontal displacement
    /// dominates vertical, in which case the host should capture the
    /// pointer instead of letting the surrounding page scroll.
    pub fn gesture_move(&mut self, position: Point) -> bool {
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        gesture.last = position;
        let dx = (position.x - gesture.start.x).abs();
        let dy = (position.y - gesture.start.y).abs();
        dx > dy
    }

    /// Resolves the gesture: navigates when the horizontal displacement
    /// exceeds the threshold and dominates the vertical one, otherwise
    /// does nothing. `start.x > end.x` (finger moved left) means "next".
    /// Auto-advance always restarts afterwards, delayed by the configured
    /// resume grace.
    pub fn gesture_end(&mut self, position: Point, now: Instant) -> Effect {
        let Some(gesture) = self.gesture.take() else {
            return Effect::None;
        };
        let dx = gesture.start.x - position.x;
        let dy = (gesture.start.y - position.y).abs();

        let effect = if dx.abs() > self.config.swipe_threshold && dx.abs() > dy {
            if dx > 0.0 {
                self.next(now)
            } else {
                self.prev(now)
            }
        } else {
            Effect::None
        };

        self.next_fire = self
            .config
            .interval
            .map(|interval| now + self.config.resume_grace + interval);
        effect
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    fn normalize(&self, target: isize) -> usize {
        // rem_euclid keeps negative targets in range: -1 wraps to len - 1.
        target.rem_euclid(self.item_count as isize) as usize
    }

    fn commit(&mut self, index: usize, direction: Direction, now: Instant) -> Effect {
        if self.is_transitioning(now) {
            return Effect::None;
        }
        self.settle_until = Some(now + self.config.settle);
        let previous = self.current;
        self.current = index;
        Effect::Show {
            index,
            previous,
            direction,
        }
    }
}

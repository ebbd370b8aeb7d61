// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll boundaries: turn a stream of scroll/move events into start and end.
//!
//! The first event of a burst reports `scrollstart`; `scrollend` follows
//! [`SCROLL_DEBOUNCE`] after the last event of the burst. Internally this is a
//! [`Debounce`] with [`EdgePolicy::Both`] whose trailing deadline is kept in a
//! caller-provided [`TimerQueue`].
//!
//! ```
//! use understory_gesture::scroll::ScrollState;
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let mut scroll = ScrollState::new();
//!
//! assert!(scroll.on_scroll(0, &mut timers, ()));   // scrollstart
//! assert!(!scroll.on_scroll(30, &mut timers, ()));
//! assert_eq!(timers.next_deadline(), Some(80));
//!
//! let expired = timers.pop_due(80).unwrap();
//! assert!(scroll.fire(expired.id, expired.deadline)); // scrollend
//! assert!(!scroll.is_scrolling());
//! ```

use understory_timing::{Debounce, EdgePolicy, TimerId, TimerQueue};

use crate::thresholds::SCROLL_DEBOUNCE;

/// Per-element scroll boundary detector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollState {
    debounce: Debounce,
    timer: Option<TimerId>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// Creates an idle detector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debounce: Debounce::new(SCROLL_DEBOUNCE, EdgePolicy::Both),
            timer: None,
        }
    }

    /// Returns `true` between `scrollstart` and `scrollend`.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.debounce.is_active()
    }

    /// Returns the pending `scrollend` timer.
    #[must_use]
    pub const fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Records a scroll/move event at `now` and pushes the end timer out.
    ///
    /// Returns `true` if this event starts a burst (`scrollstart`).
    pub fn on_scroll<T>(&mut self, now: u64, timers: &mut TimerQueue<T>, token: T) -> bool {
        let started = self.debounce.trigger(now);
        if let Some(deadline) = self.debounce.deadline() {
            match self.timer {
                Some(timer) if timers.reschedule(timer, deadline) => {}
                _ => self.timer = Some(timers.schedule(deadline, token)),
            }
        }
        started
    }

    /// Delivers an expired timer. Returns `true` if the burst ended (`scrollend`).
    ///
    /// Timers other than the current one are ignored.
    pub fn fire(&mut self, timer: TimerId, now: u64) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        self.timer = None;
        self.debounce.poll(now)
    }

    /// Abandons the current burst without reporting `scrollend`.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
        self.debounce.cancel();
    }
}

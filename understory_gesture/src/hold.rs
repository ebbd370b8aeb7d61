// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-hold recognition: a press held still for [`TAPHOLD_THRESHOLD`].
//!
//! Each session owns the handle of its own threshold timer in a caller-provided
//! [`TimerQueue`]. Starting a new session or releasing the pointer cancels that
//! timer, and [`HoldState::fire`] ignores any timer id other than the current
//! session's, so a superseded timer can never confirm a hold.
//!
//! The tremor check runs once, when the timer fires, against the latest sample
//! fed through [`HoldState::track`]. Drift inside the tolerance is accepted;
//! drags are rejected.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::hold::{HoldOutcome, HoldState};
//! use understory_gesture::pointer::{normalize, Phase, RawPointer};
//! use understory_gesture::Capabilities;
//! use understory_timing::TimerQueue;
//!
//! let caps = Capabilities::MOUSE;
//! let mut timers = TimerQueue::new();
//! let mut hold = HoldState::new();
//!
//! let down = RawPointer::from_mouse(1_u32, Point::new(10.0, 10.0));
//! hold.start(&normalize(&down, Phase::Start, caps, 0).unwrap(), &mut timers, ());
//!
//! let expired = timers.pop_due(750).unwrap();
//! match hold.fire(expired.id, expired.deadline) {
//!     HoldOutcome::Hold(record) => assert_eq!(record.duration, 750),
//!     other => panic!("expected a hold, got {other:?}"),
//! }
//! assert!(hold.is_held());
//! ```

use understory_timing::{TimerId, TimerQueue};

use crate::pointer::NormalizedPointer;
use crate::thresholds::{TAPHOLD_THRESHOLD, within_tremor};
use crate::types::TapHoldRecord;

/// Why an expired hold timer did not produce a tap-hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoldRejection {
    /// The pointer ended up over a different element.
    TargetChanged,
    /// The pointer moved more than the tremor tolerance.
    Moved,
}

/// Result of delivering a timer to [`HoldState::fire`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HoldOutcome<K> {
    /// The hold is confirmed.
    Hold(TapHoldRecord<K>),
    /// The session ended without a hold.
    Rejected(HoldRejection),
    /// The timer does not belong to the current session.
    Stale,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct HoldSession<K> {
    start: NormalizedPointer<K>,
    latest: NormalizedPointer<K>,
    timer: TimerId,
}

/// Per-element tap-hold state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoldState<K> {
    session: Option<HoldSession<K>>,
    held: bool,
}

impl<K> Default for HoldState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HoldState<K> {
    /// Creates an idle recognizer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: None,
            held: false,
        }
    }

    /// Returns `true` while a press is waiting for its threshold timer.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` once a hold has been confirmed, until the next press or
    /// release.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Returns the pending session's timer.
    #[must_use]
    pub fn timer(&self) -> Option<TimerId> {
        self.session.as_ref().map(|s| s.timer)
    }

    /// Ends the pending session and cancels its timer.
    ///
    /// Returns `true` if a pending timer was cancelled.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) -> bool {
        match self.session.take() {
            Some(session) => timers.cancel(session.timer).is_some(),
            None => false,
        }
    }

    /// Handles a release: clears the held flag and cancels any pending timer.
    ///
    /// Returns `true` if the release came before the threshold.
    pub fn end<T>(&mut self, timers: &mut TimerQueue<T>) -> bool {
        self.held = false;
        self.cancel(timers)
    }
}

impl<K: Copy + Eq> HoldState<K> {
    /// Starts a session for `press` and schedules its threshold timer.
    ///
    /// Any pending session is replaced and its timer cancelled.
    pub fn start<T>(
        &mut self,
        press: &NormalizedPointer<K>,
        timers: &mut TimerQueue<T>,
        token: T,
    ) -> TimerId {
        self.cancel(timers);
        self.held = false;
        let deadline = press.point.timestamp.saturating_add(TAPHOLD_THRESHOLD);
        let timer = timers.schedule(deadline, token);
        self.session = Some(HoldSession {
            start: *press,
            latest: *press,
            timer,
        });
        timer
    }

    /// Records the latest pointer sample of the pending session.
    pub fn track(&mut self, sample: &NormalizedPointer<K>) {
        if let Some(session) = &mut self.session {
            session.latest = *sample;
        }
    }

    /// Delivers an expired timer at time `now`.
    pub fn fire(&mut self, timer: TimerId, now: u64) -> HoldOutcome<K> {
        let Some(session) = self.session.take_if(|s| s.timer == timer) else {
            return HoldOutcome::Stale;
        };
        let HoldSession { start, latest, .. } = session;
        if latest.point.target != start.point.target {
            return HoldOutcome::Rejected(HoldRejection::TargetChanged);
        }
        if !within_tremor(start.page, latest.page) {
            return HoldOutcome::Rejected(HoldRejection::Moved);
        }
        self.held = true;
        let start_time = start.point.timestamp;
        HoldOutcome::Hold(TapHoldRecord {
            start_time,
            end_time: now,
            start_position: start.point.position,
            start_offset: start.point.offset,
            end_position: latest.point.position,
            end_offset: latest.point.offset,
            duration: now.saturating_sub(start_time),
            target: start.point.target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TouchPoint;
    use kurbo::Point;

    fn sample(target: u32, x: f64, y: f64, t: u64) -> NormalizedPointer<u32> {
        let p = Point::new(x, y);
        NormalizedPointer {
            point: TouchPoint {
                position: p,
                offset: p,
                timestamp: t,
                target,
            },
            page: p,
        }
    }

    #[test]
    fn still_press_confirms_hold() {
        let mut timers = TimerQueue::new();
        let mut hold = HoldState::new();
        let id = hold.start(&sample(1, 5.0, 5.0, 100), &mut timers, ());
        assert_eq!(timers.deadline(id), Some(850));

        hold.track(&sample(1, 8.0, 3.0, 400));
        let out = hold.fire(id, 850);
        let HoldOutcome::Hold(record) = out else {
            panic!("expected hold, got {out:?}");
        };
        assert_eq!(record.start_time, 100);
        assert_eq!(record.end_time, 850);
        assert_eq!(record.duration, 750);
        assert_eq!(record.start_position, Point::new(5.0, 5.0));
        assert_eq!(record.end_position, Point::new(8.0, 3.0));
        assert_eq!(record.target, 1);
        assert!(hold.is_held());
        assert!(!hold.is_pending());
    }

    #[test]
    fn release_cancels_timer() {
        let mut timers = TimerQueue::new();
        let mut hold = HoldState::new();
        let id = hold.start(&sample(1, 0.0, 0.0, 0), &mut timers, ());
        assert!(hold.end(&mut timers));
        assert!(!timers.contains(id));
        assert_eq!(hold.fire(id, 750), HoldOutcome::Stale);
    }

    #[test]
    fn drag_is_rejected_at_fire_time() {
        let mut timers = TimerQueue::new();
        let mut hold = HoldState::new();
        let id = hold.start(&sample(1, 0.0, 0.0, 0), &mut timers, ());
        hold.track(&sample(1, 30.0, 0.0, 300));
        assert_eq!(
            hold.fire(id, 750),
            HoldOutcome::Rejected(HoldRejection::Moved)
        );
        assert!(!hold.is_held());
    }

    #[test]
    fn drifting_onto_another_target_is_rejected() {
        let mut timers = TimerQueue::new();
        let mut hold = HoldState::new();
        let id = hold.start(&sample(1, 0.0, 0.0, 0), &mut timers, ());
        hold.track(&sample(2, 1.0, 1.0, 300));
        assert_eq!(
            hold.fire(id, 750),
            HoldOutcome::Rejected(HoldRejection::TargetChanged)
        );
    }

    #[test]
    fn restart_supersedes_previous_timer() {
        let mut timers = TimerQueue::new();
        let mut hold = HoldState::new();
        let first = hold.start(&sample(1, 0.0, 0.0, 0), &mut timers, ());
        let second = hold.start(&sample(1, 0.0, 0.0, 500), &mut timers, ());
        assert!(!timers.contains(first));
        assert_eq!(timers.len(), 1);
        assert_eq!(hold.fire(first, 750), HoldOutcome::Stale);
        // The stale delivery must not disturb the live session.
        assert_eq!(hold.timer(), Some(second));
        assert!(matches!(hold.fire(second, 1_250), HoldOutcome::Hold(_)));
    }

    #[test]
    fn release_clears_held_flag() {
        let mut timers = TimerQueue::new();
        let mut hold = HoldState::new();
        let id = hold.start(&sample(1, 0.0, 0.0, 0), &mut timers, ());
        assert!(matches!(hold.fire(id, 750), HoldOutcome::Hold(_)));
        assert!(hold.is_held());
        assert!(!hold.end(&mut timers));
        assert!(!hold.is_held());
    }

    #[test]
    fn track_without_session_is_ignored() {
        let mut hold = HoldState::<u32>::new();
        hold.track(&sample(1, 0.0, 0.0, 0));
        assert!(!hold.is_pending());
    }
}

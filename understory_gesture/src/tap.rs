// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition: a quick press and release on the same element.
//!
//! A tap requires, at release time:
//! - the release target to equal the press target,
//! - less than [`TAPHOLD_THRESHOLD`] between press and release,
//! - at most [`TAP_TREMOR`](crate::thresholds::TAP_TREMOR) of movement on each axis.
//!
//! Resolution is synchronous; no timer is involved.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pointer::{normalize, Phase, RawPointer};
//! use understory_gesture::tap::{TapOutcome, TapState};
//! use understory_gesture::Capabilities;
//!
//! let caps = Capabilities::MOUSE;
//! let mut tap = TapState::new();
//!
//! let down = RawPointer::from_mouse(1_u32, Point::new(10.0, 10.0));
//! tap.start(&normalize(&down, Phase::Start, caps, 0).unwrap());
//!
//! let up = RawPointer::from_mouse(1_u32, Point::new(14.0, 8.0));
//! let outcome = tap.end(&normalize(&up, Phase::End, caps, 120).unwrap());
//! assert!(matches!(outcome, TapOutcome::Tap(p) if p.timestamp == 120));
//! assert!(!tap.is_armed());
//! ```

use kurbo::Point;

use crate::pointer::NormalizedPointer;
use crate::thresholds::{TAPHOLD_THRESHOLD, within_tremor};
use crate::types::TouchPoint;

/// Why a release did not produce a tap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapRejection {
    /// Released on a different element than the press.
    TargetChanged,
    /// Held for [`TAPHOLD_THRESHOLD`] or longer.
    TooSlow,
    /// Moved more than the tremor tolerance.
    Moved,
}

/// Result of feeding a release into [`TapState::end`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapOutcome<K> {
    /// A tap, carrying the release sample.
    Tap(TouchPoint<K>),
    /// The press did not qualify.
    Rejected(TapRejection),
    /// No press was armed.
    Idle,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct TapSession<K> {
    origin: K,
    start_page: Point,
    start_time: u64,
}

/// Per-element tap state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapState<K> {
    session: Option<TapSession<K>>,
}

impl<K> Default for TapState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TapState<K> {
    /// Creates an idle recognizer.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Returns `true` between a press and its release.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.session.is_some()
    }

    /// Drops an armed press without resolving it.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

impl<K: Copy + Eq> TapState<K> {
    /// Arms the recognizer with a press.
    ///
    /// A press while already armed replaces the earlier one.
    pub fn start(&mut self, press: &NormalizedPointer<K>) {
        self.session = Some(TapSession {
            origin: press.point.target,
            start_page: press.page,
            start_time: press.point.timestamp,
        });
    }

    /// Resolves the armed press against a release and returns to idle.
    pub fn end(&mut self, release: &NormalizedPointer<K>) -> TapOutcome<K> {
        let Some(session) = self.session.take() else {
            return TapOutcome::Idle;
        };
        let elapsed = release.point.timestamp.saturating_sub(session.start_time);
        if release.point.target != session.origin {
            TapOutcome::Rejected(TapRejection::TargetChanged)
        } else if elapsed >= TAPHOLD_THRESHOLD {
            TapOutcome::Rejected(TapRejection::TooSlow)
        } else if !within_tremor(session.start_page, release.page) {
            TapOutcome::Rejected(TapRejection::Moved)
        } else {
            TapOutcome::Tap(release.point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn quick_still_release_is_a_tap() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        let out = tap.end(&sample(1, 10.0, -10.0, 749));
        assert_eq!(out, TapOutcome::Tap(sample(1, 10.0, -10.0, 749).point));
    }

    #[test]
    fn threshold_duration_is_too_slow() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        assert_eq!(
            tap.end(&sample(1, 0.0, 0.0, 750)),
            TapOutcome::Rejected(TapRejection::TooSlow)
        );
    }

    #[test]
    fn different_target_is_rejected() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        assert_eq!(
            tap.end(&sample(2, 0.0, 0.0, 10)),
            TapOutcome::Rejected(TapRejection::TargetChanged)
        );
    }

    #[test]
    fn movement_beyond_tremor_is_rejected() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        assert_eq!(
            tap.end(&sample(1, 0.0, 11.0, 10)),
            TapOutcome::Rejected(TapRejection::Moved)
        );
    }

    #[test]
    fn release_without_press_is_idle() {
        let mut tap = TapState::<u32>::new();
        assert_eq!(tap.end(&sample(1, 0.0, 0.0, 0)), TapOutcome::Idle);
    }

    #[test]
    fn one_tap_per_press() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        assert!(matches!(tap.end(&sample(1, 0.0, 0.0, 10)), TapOutcome::Tap(_)));
        assert_eq!(tap.end(&sample(1, 0.0, 0.0, 20)), TapOutcome::Idle);
    }

    #[test]
    fn second_press_overwrites_first() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        tap.start(&sample(1, 100.0, 100.0, 700));
        // Measured against the second press: 100ms, no movement.
        assert!(matches!(
            tap.end(&sample(1, 100.0, 100.0, 800)),
            TapOutcome::Tap(_)
        ));
    }

    #[test]
    fn cancel_disarms() {
        let mut tap = TapState::new();
        tap.start(&sample(1, 0.0, 0.0, 0));
        tap.cancel();
        assert!(!tap.is_armed());
        assert_eq!(tap.end(&sample(1, 0.0, 0.0, 10)), TapOutcome::Idle);
    }
}

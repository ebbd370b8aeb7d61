// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttle: at most one emission per window.

use crate::EdgePolicy;

/// Rate-limits events to at most one emission per `window` milliseconds.
///
/// With a leading policy, an event arriving while the window is open passes
/// through immediately. With a trailing policy, events inside a closed window
/// promise one deferred emission at the window boundary, so the last state of
/// a burst is never dropped. A deferred emission starts a new window, just like
/// an immediate one.
///
/// ```
/// use understory_timing::{EdgePolicy, Throttle};
///
/// let mut t = Throttle::new(250, EdgePolicy::Both);
/// let immediate = (0..10).filter(|i| t.trigger(i * 10)).count();
/// assert_eq!(immediate, 1);
/// assert_eq!(t.deadline(), Some(250));
/// assert!(t.poll(250));
/// assert_eq!(t.deadline(), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Throttle {
    window: u64,
    policy: EdgePolicy,
    last_fire: Option<u64>,
    deadline: Option<u64>,
}

impl Throttle {
    /// Creates a throttle whose window is open.
    #[must_use]
    pub const fn new(window: u64, policy: EdgePolicy) -> Self {
        Self {
            window,
            policy,
            last_fire: None,
            deadline: None,
        }
    }

    /// Returns the window length in milliseconds.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.window
    }

    /// Returns the edge policy.
    #[must_use]
    pub const fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Records an event at `now`.
    ///
    /// Returns `true` if the event should be emitted immediately. Otherwise a
    /// deferred emission may have been promised; see [`deadline`](Self::deadline).
    pub fn trigger(&mut self, now: u64) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        match self.last_fire {
            Some(last) if now.saturating_sub(last) < self.window => {
                if self.policy.fires_trailing() {
                    self.deadline = Some(last.saturating_add(self.window));
                }
                false
            }
            _ if self.policy.fires_leading() => {
                self.last_fire = Some(now);
                true
            }
            _ => {
                self.deadline = Some(now.saturating_add(self.window));
                false
            }
        }
    }

    /// Delivers the deferred emission if its deadline has passed.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.last_fire = Some(deadline);
                true
            }
            _ => false,
        }
    }

    /// Returns the time of the promised deferred emission.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns the time of the last emission, immediate or deferred.
    #[must_use]
    pub const fn last_fire(&self) -> Option<u64> {
        self.last_fire
    }

    /// Drops a promised deferred emission.
    ///
    /// Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Forgets all history; the next event starts a fresh window.
    pub fn reset(&mut self) {
        self.last_fire = None;
        self.deadline = None;
    }
}

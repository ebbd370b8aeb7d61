// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce: collapse a burst of events into its edges.

use crate::EdgePolicy;

/// Collapses a burst of events into a leading and/or trailing edge.
///
/// A burst starts with the first [`trigger`](Self::trigger) while idle and
/// ends once `window` milliseconds pass without another trigger. The caller
/// arms a timer for [`deadline`](Self::deadline) and calls
/// [`poll`](Self::poll) when it expires.
///
/// ```
/// use understory_timing::{Debounce, EdgePolicy};
///
/// let mut d = Debounce::new(50, EdgePolicy::Trailing);
/// assert!(!d.trigger(0));
/// assert!(!d.trigger(30));
/// assert!(!d.poll(60)); // 30 + 50 not reached yet
/// assert!(d.poll(80));
/// assert!(!d.is_active());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    window: u64,
    policy: EdgePolicy,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates an idle debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: u64, policy: EdgePolicy) -> Self {
        Self {
            window,
            policy,
            deadline: None,
        }
    }

    /// Returns the quiet window in milliseconds.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.window
    }

    /// Returns the edge policy.
    #[must_use]
    pub const fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Records an event at `now` and pushes the trailing deadline out.
    ///
    /// Returns `true` if this event is the leading edge of a burst and the
    /// policy reports leading edges.
    pub fn trigger(&mut self, now: u64) -> bool {
        let leading = self.deadline.is_none();
        self.deadline = Some(now.saturating_add(self.window));
        leading && self.policy.fires_leading()
    }

    /// Settles the burst if its deadline has passed.
    ///
    /// Returns `true` if the burst settled and the policy reports trailing
    /// edges. Polling before the deadline or while idle does nothing.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.policy.fires_trailing()
            }
            _ => false,
        }
    }

    /// Returns the time at which the current burst settles.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a burst is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Abandons the current burst without reporting a trailing edge.
    ///
    /// Returns `true` if a burst was in progress.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_edges_fire_once_per_burst() {
        let mut d = Debounce::new(50, EdgePolicy::Both);
        let mut leading = 0;
        for t in [0, 10, 20, 30, 40] {
            if d.trigger(t) {
                leading += 1;
            }
        }
        assert_eq!(leading, 1);
        assert_eq!(d.deadline(), Some(90));
        assert!(!d.poll(89));
        assert!(d.poll(90));
        assert!(!d.poll(200));
    }

    #[test]
    fn new_burst_after_settle_fires_leading_again() {
        let mut d = Debounce::new(50, EdgePolicy::Both);
        assert!(d.trigger(0));
        assert!(d.poll(50));
        assert!(d.trigger(100));
    }

    #[test]
    fn leading_policy_settles_silently() {
        let mut d = Debounce::new(50, EdgePolicy::Leading);
        assert!(d.trigger(0));
        assert!(d.is_active());
        assert!(!d.poll(50));
        assert!(!d.is_active());
    }

    #[test]
    fn trailing_policy_never_reports_leading() {
        let mut d = Debounce::new(50, EdgePolicy::Trailing);
        assert!(!d.trigger(0));
        assert!(d.poll(50));
    }

    #[test]
    fn cancel_drops_trailing_edge() {
        let mut d = Debounce::new(50, EdgePolicy::Both);
        d.trigger(0);
        assert!(d.cancel());
        assert!(!d.cancel());
        assert!(!d.poll(100));
    }

    #[test]
    fn deadline_saturates() {
        let mut d = Debounce::new(50, EdgePolicy::Trailing);
        d.trigger(u64::MAX - 10);
        assert_eq!(d.deadline(), Some(u64::MAX));
    }
}

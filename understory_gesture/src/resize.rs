// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize throttling: at most one `throttledresize` per [`RESIZE_THROTTLE`].
//!
//! The first resize of a quiet period passes straight through. Resizes inside
//! the window keep only the most recent viewport and promise one deferred
//! emission at the window boundary, so the final geometry of a drag-resize is
//! always delivered.

use understory_timing::{EdgePolicy, Throttle, TimerId, TimerQueue};

use crate::orientation::Viewport;
use crate::thresholds::RESIZE_THROTTLE;

/// Process-wide resize throttle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeThrottle {
    throttle: Throttle,
    timer: Option<TimerId>,
    pending: Option<Viewport>,
}

impl Default for ResizeThrottle {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeThrottle {
    /// Creates a throttle whose window is open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            throttle: Throttle::new(RESIZE_THROTTLE, EdgePolicy::Both),
            timer: None,
            pending: None,
        }
    }

    /// Returns the deferred emission's timer.
    #[must_use]
    pub const fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Returns the viewport the deferred emission will carry.
    #[must_use]
    pub const fn pending(&self) -> Option<&Viewport> {
        self.pending.as_ref()
    }

    /// Records a raw resize at `now`.
    ///
    /// Returns the viewport to emit immediately, or `None` if the resize was
    /// folded into a deferred emission.
    pub fn on_resize<T>(
        &mut self,
        viewport: Viewport,
        now: u64,
        timers: &mut TimerQueue<T>,
        token: T,
    ) -> Option<Viewport> {
        if self.throttle.trigger(now) {
            return Some(viewport);
        }
        self.pending = Some(viewport);
        if let Some(previous) = self.timer.take() {
            timers.cancel(previous);
        }
        if let Some(deadline) = self.throttle.deadline() {
            tracing::trace!(deadline, "deferring throttled resize");
            self.timer = Some(timers.schedule(deadline, token));
        }
        None
    }

    /// Delivers an expired timer, returning the viewport to emit.
    pub fn fire(&mut self, timer: TimerId, now: u64) -> Option<Viewport> {
        if self.timer != Some(timer) {
            return None;
        }
        self.timer = None;
        if self.throttle.poll(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops any deferred emission.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
        self.throttle.cancel();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn burst_emits_first_and_final_viewport() {
        let mut timers = TimerQueue::new();
        let mut resize = ResizeThrottle::new();
        let mut emitted = Vec::new();

        for i in 0..10_u32 {
            let w = 400.0 + f64::from(i) * 40.0;
            if let Some(vp) = resize.on_resize(Viewport::new(w, 400.0), u64::from(i) * 10, &mut timers, ()) {
                emitted.push(vp.width);
            }
        }
        assert_eq!(emitted, [400.0]);
        assert_eq!(timers.len(), 1);

        let e = timers.pop_due(u64::MAX).unwrap();
        assert_eq!(e.deadline, 250);
        let vp = resize.fire(e.id, e.deadline).unwrap();
        assert_eq!(vp.width, 760.0);
        assert!(resize.pending().is_none());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut resize = ResizeThrottle::new();
        resize.on_resize(Viewport::new(1.0, 1.0), 0, &mut timers, ());
        resize.on_resize(Viewport::new(2.0, 1.0), 10, &mut timers, ());
        let first = resize.timer().unwrap();
        resize.on_resize(Viewport::new(3.0, 1.0), 20, &mut timers, ());
        assert_ne!(resize.timer(), Some(first));
        assert!(resize.fire(first, 250).is_none());
        assert_eq!(resize.pending().map(|vp| vp.width), Some(3.0));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut timers = TimerQueue::new();
        let mut resize = ResizeThrottle::new();
        resize.on_resize(Viewport::new(1.0, 1.0), 0, &mut timers, ());
        resize.on_resize(Viewport::new(2.0, 1.0), 10, &mut timers, ());
        resize.cancel(&mut timers);
        assert!(timers.is_empty());
        assert!(resize.pending().is_none());
    }
}

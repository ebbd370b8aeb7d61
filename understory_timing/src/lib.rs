// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI hosts (browsers, winit loops, embedded event pumps) all offer some way to
//! "wake me at time T", but they disagree on how. This crate keeps timer
//! *bookkeeping* out of the host: callers schedule deadlines in a plain
//! [`TimerQueue`], ask it for [`TimerQueue::next_deadline`] to arm whatever
//! wake-up mechanism the host has, and drain expired timers with
//! [`TimerQueue::pop_due`] once the host reports that time has advanced.
//!
//! On top of the queue, two small rate-limiting helpers are provided:
//!
//! - [`Debounce`]: collapse a burst of events into a leading and/or trailing edge.
//! - [`Throttle`]: let at most one event through per window, optionally with a
//!   trailing emission so the final state of a burst is never dropped.
//!
//! Both helpers are pure state machines over timestamps. They report the
//! deadline they need to be woken at; callers own the actual timer handle.
//!
//! Time is expressed as `u64` milliseconds on a caller-chosen monotonic clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let hold = timers.schedule(750, "hold");
//! let _scroll = timers.schedule(50, "scroll-end");
//!
//! assert_eq!(timers.next_deadline(), Some(50));
//!
//! // A release before the hold threshold cancels that timer.
//! assert_eq!(timers.cancel(hold), Some("hold"));
//!
//! let expired = timers.pop_due(100).unwrap();
//! assert_eq!(expired.payload, "scroll-end");
//! assert!(timers.pop_due(1_000).is_none());
//! ```
//!
//! ## Debounce and throttle
//!
//! ```rust
//! use understory_timing::{Debounce, EdgePolicy, Throttle};
//!
//! // Scroll-style debounce: fire on the first event and 50ms after the last.
//! let mut scroll = Debounce::new(50, EdgePolicy::Both);
//! assert!(scroll.trigger(0));
//! assert!(!scroll.trigger(20));
//! assert_eq!(scroll.deadline(), Some(70));
//! assert!(scroll.poll(70));
//!
//! // Resize-style throttle: one emission per 250ms plus a trailing one.
//! let mut resize = Throttle::new(250, EdgePolicy::Both);
//! assert!(resize.trigger(0));
//! assert!(!resize.trigger(10));
//! assert_eq!(resize.deadline(), Some(250));
//! assert!(resize.poll(250));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod edge;
mod queue;
mod throttle;

pub use debounce::Debounce;
pub use edge::EdgePolicy;
pub use queue::{Expired, TimerId, TimerQueue};
pub use throttle::Throttle;

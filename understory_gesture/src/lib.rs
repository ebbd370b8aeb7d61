// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: tap, tap-hold, scroll and orientation gestures from raw input.
//!
//! Mouse and touch hosts report the same physical interaction in different
//! shapes. This crate normalizes both into one pointer sample and runs small
//! recognizers over it, emitting a uniform vocabulary of gesture events:
//!
//! | Event               | Delivered to | Meaning                                           |
//! |---------------------|--------------|---------------------------------------------------|
//! | `tapstart`          | element      | A primary press started.                          |
//! | `tapend`            | element      | The press was released.                           |
//! | `tap`               | element      | Quick (< 750ms), still (≤ 10px) press and release. |
//! | `taphold`           | element      | Still press held for 750ms.                       |
//! | `scrollstart`       | element      | First scroll/move of a burst.                     |
//! | `scrollend`         | element      | 50ms passed without another scroll/move.          |
//! | `orientationchange` | window       | Portrait ↔ landscape.                             |
//! | `throttledresize`   | window       | At most one resize per 250ms, final size kept.    |
//!
//! Modules:
//!
//! - [`pointer`]: the [`PointerInput`](pointer::PointerInput) seam and normalization.
//! - [`tap`], [`hold`], [`scroll`]: per-element recognizers.
//! - [`orientation`], [`resize`]: process-wide window state.
//! - [`hub`]: [`GestureHub`] wires the recognizers to bindings and timers.
//! - [`listeners`]: optional callback registry for hosts without a dispatcher.
//! - [`thresholds`]: the timing and distance constants.
//!
//! ## Time
//!
//! The crate never reads a clock. Every input takes `now` in milliseconds, and
//! timers live in an [`understory_timing::TimerQueue`] owned by the hub. Hosts
//! arm a wake-up for [`GestureHub::next_deadline`] and call
//! [`GestureHub::advance`] when it fires.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::pointer::RawPointer;
//! use understory_gesture::{Capabilities, GestureHub, GestureKind, GestureSet, Viewport};
//!
//! let mut hub: GestureHub<u32, RawPointer<u32>> =
//!     GestureHub::new(Capabilities::MOUSE, &Viewport::new(1280.0, 800.0));
//! hub.bind(7, GestureSet::TAP_HOLD | GestureSet::SCROLL);
//!
//! // Press and keep still: the hold fires once the host advances time.
//! hub.pointer_down(7, &RawPointer::from_mouse(7, Point::new(10.0, 10.0)), 0);
//! assert_eq!(hub.next_deadline(), Some(750));
//! let held = hub.advance(750);
//! assert_eq!(held[0].kind, GestureKind::TapHold);
//! assert_eq!(held[0].hold().map(|r| r.duration), Some(750));
//!
//! // Scroll bursts report their boundaries.
//! let scroll = RawPointer::from_mouse(7, Point::ORIGIN);
//! assert_eq!(hub.scroll(7, &scroll, 1_000)[0].kind, GestureKind::ScrollStart);
//! assert!(hub.scroll(7, &scroll, 1_020).is_empty());
//! assert_eq!(hub.advance(1_070)[0].kind, GestureKind::ScrollEnd);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod event;
pub mod hold;
pub mod hub;
pub mod listeners;
pub mod orientation;
pub mod pointer;
pub mod resize;
pub mod scroll;
pub mod tap;
pub mod thresholds;
pub mod types;

pub use event::{GestureEvent, GestureKind, GesturePayload, GestureSet};
pub use hub::GestureHub;
pub use orientation::{Orientation, Viewport};
pub use types::{Capabilities, EventTarget, TapHoldRecord, TouchPoint};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared gesture data: capabilities, touch points and tap-hold records.

use kurbo::Point;

/// Host capabilities, supplied once when a hub or recognizer is created.
///
/// These are normally derived from feature detection (for example, whether the
/// document exposes touch events). Passing them explicitly keeps recognizers
/// deterministic under test.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Pointer input arrives as touch-point lists rather than flat mouse
    /// coordinates.
    pub touch_capable: bool,
    /// The platform reports orientation angles and fires its own
    /// orientation-change notifications.
    pub native_orientation: bool,
}

impl Capabilities {
    /// Mouse input, no native orientation support.
    pub const MOUSE: Self = Self {
        touch_capable: false,
        native_orientation: false,
    };

    /// Touch input with native orientation support, as on most phones.
    pub const MOBILE: Self = Self {
        touch_capable: true,
        native_orientation: true,
    };
}

/// A normalized pointer sample.
///
/// Built fresh for every accepted raw event and never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint<K> {
    /// Screen coordinates of the contact.
    pub position: Point,
    /// Coordinates relative to the contact target's layout box.
    pub offset: Point,
    /// Host timestamp in milliseconds.
    pub timestamp: u64,
    /// Element the contact landed on.
    pub target: K,
}

/// Payload of a confirmed tap-hold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapHoldRecord<K> {
    /// Time of the initial press.
    pub start_time: u64,
    /// Time the hold was confirmed.
    pub end_time: u64,
    /// Screen position of the initial press.
    pub start_position: Point,
    /// Target-relative position of the initial press.
    pub start_offset: Point,
    /// Screen position when the hold was confirmed.
    pub end_position: Point,
    /// Target-relative position when the hold was confirmed.
    pub end_offset: Point,
    /// `end_time - start_time`.
    pub duration: u64,
    /// Element the hold happened on.
    pub target: K,
}

/// Where a gesture event is delivered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget<K> {
    /// A bound element.
    Element(K),
    /// The top-level window (resize and orientation events).
    Window,
}

impl<K> EventTarget<K> {
    /// Returns the element, if this target is one.
    pub fn element(&self) -> Option<&K> {
        match self {
            Self::Element(k) => Some(k),
            Self::Window => None,
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic gesture events.
//!
//! Every emission is a fresh [`GestureEvent`] built by one of the constructors
//! below. The raw event that caused it is cloned into
//! [`original`](GestureEvent::original) and never modified.

use crate::orientation::{Orientation, Viewport};
use crate::types::{EventTarget, TapHoldRecord, TouchPoint};

/// The kinds of gesture event this crate emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// A primary press started.
    TapStart,
    /// A press was released.
    TapEnd,
    /// A quick, still press and release.
    Tap,
    /// A still press held past the threshold.
    TapHold,
    /// The first scroll/move event of a burst.
    ScrollStart,
    /// A burst of scroll/move events settled.
    ScrollEnd,
    /// The viewport switched between portrait and landscape.
    OrientationChange,
    /// A rate-limited resize.
    ThrottledResize,
}

impl GestureKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::TapStart,
        Self::TapEnd,
        Self::Tap,
        Self::TapHold,
        Self::ScrollStart,
        Self::ScrollEnd,
        Self::OrientationChange,
        Self::ThrottledResize,
    ];

    /// Returns the conventional DOM event name, such as `"taphold"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TapStart => "tapstart",
            Self::TapEnd => "tapend",
            Self::Tap => "tap",
            Self::TapHold => "taphold",
            Self::ScrollStart => "scrollstart",
            Self::ScrollEnd => "scrollend",
            Self::OrientationChange => "orientationchange",
            Self::ThrottledResize => "throttledresize",
        }
    }

    /// Parses a DOM event name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Returns `true` for kinds delivered to the window rather than an element.
    #[must_use]
    pub const fn is_window_level(self) -> bool {
        matches!(self, Self::OrientationChange | Self::ThrottledResize)
    }
}

bitflags::bitflags! {
    /// A set of gesture kinds an element is bound to.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct GestureSet: u8 {
        /// `tapstart`.
        const TAP_START = 1 << 0;
        /// `tapend`.
        const TAP_END = 1 << 1;
        /// `tap`.
        const TAP = 1 << 2;
        /// `taphold`.
        const TAP_HOLD = 1 << 3;
        /// `scrollstart`.
        const SCROLL_START = 1 << 4;
        /// `scrollend`.
        const SCROLL_END = 1 << 5;
        /// `orientationchange`.
        const ORIENTATION_CHANGE = 1 << 6;
        /// `throttledresize`.
        const THROTTLED_RESIZE = 1 << 7;

        /// Both scroll boundaries.
        const SCROLL = Self::SCROLL_START.bits() | Self::SCROLL_END.bits();
        /// Every element-level kind.
        const ELEMENT = Self::TAP_START.bits()
            | Self::TAP_END.bits()
            | Self::TAP.bits()
            | Self::TAP_HOLD.bits()
            | Self::SCROLL.bits();
    }
}

impl From<GestureKind> for GestureSet {
    fn from(kind: GestureKind) -> Self {
        match kind {
            GestureKind::TapStart => Self::TAP_START,
            GestureKind::TapEnd => Self::TAP_END,
            GestureKind::Tap => Self::TAP,
            GestureKind::TapHold => Self::TAP_HOLD,
            GestureKind::ScrollStart => Self::SCROLL_START,
            GestureKind::ScrollEnd => Self::SCROLL_END,
            GestureKind::OrientationChange => Self::ORIENTATION_CHANGE,
            GestureKind::ThrottledResize => Self::THROTTLED_RESIZE,
        }
    }
}

impl GestureSet {
    /// Returns `true` if `kind` is in the set.
    #[must_use]
    pub fn has(self, kind: GestureKind) -> bool {
        self.contains(kind.into())
    }

    /// Returns `true` if the set needs the scroll boundary detector.
    ///
    /// `scrollend` shares the `scrollstart` machinery, so either kind enables it.
    #[must_use]
    pub fn needs_scroll(self) -> bool {
        self.intersects(Self::SCROLL)
    }
}

/// Auxiliary data attached to a gesture event.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum GesturePayload<K> {
    /// No data (scroll boundaries, manual triggers).
    #[default]
    None,
    /// A pointer sample (`tapstart`, `tapend`, `tap`).
    Touch(TouchPoint<K>),
    /// A confirmed tap-hold.
    Hold(TapHoldRecord<K>),
    /// The new orientation.
    Orientation(Orientation),
    /// The viewport a `throttledresize` settled on.
    Resize(Viewport),
}

/// A synthesized gesture event.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent<K, E> {
    /// What happened.
    pub kind: GestureKind,
    /// Where it is delivered.
    pub target: EventTarget<K>,
    /// The raw event that caused it, if any.
    pub original: Option<E>,
    /// Auxiliary data.
    pub payload: GesturePayload<K>,
}

impl<K, E> GestureEvent<K, E> {
    /// Builds an event for `element`, cloning the raw event it derives from.
    pub fn synthesize(kind: GestureKind, element: K, original: &E, payload: GesturePayload<K>) -> Self
    where
        E: Clone,
    {
        Self {
            kind,
            target: EventTarget::Element(element),
            original: Some(original.clone()),
            payload,
        }
    }

    /// Builds a window-level event with no raw origin.
    pub fn window(kind: GestureKind, payload: GesturePayload<K>) -> Self {
        Self {
            kind,
            target: EventTarget::Window,
            original: None,
            payload,
        }
    }

    /// Builds a manually triggered event: no origin, no payload.
    pub fn manual(kind: GestureKind, target: EventTarget<K>) -> Self {
        Self {
            kind,
            target,
            original: None,
            payload: GesturePayload::None,
        }
    }

    /// Returns the pointer sample, if any.
    pub fn touch(&self) -> Option<&TouchPoint<K>> {
        match &self.payload {
            GesturePayload::Touch(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the tap-hold record, if any.
    pub fn hold(&self) -> Option<&TapHoldRecord<K>> {
        match &self.payload {
            GesturePayload::Hold(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the orientation carried by an `orientationchange`.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.payload {
            GesturePayload::Orientation(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the viewport carried by a `throttledresize`.
    pub fn viewport(&self) -> Option<&Viewport> {
        match &self.payload {
            GesturePayload::Resize(vp) => Some(vp),
            _ => None,
        }
    }
}

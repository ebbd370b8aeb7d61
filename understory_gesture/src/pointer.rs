// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer normalization: turn raw touch or mouse records into [`TouchPoint`]s.
//!
//! Hosts describe their raw events through the [`PointerInput`] trait (or use
//! the ready-made [`RawPointer`] record). [`normalize`] then picks the touch or
//! mouse reading based on [`Capabilities::touch_capable`] alone; it never
//! guesses from the shape of the event.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pointer::{normalize, Phase, RawPointer};
//! use understory_gesture::Capabilities;
//!
//! let down = RawPointer::from_mouse(7_u32, Point::new(20.0, 30.0));
//! let p = normalize(&down, Phase::Start, Capabilities::MOUSE, 1_000).unwrap();
//! assert_eq!(p.point.position, Point::new(20.0, 30.0));
//! assert_eq!(p.point.target, 7);
//!
//! // Secondary-button presses are ignored.
//! let right = down.with_button(Some(3));
//! assert!(normalize(&right, Phase::Start, Capabilities::MOUSE, 1_000).is_none());
//! ```

use kurbo::{Point, Vec2};
use smallvec::{SmallVec, smallvec};

use crate::types::{Capabilities, TouchPoint};

/// Button number reported for the primary (usually left) mouse button.
pub const PRIMARY_BUTTON: u16 = 1;

/// Button number reported when no button is known, as on emulated mouse
/// events. Treated like a missing button.
pub const NO_BUTTON: u16 = 0;

/// Which part of a press/release cycle a raw event belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pointer down / touch start.
    Start,
    /// Pointer or touch movement.
    Move,
    /// Pointer up / touch end.
    End,
}

/// Flat coordinates carried by mouse events.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MouseData {
    /// Screen coordinates.
    pub screen: Point,
    /// Document coordinates.
    pub page: Point,
    /// Coordinates relative to the event target.
    pub offset: Point,
}

impl MouseData {
    /// Uses `p` for screen, page and offset coordinates alike.
    #[must_use]
    pub const fn at(p: Point) -> Self {
        Self {
            screen: p,
            page: p,
            offset: p,
        }
    }
}

/// One entry of a touch-point list.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TouchContact {
    /// Screen coordinates.
    pub screen: Point,
    /// Document coordinates.
    pub page: Point,
    /// Layout offset of the touched element within the document.
    pub target_offset: Vec2,
}

impl TouchContact {
    /// A contact at `p` (screen and page) on an element at the document origin.
    #[must_use]
    pub const fn at(p: Point) -> Self {
        Self {
            screen: p,
            page: p,
            target_offset: Vec2::ZERO,
        }
    }
}

/// Read access to a host's raw pointer event.
///
/// Implement this for the host's own event type so the original event can be
/// carried through to [`GestureEvent`](crate::event::GestureEvent)s untouched.
pub trait PointerInput {
    /// Element identifier type.
    type Target: Copy + Eq;

    /// Element the event was dispatched to.
    fn target(&self) -> Self::Target;

    /// Mouse button number, if the event reports one.
    fn button(&self) -> Option<u16>;

    /// Flat mouse coordinates.
    fn mouse(&self) -> MouseData;

    /// Contacts currently on the surface.
    fn touches(&self) -> &[TouchContact];

    /// Contacts that changed in this event (lifted contacts for touch end).
    fn changed_touches(&self) -> &[TouchContact];
}

/// A plain raw pointer record, for hosts without an event type of their own.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPointer<K> {
    /// Element the event was dispatched to.
    pub target: K,
    /// Mouse button number, if reported.
    pub button: Option<u16>,
    /// Flat mouse coordinates.
    pub mouse: MouseData,
    /// Contacts currently on the surface.
    pub touches: SmallVec<[TouchContact; 1]>,
    /// Contacts that changed in this event.
    pub changed_touches: SmallVec<[TouchContact; 1]>,
}

impl<K> RawPointer<K> {
    /// A primary-button mouse event at `at`.
    pub fn from_mouse(target: K, at: Point) -> Self {
        Self {
            target,
            button: Some(PRIMARY_BUTTON),
            mouse: MouseData::at(at),
            touches: SmallVec::new(),
            changed_touches: SmallVec::new(),
        }
    }

    /// A touch start or move event with a single active contact.
    pub fn from_touch(target: K, contact: TouchContact) -> Self {
        Self {
            target,
            button: None,
            mouse: MouseData::default(),
            touches: smallvec![contact],
            changed_touches: smallvec![contact],
        }
    }

    /// A touch end event where `contact` was lifted.
    pub fn touch_lifted(target: K, contact: TouchContact) -> Self {
        Self {
            target,
            button: None,
            mouse: MouseData::default(),
            touches: SmallVec::new(),
            changed_touches: smallvec![contact],
        }
    }

    /// Replaces the reported button.
    #[must_use]
    pub fn with_button(mut self, button: Option<u16>) -> Self {
        self.button = button;
        self
    }

    /// Replaces the target element.
    #[must_use]
    pub fn with_target(mut self, target: K) -> Self {
        self.target = target;
        self
    }
}

impl<K: Copy + Eq> PointerInput for RawPointer<K> {
    type Target = K;

    fn target(&self) -> K {
        self.target
    }

    fn button(&self) -> Option<u16> {
        self.button
    }

    fn mouse(&self) -> MouseData {
        self.mouse
    }

    fn touches(&self) -> &[TouchContact] {
        &self.touches
    }

    fn changed_touches(&self) -> &[TouchContact] {
        &self.changed_touches
    }
}

/// A [`TouchPoint`] plus the document position used for tremor checks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormalizedPointer<K> {
    /// The canonical sample.
    pub point: TouchPoint<K>,
    /// Document coordinates of the contact.
    pub page: Point,
}

/// Normalizes a raw event into a [`NormalizedPointer`].
///
/// Returns `None` (the event is a no-op for recognizers) when:
/// - a start event reports a button other than [`PRIMARY_BUTTON`] or
///   [`NO_BUTTON`], or
/// - the touch path is selected but the relevant touch list is empty.
///
/// Start and move events read `touches()[0]`; end events read
/// `changed_touches()[0]`.
pub fn normalize<E: PointerInput>(
    event: &E,
    phase: Phase,
    capabilities: Capabilities,
    now: u64,
) -> Option<NormalizedPointer<E::Target>> {
    if phase == Phase::Start
        && let Some(button) = event.button()
        && button != NO_BUTTON
        && button != PRIMARY_BUTTON
    {
        tracing::trace!(button, "ignoring non-primary press");
        return None;
    }

    let (position, offset, page) = if capabilities.touch_capable {
        let list = match phase {
            Phase::Start | Phase::Move => event.touches(),
            Phase::End => event.changed_touches(),
        };
        let Some(contact) = list.first() else {
            tracing::trace!(?phase, "touch event without contacts");
            return None;
        };
        (contact.screen, contact.page - contact.target_offset, contact.page)
    } else {
        let m = event.mouse();
        (m.screen, m.offset, m.page)
    };

    Some(NormalizedPointer {
        point: TouchPoint {
            position,
            offset,
            timestamp: now,
            target: event.target(),
        },
        page,
    })
}

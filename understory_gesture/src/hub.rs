// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture hub: bind elements, feed raw events, collect gesture events.
//!
//! [`GestureHub`] owns one set of recognizers per bound element, the process-wide
//! orientation and resize state, and a single [`TimerQueue`] in which every
//! session keeps its own timer. The host:
//!
//! 1. binds elements with [`GestureHub::bind`],
//! 2. forwards raw pointer, scroll and resize events,
//! 3. arms a wake-up for [`GestureHub::next_deadline`] and calls
//!    [`GestureHub::advance`] when it fires.
//!
//! Every input method first delivers timers that expired before `now`, then
//! handles the event, and returns the emitted events in order.
//!
//! ## Which raw stream drives scrolling
//!
//! On touch hosts, touch moves are the scroll signal and [`GestureHub::scroll`]
//! is ignored (native scroll events arrive late on many mobile browsers). On
//! mouse hosts, [`GestureHub::scroll`] drives the detector and pointer moves do
//! not.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::hub::GestureHub;
//! use understory_gesture::orientation::Viewport;
//! use understory_gesture::pointer::RawPointer;
//! use understory_gesture::{Capabilities, GestureKind, GestureSet};
//!
//! let mut hub: GestureHub<u32, RawPointer<u32>> =
//!     GestureHub::new(Capabilities::MOUSE, &Viewport::new(1024.0, 768.0));
//! hub.bind(1, GestureSet::TAP | GestureSet::TAP_HOLD);
//!
//! let at = Point::new(40.0, 40.0);
//! hub.pointer_down(1, &RawPointer::from_mouse(1, at), 0);
//! let events = hub.pointer_up(1, &RawPointer::from_mouse(1, at), 90);
//!
//! let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
//! assert_eq!(kinds, [GestureKind::Tap]);
//! // The release cancelled the hold timer.
//! assert_eq!(hub.next_deadline(), None);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use understory_timing::{Expired, TimerQueue};

use crate::event::{GestureEvent, GestureKind, GesturePayload, GestureSet};
use crate::hold::{HoldOutcome, HoldState};
use crate::orientation::{Binding, Orientation, OrientationTracker, Viewport};
use crate::pointer::{Phase, PointerInput, normalize};
use crate::resize::ResizeThrottle;
use crate::scroll::ScrollState;
use crate::tap::{TapOutcome, TapState};
use crate::types::{Capabilities, EventTarget};

/// Events emitted by one hub call, in order.
pub type Emitted<K, E> = Vec<GestureEvent<K, E>>;

/// What an expired timer belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Wake<K> {
    Hold(K),
    ScrollEnd(K),
    Resize,
}

/// Recognizer sessions for one bound element.
#[derive(Clone, Debug)]
struct ElementGestures<K, E> {
    kinds: GestureSet,
    tap: TapState<K>,
    hold: HoldState<K>,
    hold_origin: Option<E>,
    scroll: ScrollState,
    scroll_origin: Option<E>,
}

impl<K, E> ElementGestures<K, E> {
    fn new(kinds: GestureSet) -> Self {
        Self {
            kinds,
            tap: TapState::new(),
            hold: HoldState::new(),
            hold_origin: None,
            scroll: ScrollState::new(),
            scroll_origin: None,
        }
    }
}

/// Turns raw pointer, scroll and resize events into gesture events.
///
/// `K` identifies elements; `E` is the host's raw pointer event type, cloned
/// into each emitted [`GestureEvent`].
#[derive(Debug)]
pub struct GestureHub<K, E> {
    capabilities: Capabilities,
    elements: HashMap<K, ElementGestures<K, E>>,
    timers: TimerQueue<Wake<K>>,
    orientation: OrientationTracker,
    resize: ResizeThrottle,
}

impl<K, E> GestureHub<K, E>
where
    K: Copy + Eq + Hash + Debug,
    E: PointerInput<Target = K> + Clone,
{
    /// Creates a hub, calibrating orientation from the initial viewport.
    #[must_use]
    pub fn new(capabilities: Capabilities, initial: &Viewport) -> Self {
        Self {
            capabilities,
            elements: HashMap::new(),
            timers: TimerQueue::new(),
            orientation: OrientationTracker::new(capabilities, initial),
            resize: ResizeThrottle::new(),
        }
    }

    /// Returns the capabilities the hub was created with.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Binds `element` to the element-level kinds in `kinds`, merging with any
    /// existing binding. Window-level kinds are always active and ignored here.
    pub fn bind(&mut self, element: K, kinds: GestureSet) {
        let kinds = kinds & GestureSet::ELEMENT;
        if kinds.is_empty() {
            return;
        }
        self.elements
            .entry(element)
            .and_modify(|el| el.kinds |= kinds)
            .or_insert_with(|| ElementGestures::new(kinds));
    }

    /// Removes `kinds` from `element`'s binding, tearing down recognizers that
    /// are no longer needed and cancelling their timers.
    pub fn unbind(&mut self, element: K, kinds: GestureSet) {
        let Some(el) = self.elements.get_mut(&element) else {
            return;
        };
        el.kinds.remove(kinds);
        if !el.kinds.has(GestureKind::Tap) {
            el.tap.cancel();
        }
        if !el.kinds.has(GestureKind::TapHold) {
            el.hold.cancel(&mut self.timers);
            el.hold_origin = None;
        }
        if !el.kinds.needs_scroll() {
            el.scroll.cancel(&mut self.timers);
            el.scroll_origin = None;
        }
        if el.kinds.is_empty() {
            self.elements.remove(&element);
        }
    }

    /// Returns the kinds `element` is bound to.
    #[must_use]
    pub fn bound(&self, element: K) -> GestureSet {
        self.elements
            .get(&element)
            .map_or(GestureSet::empty(), |el| el.kinds)
    }

    /// Handles a pointer-down / touch-start on `element`.
    pub fn pointer_down(&mut self, element: K, event: &E, now: u64) -> Emitted<K, E> {
        let mut out = self.advance(now);
        let Some(el) = self.elements.get_mut(&element) else {
            return out;
        };
        let Some(press) = normalize(event, Phase::Start, self.capabilities, now) else {
            return out;
        };
        if el.kinds.has(GestureKind::TapStart) {
            emit(
                &mut out,
                GestureEvent::synthesize(
                    GestureKind::TapStart,
                    element,
                    event,
                    GesturePayload::Touch(press.point),
                ),
            );
        }
        if el.kinds.has(GestureKind::Tap) {
            el.tap.start(&press);
        }
        if el.kinds.has(GestureKind::TapHold) {
            el.hold.start(&press, &mut self.timers, Wake::Hold(element));
            el.hold_origin = Some(event.clone());
        }
        out
    }

    /// Handles a pointer / touch move over `element`.
    ///
    /// Moves update the latest position of pending tap-holds and, on touch
    /// hosts, drive the scroll boundary detector. A mouse has a single pointer,
    /// so its moves reach every pending hold, wherever they are reported. A
    /// touch contact stays targeted at the element it started on.
    pub fn pointer_move(&mut self, element: K, event: &E, now: u64) -> Emitted<K, E> {
        let mut out = self.advance(now);
        if let Some(sample) = normalize(event, Phase::Move, self.capabilities, now) {
            if self.capabilities.touch_capable {
                if let Some(el) = self.elements.get_mut(&element) {
                    el.hold.track(&sample);
                }
            } else {
                for el in self.elements.values_mut() {
                    el.hold.track(&sample);
                }
            }
        }
        if self.capabilities.touch_capable
            && let Some(el) = self.elements.get_mut(&element)
            && el.kinds.needs_scroll()
        {
            feed_scroll(el, element, event, now, &mut self.timers, &mut out);
        }
        out
    }

    /// Handles a pointer-up / touch-end on `element`.
    ///
    /// Always cancels the element's pending hold timer. On mouse hosts the
    /// release ends every press, so holds and taps armed on other elements
    /// are dropped too.
    pub fn pointer_up(&mut self, element: K, event: &E, now: u64) -> Emitted<K, E> {
        let mut out = self.advance(now);
        if let Some(el) = self.elements.get_mut(&element) {
            if let Some(release) = normalize(event, Phase::End, self.capabilities, now) {
                if el.kinds.has(GestureKind::TapEnd) {
                    emit(
                        &mut out,
                        GestureEvent::synthesize(
                            GestureKind::TapEnd,
                            element,
                            event,
                            GesturePayload::Touch(release.point),
                        ),
                    );
                }
                match el.tap.end(&release) {
                    TapOutcome::Tap(point) => emit(
                        &mut out,
                        GestureEvent::synthesize(
                            GestureKind::Tap,
                            element,
                            event,
                            GesturePayload::Touch(point),
                        ),
                    ),
                    TapOutcome::Rejected(reason) => {
                        tracing::trace!(?element, ?reason, "tap rejected");
                    }
                    TapOutcome::Idle => {}
                }
            } else {
                el.tap.cancel();
            }
            el.hold.end(&mut self.timers);
            el.hold_origin = None;
        }
        if !self.capabilities.touch_capable {
            self.release_mouse();
        }
        out
    }

    /// Handles a native scroll event on `element`.
    ///
    /// Ignored on touch hosts, where touch moves drive scrolling instead.
    pub fn scroll(&mut self, element: K, event: &E, now: u64) -> Emitted<K, E> {
        let mut out = self.advance(now);
        if self.capabilities.touch_capable {
            return out;
        }
        if let Some(el) = self.elements.get_mut(&element)
            && el.kinds.needs_scroll()
        {
            feed_scroll(el, element, event, now, &mut self.timers, &mut out);
        }
        out
    }

    /// Handles a raw window resize.
    ///
    /// Emits `throttledresize` (immediately or deferred) and, on hosts without
    /// native orientation support, `orientationchange` when the throttled
    /// viewport's orientation differs from the last one.
    pub fn resize(&mut self, viewport: Viewport, now: u64) -> Emitted<K, E> {
        let mut out = self.advance(now);
        if let Some(viewport) = self
            .resize
            .on_resize(viewport, now, &mut self.timers, Wake::Resize)
        {
            self.emit_resize(&viewport, &mut out);
        }
        out
    }

    /// Handles the platform's own orientation notification.
    ///
    /// On native hosts this emits `orientationchange` annotated with the
    /// calibrated orientation of `viewport`. Synthesizing hosts ignore it.
    pub fn native_orientation_change(&mut self, viewport: &Viewport, now: u64) -> Emitted<K, E> {
        let mut out = self.advance(now);
        if let Some(orientation) = self.orientation.on_native_change(viewport) {
            emit(
                &mut out,
                GestureEvent::window(
                    GestureKind::OrientationChange,
                    GesturePayload::Orientation(orientation),
                ),
            );
        }
        out
    }

    /// Delivers every timer that expired at or before `now`.
    pub fn advance(&mut self, now: u64) -> Emitted<K, E> {
        let mut out = Vec::new();
        while let Some(expired) = self.timers.pop_due(now) {
            self.fire(expired, &mut out);
        }
        out
    }

    /// Returns when the host should next call [`advance`](Self::advance).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns the number of live timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns the last known orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation.last()
    }

    /// Returns how orientation changes are delivered on this host.
    #[must_use]
    pub const fn orientation_binding(&self) -> Binding {
        self.orientation.binding()
    }

    /// Returns `true` if `element`'s current press has been confirmed as a hold.
    #[must_use]
    pub fn is_held(&self, element: K) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|el| el.hold.is_held())
    }

    /// Returns `true` while `element` is inside a scroll burst.
    #[must_use]
    pub fn is_scrolling(&self, element: K) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|el| el.scroll.is_scrolling())
    }

    fn release_mouse(&mut self) {
        for (element, el) in &mut self.elements {
            el.tap.cancel();
            if el.hold.end(&mut self.timers) {
                tracing::trace!(?element, "hold ended by release elsewhere");
            }
            el.hold_origin = None;
        }
    }

    fn fire(&mut self, expired: Expired<Wake<K>>, out: &mut Emitted<K, E>) {
        let Expired {
            id,
            deadline,
            payload,
        } = expired;
        match payload {
            Wake::Hold(element) => {
                let Some(el) = self.elements.get_mut(&element) else {
                    return;
                };
                match el.hold.fire(id, deadline) {
                    HoldOutcome::Hold(record) => emit(
                        out,
                        GestureEvent {
                            kind: GestureKind::TapHold,
                            target: EventTarget::Element(element),
                            original: el.hold_origin.take(),
                            payload: GesturePayload::Hold(record),
                        },
                    ),
                    HoldOutcome::Rejected(reason) => {
                        tracing::trace!(?element, ?reason, "hold rejected");
                        el.hold_origin = None;
                    }
                    HoldOutcome::Stale => {}
                }
            }
            Wake::ScrollEnd(element) => {
                let Some(el) = self.elements.get_mut(&element) else {
                    return;
                };
                if el.scroll.fire(id, deadline) {
                    let original = el.scroll_origin.take();
                    if el.kinds.has(GestureKind::ScrollEnd) {
                        emit(
                            out,
                            GestureEvent {
                                kind: GestureKind::ScrollEnd,
                                target: EventTarget::Element(element),
                                original,
                                payload: GesturePayload::None,
                            },
                        );
                    }
                }
            }
            Wake::Resize => {
                if let Some(viewport) = self.resize.fire(id, deadline) {
                    self.emit_resize(&viewport, out);
                }
            }
        }
    }

    fn emit_resize(&mut self, viewport: &Viewport, out: &mut Emitted<K, E>) {
        emit(
            out,
            GestureEvent::window(GestureKind::ThrottledResize, GesturePayload::Resize(*viewport)),
        );
        if let Some(orientation) = self.orientation.on_resize(viewport) {
            emit(
                out,
                GestureEvent::window(
                    GestureKind::OrientationChange,
                    GesturePayload::Orientation(orientation),
                ),
            );
        }
    }
}

fn feed_scroll<K, E>(
    el: &mut ElementGestures<K, E>,
    element: K,
    event: &E,
    now: u64,
    timers: &mut TimerQueue<Wake<K>>,
    out: &mut Emitted<K, E>,
) where
    K: Copy + Debug + PartialEq,
    E: Clone,
{
    if el.scroll.on_scroll(now, timers, Wake::ScrollEnd(element))
        && el.kinds.has(GestureKind::ScrollStart)
    {
        emit(
            out,
            GestureEvent::synthesize(GestureKind::ScrollStart, element, event, GesturePayload::None),
        );
    }
    el.scroll_origin = Some(event.clone());
}

fn emit<K: Debug + PartialEq, E>(out: &mut Emitted<K, E>, event: GestureEvent<K, E>) {
    debug_assert_eq!(
        event.kind.is_window_level(),
        event.target == EventTarget::Window,
        "window-level kinds are delivered to the window only"
    );
    tracing::debug!(kind = event.kind.name(), target = ?event.target, "gesture");
    out.push(event);
}

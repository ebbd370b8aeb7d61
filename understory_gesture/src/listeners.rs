// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registry: callback registration and one-shot manual triggers.
//!
//! [`GestureHub`](crate::hub::GestureHub) only *produces* events. Hosts with
//! their own dispatch system forward them there; hosts without one can use
//! [`Listeners`] to deliver them to per-target, per-kind callbacks.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_gesture::listeners::Listeners;
//! use understory_gesture::{EventTarget, GestureKind};
//!
//! let taps = Rc::new(Cell::new(0));
//! let mut listeners: Listeners<u32, ()> = Listeners::new();
//!
//! let counter = taps.clone();
//! let id = listeners.on(EventTarget::Element(1), GestureKind::Tap, move |_| {
//!     counter.set(counter.get() + 1);
//! });
//!
//! // Manually trigger a tap on element 1.
//! assert_eq!(listeners.trigger(EventTarget::Element(1), GestureKind::Tap), 1);
//! assert_eq!(taps.get(), 1);
//!
//! assert!(listeners.off(id));
//! assert_eq!(listeners.trigger(EventTarget::Element(1), GestureKind::Tap), 0);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::event::{GestureEvent, GestureKind};
use crate::types::EventTarget;

/// Handle returned by [`Listeners::on`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback<K, E> = Box<dyn FnMut(&GestureEvent<K, E>)>;

struct Entry<K, E> {
    id: ListenerId,
    target: EventTarget<K>,
    kind: GestureKind,
    callback: Callback<K, E>,
}

/// Callbacks keyed by event target and gesture kind.
///
/// Callbacks run in registration order.
pub struct Listeners<K, E> {
    entries: Vec<Entry<K, E>>,
    next_id: u64,
}

impl<K, E> fmt::Debug for Listeners<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<K, E> Default for Listeners<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> Listeners<K, E> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes a callback. Returns `false` if it was already removed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}

impl<K: PartialEq, E> Listeners<K, E> {
    /// Registers `callback` for `kind` events delivered to `target`.
    pub fn on(
        &mut self,
        target: EventTarget<K>,
        kind: GestureKind,
        callback: impl FnMut(&GestureEvent<K, E>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            target,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes every callback registered for `target`, returning how many.
    pub fn clear_target(&mut self, target: &EventTarget<K>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.target != *target);
        before - self.entries.len()
    }

    /// Returns `true` if any callback listens for `kind` on `target`.
    #[must_use]
    pub fn is_listening(&self, target: &EventTarget<K>, kind: GestureKind) -> bool {
        self.entries
            .iter()
            .any(|e| e.kind == kind && e.target == *target)
    }

    /// Delivers `event` to its matching callbacks, returning how many ran.
    pub fn dispatch(&mut self, event: &GestureEvent<K, E>) -> usize {
        let mut count = 0;
        for entry in &mut self.entries {
            if entry.kind == event.kind && entry.target == event.target {
                (entry.callback)(event);
                count += 1;
            }
        }
        count
    }

    /// Delivers a batch of events in order, returning the total callback count.
    pub fn dispatch_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a GestureEvent<K, E>>,
    ) -> usize
    where
        K: 'a,
        E: 'a,
    {
        events.into_iter().map(|ev| self.dispatch(ev)).sum()
    }

    /// Triggers `kind` on `target` by hand, with no payload or raw origin.
    pub fn trigger(&mut self, target: EventTarget<K>, kind: GestureKind) -> usize {
        self.dispatch(&GestureEvent::manual(kind, target))
    }
}

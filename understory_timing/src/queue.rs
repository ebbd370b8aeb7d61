// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::vec::Vec;

/// Handle to a scheduled timer.
///
/// Ids are never reused within one [`TimerQueue`], so a stale handle held by a
/// superseded session can never cancel or match a newer timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer that reached its deadline, as returned by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Handle the timer was scheduled under.
    pub id: TimerId,
    /// Deadline the timer was scheduled for.
    pub deadline: u64,
    /// Caller payload.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    deadline: u64,
    id: TimerId,
    payload: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (u64, TimerId) {
        (self.deadline, self.id)
    }
}

/// A queue of pending timers ordered by deadline.
///
/// Timers with equal deadlines expire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by descending (deadline, id) so the next timer to expire is last.
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to expire at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.insert(Entry {
            deadline,
            id,
            payload,
        });
        id
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already expired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Moves a pending timer to a new deadline, keeping its id.
    ///
    /// Returns `false` if the timer is no longer pending.
    pub fn reschedule(&mut self, id: TimerId, deadline: u64) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let mut entry = self.entries.remove(index);
        entry.deadline = deadline;
        self.insert(entry);
        true
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns the deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.index_of(id).map(|index| self.entries[index].deadline)
    }

    /// Returns the earliest pending deadline.
    ///
    /// Hosts arm their wake-up mechanism for this time.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.last().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Call repeatedly until it returns `None` to drain every expired timer in
    /// deadline order.
    pub fn pop_due(&mut self, now: u64) -> Option<Expired<T>> {
        if self.entries.last()?.deadline > now {
            return None;
        }
        let entry = self.entries.pop()?;
        Some(Expired {
            id: entry.id,
            deadline: entry.deadline,
            payload: entry.payload,
        })
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates pending timers in expiry order.
    pub fn iter(&self) -> impl Iterator<Item = (TimerId, u64, &T)> + '_ {
        self.entries
            .iter()
            .rev()
            .map(|e| (e.id, e.deadline, &e.payload))
    }

    fn index_of(&self, id: TimerId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn insert(&mut self, entry: Entry<T>) {
        let key = entry.key();
        let at = self.entries.partition_point(|e| e.key() > key);
        self.entries.insert(at, entry);
    }
}

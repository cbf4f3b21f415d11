// Copyright 2025 the Hover Intent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clocks and cancelable one-shot timers.
//!
//! The controller never sleeps. It asks a [`Scheduler`] for a [`TimerId`] and later
//! receives that id back once it is due. Hosts either call
//! [`HoverIntent::timer_fired`](crate::controller::HoverIntent::timer_fired) from their own
//! timer callbacks, or use the stock [`Timers`] queue and call
//! [`HoverIntent::poll`](crate::controller::HoverIntent::poll) from their event loop.
//!
//! ```
//! use core::time::Duration;
//! use hover_intent::timer::{ManualClock, Scheduler, Timers};
//!
//! let clock = ManualClock::new();
//! let mut timers = Timers::new(clock.clone());
//! let a = timers.schedule(Duration::from_millis(200));
//! let b = timers.schedule(Duration::from_millis(100));
//!
//! clock.advance(Duration::from_millis(150));
//! assert_eq!(timers.next_expired(), Some(b));
//! assert_eq!(timers.next_expired(), None);
//!
//! assert!(timers.cancel(a));
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(timers.next_expired(), None);
//! ```

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;

/// Source of monotonic time, as a duration since an arbitrary origin.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Duration;
}

/// Simulated clock advanced by hand.
///
/// Clones share the same time value, so a test can keep one handle and give another to
/// [`Timers`]. It is single-threaded (`!Send`), matching the event-loop model.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Jump to an absolute time. Moving backwards is allowed; due timers simply wait longer.
    pub fn set(&self, at: Duration) {
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Wall clock measured from its creation.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Handle of one scheduled expiry.
///
/// Ids are never reused by a given scheduler, so a stale id cannot cancel a newer timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerId(u64);

impl TimerId {
    /// Build an id from a raw value. Useful for hosts that map their own timer handles.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value of this id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Cancelable one-shot timers.
pub trait Scheduler {
    /// Schedule a timer that becomes due after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer.
    ///
    /// Returns true if the timer was pending. Canceling a timer that already fired, was
    /// already canceled, or was never scheduled is a no-op returning false.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Pop the next timer that is due, earliest deadline first.
    fn next_expired(&mut self) -> Option<TimerId>;
}

/// Deadline-ordered timer queue over any [`Clock`].
///
/// Timers with equal deadlines expire in the order they were scheduled.
#[derive(Debug)]
pub struct Timers<C> {
    clock: C,
    next_id: u64,
    due: BTreeSet<(Duration, TimerId)>,
    deadlines: BTreeMap<TimerId, Duration>,
}

impl<C: Clock> Timers<C> {
    /// Create an empty queue reading time from `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            due: BTreeSet::new(),
            deadlines: BTreeMap::new(),
        }
    }

    /// The clock this queue reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Returns true if `id` is scheduled and has not fired or been canceled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Earliest pending deadline, if any. Hosts can use it to size their sleep.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.due.first().map(|&(at, _)| at)
    }
}

impl<C: Clock> Scheduler for Timers<C> {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self.clock.now().saturating_add(delay);
        self.due.insert((at, id));
        self.deadlines.insert(id, at);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => {
                self.due.remove(&(at, id));
                true
            }
            None => false,
        }
    }

    fn next_expired(&mut self) -> Option<TimerId> {
        let &(at, id) = self.due.first()?;
        if at > self.clock.now() {
            return None;
        }
        self.due.pop_first();
        self.deadlines.remove(&id);
        Some(id)
    }
}

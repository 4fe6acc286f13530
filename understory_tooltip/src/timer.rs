// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer capability and a manual clock.
//!
//! ## Overview
//!
//! The [`DelayScheduler`](crate::scheduler::DelayScheduler) never reads a clock
//! itself. It asks a [`Timer`] to schedule one-shot wakeups and to cancel them.
//! When a wakeup is due, the host calls
//! [`DelayScheduler::timer_fired`](crate::scheduler::DelayScheduler::timer_fired)
//! with the handle.
//!
//! [`ManualClock`] is a deterministic implementation driven by
//! [`ManualClock::advance`]. Use it in tests, or in hosts that already own a
//! frame clock and want to forward elapsed time.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_tooltip::timer::{ManualClock, Timer};
//!
//! let mut clock = ManualClock::new();
//! let id = clock.schedule(Duration::from_millis(500));
//! assert!(clock.advance_ms(499).is_empty());
//! assert_eq!(clock.advance_ms(1), vec![id]);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::Debug;
use core::time::Duration;

/// A monotonic one-shot timer service.
pub trait Timer {
    /// Handle identifying a scheduled wakeup.
    ///
    /// A handle returned by [`schedule`](Timer::schedule) must not compare
    /// equal to any other live handle from the same timer.
    type Handle: Copy + Eq + Debug;

    /// Schedule a wakeup `delay` from now.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;

    /// Cancel a scheduled wakeup. Cancelling an unknown or already fired
    /// handle does nothing.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle issued by [`ManualClock`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    // (deadline, id); ids increase with scheduling order.
    pending: Vec<(Duration, TimerId)>,
    scheduled: u64,
    cancelled: u64,
}

/// A manually advanced clock implementing [`Timer`].
///
/// Clones share the same state, so one clock can serve several schedulers and
/// still be advanced from the outside. The clock is `!Send`, which keeps every
/// scheduler using it on one thread.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    /// Create a clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Move time forward and return the handles that became due, in deadline
    /// order (scheduling order among equal deadlines).
    ///
    /// A wakeup is due once `now >= deadline`.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        state.now += by;
        let now = state.now;

        let mut due: Vec<(Duration, TimerId)> = Vec::new();
        state.pending.retain(|&entry| {
            if entry.0 <= now {
                due.push(entry);
                false
            } else {
                true
            }
        });
        due.sort_unstable();
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Move time forward by `ms` milliseconds. See [`advance`](Self::advance).
    pub fn advance_ms(&self, ms: u64) -> Vec<TimerId> {
        self.advance(Duration::from_millis(ms))
    }

    /// Number of scheduled wakeups that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Whether `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.state.borrow().pending.iter().any(|&(_, p)| p == id)
    }

    /// Deadline of a pending wakeup.
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.state
            .borrow()
            .pending
            .iter()
            .find(|&&(_, p)| p == id)
            .map(|&(d, _)| d)
    }

    /// Total wakeups ever scheduled.
    pub fn scheduled_count(&self) -> u64 {
        self.state.borrow().scheduled
    }

    /// Total wakeups cancelled before firing.
    pub fn cancelled_count(&self) -> u64 {
        self.state.borrow().cancelled
    }
}

impl Timer for ManualClock {
    type Handle = TimerId;

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        let deadline = state.now + delay;
        state.pending.push((deadline, id));
        state.scheduled += 1;
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        let mut state = self.state.borrow_mut();
        let before = state.pending.len();
        state.pending.retain(|&(_, id)| id != handle);
        if state.pending.len() != before {
            state.cancelled += 1;
        }
    }
}

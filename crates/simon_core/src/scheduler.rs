//! Virtual-clock timer queue.
//!
//! Tasks are scheduled with a delay relative to the queue's clock and carry
//! the epoch that was current when they were scheduled. Nothing is ever
//! cancelled; the owner compares epochs at dispatch and drops stale tasks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::trace;

/// Generation counter attached to every scheduled task.
pub type Epoch = u64;

/// A task waiting in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled<T> {
    /// Clock value at which the task becomes due.
    pub due: Duration,
    /// Epoch current when the task was scheduled.
    pub epoch: Epoch,
    /// The task payload.
    pub task: T,
}

/// Delayed task queue driven by an explicit clock.
///
/// Tasks with equal due times come out in insertion order.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    entries: BTreeMap<(Duration, u64), Scheduled<T>>,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Current clock value.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    /// Schedules `task` to run `delay` after the current clock.
    ///
    /// Returns the absolute due time.
    pub fn schedule(&mut self, delay: Duration, epoch: Epoch, task: T) -> Duration {
        let due = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        trace!(?due, epoch, seq, "Scheduled task");
        self.entries.insert((due, seq), Scheduled { due, epoch, task });
        due
    }

    /// Removes the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's due time, so follow-up tasks scheduled
    /// while handling it keep exact offsets.
    pub fn pop_due(&mut self, until: Duration) -> Option<Scheduled<T>> {
        let key = *self.entries.keys().next()?;
        if key.0 > until {
            return None;
        }
        let scheduled = self.entries.remove(&key)?;
        if scheduled.due > self.now {
            self.now = scheduled.due;
        }
        Some(scheduled)
    }

    /// Moves the clock forward to `to`. The clock never runs backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        if to > self.now {
            self.now = to;
        }
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

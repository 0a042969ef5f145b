//! One-shot timers on a virtual millisecond clock.
//!
//! Timers fire in due-time order; timers due at the same instant fire in the
//! order they were scheduled. Nothing runs until the owner pops due timers,
//! so the clock only moves when the owner says so.

use crate::Millis;

/// Handle returned by [`Scheduler::schedule_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    due: Millis,
    task: T,
}

/// Queue of pending timers, kept sorted by `(due, id)`.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    timers: Vec<Timer<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `task` to fire at absolute time `due`.
    pub fn schedule_at(&mut self, due: Millis, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        // Insert after every timer due at or before `due` so equal instants stay FIFO
        let position = self.timers.partition_point(|t| t.due <= due);
        self.timers.insert(position, Timer { id, due, task });
        id
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Millis> {
        self.timers.first().map(|t| t.due)
    }

    /// Removes and returns the earliest timer if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, T)> {
        if self.timers.first().is_some_and(|t| t.due <= now) {
            let timer = self.timers.remove(0);
            Some((timer.id, timer.task))
        } else {
            None
        }
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

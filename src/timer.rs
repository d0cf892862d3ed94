// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timers driven by an explicit clock.
//!
//! Nothing here sleeps or spawns: callers pass the current [`Instant`] when
//! scheduling and when polling, which keeps timer behavior deterministic in
//! tests and lets the UI drive it from a periodic tick.

use std::time::{Duration, Instant};

/// Identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    deadline: Instant,
    task: T,
}

/// Pending one-shot tasks ordered by deadline.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: now + delay,
            task,
        });
        id
    }

    /// Cancels a timer. Returns `false` if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancels every pending timer whose task matches `predicate`.
    /// Returns the number of timers cancelled.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !predicate(&e.task));
        before - self.entries.len()
    }

    /// Removes and returns the tasks due at `now`, earliest deadline first.
    /// Timers sharing a deadline come out in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<Entry<T>>, Vec<Entry<T>>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.deadline <= now);
        self.entries = pending;
        due.sort_by_key(|e| (e.deadline, e.id));
        due.into_iter().map(|e| e.task).collect()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn nothing_is_due_before_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(100), "a");

        assert!(scheduler.pop_due(start + ms(99)).is_empty());
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.pop_due(start + ms(100)), vec!["a"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn due_tasks_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(300), "late");
        scheduler.schedule(start, ms(100), "early");
        scheduler.schedule(start, ms(100), "early-second");

        assert_eq!(
            scheduler.pop_due(start + ms(500)),
            vec!["early", "early-second", "late"]
        );
    }

    #[test]
    fn cancel_removes_only_that_timer() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule(start, ms(10), 1);
        scheduler.schedule(start, ms(10), 2);

        assert!(scheduler.cancel(first));
        assert!(!scheduler.cancel(first));
        assert_eq!(scheduler.pop_due(start + ms(10)), vec![2]);
    }

    #[test]
    fn cancel_where_matches_tasks() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, ms(10), 7);
        scheduler.schedule(start, ms(20), 7);
        scheduler.schedule(start, ms(30), 8);

        assert_eq!(scheduler.cancel_where(|task| *task == 7), 2);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(start + ms(30)));
    }
}

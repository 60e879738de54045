//! Deferred UI actions.
//!
//! One queue replaces the loose timers a page would otherwise start. Time is
//! logical: callers pass `now` in milliseconds since page start, which keeps
//! the queue deterministic under test. The app drives it from a single
//! interval task.

use std::time::Duration;

/// Milliseconds since the page controller was created.
pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<A> {
    id: TaskId,
    due: Millis,
    action: A,
}

/// Deadline-ordered queue of actions.
///
/// Tasks with equal deadlines run in scheduling order.
#[derive(Debug)]
pub struct Scheduler<A> {
    next_id: u64,
    // Sorted by (due, id)
    queue: Vec<Scheduled<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            queue: Vec::new(),
        }
    }

    /// Schedule `action` to run `delay` after `now`.
    pub fn schedule(&mut self, now: Millis, delay: Duration, action: A) {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = now.saturating_add(delay.as_millis() as Millis);
        let position = self
            .queue
            .partition_point(|task| (task.due, task.id) <= (due, id));
        self.queue.insert(position, Scheduled { id, due, action });
    }

    /// Cancel every pending task whose action matches `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&A) -> bool) -> usize {
        let before = self.queue.len();
        self.queue.retain(|task| !predicate(&task.action));
        before - self.queue.len()
    }

    /// Remove and return every action due at or before `now`, in order.
    pub fn drain_due(&mut self, now: Millis) -> Vec<A> {
        let split = self.queue.partition_point(|task| task.due <= now);
        self.queue.drain(..split).map(|task| task.action).collect()
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.queue.first().map(|task| task.due)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, Duration::from_millis(300), "c");
        scheduler.schedule(0, Duration::from_millis(100), "a");
        scheduler.schedule(50, Duration::from_millis(100), "b");

        assert_eq!(scheduler.next_deadline(), Some(100));
        assert_eq!(scheduler.drain_due(99), Vec::<&str>::new());
        assert_eq!(scheduler.drain_due(150), vec!["a", "b"]);
        assert_eq!(scheduler.drain_due(1_000), vec!["c"]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn equal_deadlines_keep_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, Duration::from_millis(10), 1);
        scheduler.schedule(0, Duration::from_millis(10), 2);
        scheduler.schedule(0, Duration::from_millis(10), 3);
        assert_eq!(scheduler.drain_due(10), vec![1, 2, 3]);
    }

    #[test]
    fn cancel_where_matches_actions() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, Duration::from_millis(10), 1);
        scheduler.schedule(0, Duration::from_millis(20), 2);
        scheduler.schedule(0, Duration::from_millis(30), 3);
        assert_eq!(scheduler.cancel_where(|n| n % 2 == 1), 2);
        assert_eq!(scheduler.drain_due(100), vec![2]);
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(42, Duration::ZERO, ());
        assert_eq!(scheduler.drain_due(42).len(), 1);
    }
}

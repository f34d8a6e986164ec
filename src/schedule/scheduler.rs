//! Cancellable one-shot task queue.

use std::time::Duration;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u32);

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A task waiting for its due time.
#[derive(Clone, Debug)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

/// One-shot deferred tasks against a virtual clock.
///
/// ## Behavior
///
/// - `schedule()`: task fires once the clock has advanced by `delay`
/// - `cancel()`: removes a task before it fires
/// - `advance()`: moves the clock and returns due tasks, earliest first
///   (ties in scheduling order)
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    /// Time elapsed since creation.
    now: Duration,

    /// Pending tasks, unordered.
    tasks: Vec<ScheduledTask<T>>,

    /// Next handle to allocate.
    next_id: u32,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire after `delay`.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let due = self.now.checked_add(delay).unwrap_or(Duration::MAX);
        self.tasks.push(ScheduledTask { handle, due, task });
        handle
    }

    /// Cancel a pending task, returning it.
    ///
    /// Returns `None` if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let pos = self.tasks.iter().position(|t| t.handle == handle)?;
        Some(self.tasks.swap_remove(pos).task)
    }

    /// Check whether a task is still waiting.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Advance the clock and take every task that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.checked_add(elapsed).unwrap_or(Duration::MAX);

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.due <= now);
        self.tasks = pending;

        due.sort_by(|a, b| a.due.cmp(&b.due).then_with(|| a.handle.0.cmp(&b.handle.0)));
        due.into_iter().map(|t| t.task).collect()
    }
}

//! Cancellable periodic tasks
//!
//! Spawn cadence and the countdown run on a wall-clock millisecond timeline,
//! independent of how often frames are rendered. The scheduler owns every
//! periodic task of a session, so canceling is a single call and re-arming a
//! task replaces the previous one instead of stacking a second copy.

use serde::{Deserialize, Serialize};

/// Periodic work owned by a session.
///
/// Declaration order breaks ties between tasks due at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    SpawnObstacle,
    SpawnCollectible,
    Countdown,
}

/// A task that fires every `interval_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicTask {
    pub kind: TaskKind,
    pub interval_ms: u64,
    pub next_due_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: u64,
    tasks: Vec<PeriodicTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position on the timeline
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Drop all tasks and rewind the timeline
    pub fn reset(&mut self) {
        self.now_ms = 0;
        self.tasks.clear();
    }

    /// Arm `kind` to fire every `interval_ms`, first firing one interval from now.
    /// An already armed task of the same kind is replaced.
    pub fn arm(&mut self, kind: TaskKind, interval_ms: u64) {
        let interval_ms = interval_ms.max(1);
        self.cancel(kind);
        self.tasks.push(PeriodicTask {
            kind,
            interval_ms,
            next_due_ms: self.now_ms.saturating_add(interval_ms),
        });
    }

    /// Returns true if a task was armed
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.kind != kind);
        self.tasks.len() != before
    }

    /// Returns how many tasks were canceled
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    pub fn is_armed(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn armed_count(&self) -> usize {
        self.tasks.len()
    }

    /// Pop the earliest task due at or before `until_ms` and re-arm it for its
    /// next period. The timeline moves to the task's due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TaskKind> {
        let task = self
            .tasks
            .iter_mut()
            .filter(|t| t.next_due_ms <= until_ms)
            .min_by_key(|t| (t.next_due_ms, t.kind))?;

        let kind = task.kind;
        self.now_ms = self.now_ms.max(task.next_due_ms);
        task.next_due_ms = task.next_due_ms.saturating_add(task.interval_ms);
        Some(kind)
    }

    /// Move the timeline forward once every due task has been popped
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

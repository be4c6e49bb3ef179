// Virtual-time timer table for the session's periodic tasks.

use crate::domain::ProjectileId;
use std::collections::HashMap;

/// Recurring tasks driven while a session is active.
///
/// Variant order is the tie-break when several tasks fall due at the same instant:
/// movement/collision runs first so a collision can end the session before anything spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskKind {
    Movement,
    Projectile(ProjectileId),
    Spawn,
    Elapsed,
    Ramp,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    period_ms: u64,
    due_ms: u64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    timers: HashMap<TaskKind, Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arms `task` to fire every `period_ms`, first firing one period from now.
    /// Re-arming an armed task replaces its timer (cancel-and-reschedule).
    pub fn arm(&mut self, task: TaskKind, period_ms: u64) {
        let period_ms = period_ms.max(1);
        self.timers.insert(
            task,
            Timer {
                period_ms,
                due_ms: self.now_ms + period_ms,
            },
        );
    }

    pub fn cancel(&mut self, task: TaskKind) -> bool {
        self.timers.remove(&task).is_some()
    }

    /// Cancels every timer; returns how many were armed.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    #[cfg(test)]
    pub fn is_armed(&self, task: TaskKind) -> bool {
        self.timers.contains_key(&task)
    }

    #[cfg(test)]
    pub fn period_of(&self, task: TaskKind) -> Option<u64> {
        self.timers.get(&task).map(|t| t.period_ms)
    }

    #[cfg(test)]
    pub fn armed_count(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline, if any timer is armed.
    pub fn next_due(&self) -> Option<u64> {
        self.timers.values().map(|t| t.due_ms).min()
    }

    /// Pops the next task due at or before `until_ms`.
    ///
    /// The clock moves to the task's deadline and the task's timer is rescheduled one period
    /// later before the caller runs it, so the callback is free to cancel or re-arm.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TaskKind> {
        let (task, timer) = self
            .timers
            .iter_mut()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(task, t)| (t.due_ms, **task))?;

        self.now_ms = self.now_ms.max(timer.due_ms);
        timer.due_ms += timer.period_ms;
        Some(*task)
    }

    /// Moves the clock forward to `until_ms` once every due task has been popped.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler, until_ms: u64) -> Vec<(u64, TaskKind)> {
        let mut fired = Vec::new();
        while let Some(task) = scheduler.pop_due(until_ms) {
            fired.push((scheduler.now_ms(), task));
        }
        scheduler.settle(until_ms);
        fired
    }

    #[test]
    fn fires_each_period_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TaskKind::Elapsed, 1000);
        scheduler.arm(TaskKind::Spawn, 1500);

        let fired = drain(&mut scheduler, 3000);
        assert_eq!(
            fired,
            vec![
                (1000, TaskKind::Elapsed),
                (1500, TaskKind::Spawn),
                (2000, TaskKind::Elapsed),
                (3000, TaskKind::Spawn),
                (3000, TaskKind::Elapsed),
            ]
        );
        assert_eq!(scheduler.now_ms(), 3000);
    }

    #[test]
    fn movement_wins_ties() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TaskKind::Ramp, 100);
        scheduler.arm(TaskKind::Spawn, 100);
        scheduler.arm(TaskKind::Projectile(ProjectileId(3)), 100);
        scheduler.arm(TaskKind::Movement, 100);

        let order: Vec<_> = drain(&mut scheduler, 100)
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            order,
            vec![
                TaskKind::Movement,
                TaskKind::Projectile(ProjectileId(3)),
                TaskKind::Spawn,
                TaskKind::Ramp,
            ]
        );
    }

    #[test]
    fn rearm_restarts_the_period_from_now() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TaskKind::Spawn, 2000);
        drain(&mut scheduler, 1200);

        scheduler.arm(TaskKind::Spawn, 1500);
        assert_eq!(scheduler.next_due(), Some(2700));
        assert_eq!(scheduler.period_of(TaskKind::Spawn), Some(1500));
    }

    #[test]
    fn cancel_all_leaves_nothing_due() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TaskKind::Movement, 20);
        scheduler.arm(TaskKind::Elapsed, 1000);
        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.next_due(), None);
        assert!(drain(&mut scheduler, 10_000).is_empty());
    }

    #[test]
    fn cancelled_task_never_fires_even_when_overdue() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TaskKind::Projectile(ProjectileId(1)), 20);
        scheduler.arm(TaskKind::Projectile(ProjectileId(2)), 20);
        assert!(scheduler.cancel(TaskKind::Projectile(ProjectileId(1))));

        let fired = drain(&mut scheduler, 20);
        assert_eq!(fired, vec![(20, TaskKind::Projectile(ProjectileId(2)))]);
        assert!(!scheduler.is_armed(TaskKind::Projectile(ProjectileId(1))));
    }

    #[test]
    fn zero_period_is_treated_as_one_millisecond() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TaskKind::Movement, 0);
        assert_eq!(drain(&mut scheduler, 3).len(), 3);
    }
}

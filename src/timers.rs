//! Cancellable task scheduling
//!
//! The widget never owns closures. It hands the scheduler a [`Job`] and the
//! platform hands the job back to [`Widget::run_job`](crate::Widget::run_job)
//! when it is due.

use crate::widget::PetalId;

/// Handle to a scheduled repeating task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

/// Deferred work the widget asks the platform to run later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Create one falling petal
    SpawnPetal,
    /// Remove a petal whose lifetime elapsed
    RemovePetal(PetalId),
    /// Re-apply the shake animation after it was cleared
    ApplyShake,
}

/// Timer backend (browser `setInterval`/`setTimeout`, or a virtual clock)
pub trait Scheduler {
    /// Run `job` every `period_ms`, first firing one period from now.
    /// `None` when the backend could not register the task.
    fn every(&mut self, period_ms: u32, job: Job) -> Option<TaskId>;
    /// Run `job` once after `delay_ms`. Fire-once tasks cannot be cancelled.
    fn after(&mut self, delay_ms: u32, job: Job);
    /// Stop a repeating task. Unknown ids are ignored.
    fn cancel(&mut self, task: TaskId);
}

/// Browser timers take an i32 delay; clamp instead of wrapping negative
pub fn browser_delay_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone)]
struct Pending {
    id: Option<TaskId>,
    due: u64,
    period: Option<u32>,
    job: Job,
    /// Scheduling order, breaks ties between tasks due at the same instant
    seq: u64,
}

/// Deterministic scheduler driven by a virtual millisecond clock
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: u64,
    next_id: u32,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time (ms)
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of tasks (repeating and fire-once) still pending
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of live repeating tasks
    pub fn repeating(&self) -> usize {
        self.pending.iter().filter(|p| p.period.is_some()).count()
    }

    pub fn is_scheduled(&self, task: TaskId) -> bool {
        self.pending.iter().any(|p| p.id == Some(task))
    }

    /// Period of a live repeating task
    pub fn period_of(&self, task: TaskId) -> Option<u32> {
        self.pending
            .iter()
            .find(|p| p.id == Some(task))
            .and_then(|p| p.period)
    }

    /// Fire every job due up to and including `until`, in time order.
    /// Jobs scheduled by `fire` are picked up if they fall inside the window.
    /// Returns the number of jobs fired.
    pub fn run_until<F>(&mut self, until: u64, mut fire: F) -> usize
    where
        F: FnMut(&mut Self, Job),
    {
        let mut fired = 0;
        while let Some(idx) = self.next_due(until) {
            let seq = self.bump_seq();
            let Pending { due, period, job, .. } = self.pending[idx];
            self.now = due;
            match period {
                Some(period) => {
                    let task = &mut self.pending[idx];
                    task.due += u64::from(period);
                    task.seq = seq;
                }
                None => {
                    self.pending.swap_remove(idx);
                }
            }
            fire(self, job);
            fired += 1;
        }
        self.now = self.now.max(until);
        fired
    }

    /// Advance the clock by `ms`, firing due jobs
    pub fn advance<F>(&mut self, ms: u64, fire: F) -> usize
    where
        F: FnMut(&mut Self, Job),
    {
        let until = self.now + ms;
        self.run_until(until, fire)
    }

    fn next_due(&self, until: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, id: Option<TaskId>, delay: u32, period: Option<u32>, job: Job) {
        let seq = self.bump_seq();
        self.pending.push(Pending {
            id,
            due: self.now + u64::from(delay),
            period,
            job,
            seq,
        });
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, period_ms: u32, job: Job) -> Option<TaskId> {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.push(Some(id), period_ms, Some(period_ms), job);
        Some(id)
    }

    fn after(&mut self, delay_ms: u32, job: Job) {
        self.push(None, delay_ms, None, job);
    }

    fn cancel(&mut self, task: TaskId) {
        self.pending.retain(|p| p.id != Some(task));
    }
}

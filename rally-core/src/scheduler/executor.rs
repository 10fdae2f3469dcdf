//! Priority-ordered cooperative executor

use heapless::Vec;

use super::task::{Task, OVERRUN_MAX};
use crate::traits::Clock;

/// Errors from building a task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// The task list is full
    TooManyTasks,
    /// A period of 0 ticks would starve every later task
    ZeroPeriod,
    /// Period too long for wrap-tolerant deadline comparison
    PeriodTooLong,
}

/// The work the scheduler drives
///
/// Task bodies report their own failures internally; the scheduler only
/// asks whether it should keep going.
pub trait TaskSet<K> {
    /// Run one task body to completion
    fn run_task(&mut self, kind: K);

    /// Checked at the top of every scheduling iteration
    fn should_continue(&self) -> bool;
}

/// Fixed list of periodic tasks, highest priority first
#[derive(Debug, Clone)]
pub struct Scheduler<K, const N: usize> {
    tasks: Vec<Task<K>, N>,
}

impl<K: Copy, const N: usize> Default for Scheduler<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy, const N: usize> Scheduler<K, N> {
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task below every task already added
    pub fn add(&mut self, kind: K, period: u16) -> Result<(), SchedulerError> {
        if period == 0 {
            return Err(SchedulerError::ZeroPeriod);
        }
        if period >= OVERRUN_MAX {
            return Err(SchedulerError::PeriodTooLong);
        }
        self.tasks
            .push(Task::new(kind, period))
            .map_err(|_| SchedulerError::TooManyTasks)
    }

    pub fn tasks(&self) -> &[Task<K>] {
        &self.tasks
    }

    /// Make every task due at `now`
    pub fn start(&mut self, now: u16) {
        for task in self.tasks.iter_mut() {
            task.deadline = now;
        }
    }

    /// Index of the task to run next
    ///
    /// The first due task in list order wins. When nothing is due, the task
    /// with the nearest deadline is chosen so the caller can wait for it.
    pub fn select(&self, now: u16) -> Option<usize> {
        if let Some(index) = self.tasks.iter().position(|task| task.is_due(now)) {
            return Some(index);
        }

        let mut best: Option<(usize, u16)> = None;
        for (index, task) in self.tasks.iter().enumerate() {
            let remaining = task.remaining(now);
            match best {
                Some((_, nearest)) if nearest <= remaining => {}
                _ => best = Some((index, remaining)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Wait for the next task, advance its deadline and return its kind
    pub fn next_task<C: Clock>(&mut self, clock: &mut C) -> Option<K> {
        let index = self.select(clock.now())?;
        let task = &mut self.tasks[index];
        clock.wait_until(task.deadline);
        task.advance();
        Some(task.kind)
    }

    /// Run tasks until the task set asks to stop
    ///
    /// All deadlines are reset to the current tick first, so the first
    /// iteration runs the highest-priority task.
    pub fn run<C: Clock, S: TaskSet<K>>(&mut self, mut clock: C, set: &mut S) {
        let now = clock.now();
        self.start(now);

        while set.should_continue() {
            match self.next_task(&mut clock) {
                Some(kind) => set.run_task(kind),
                None => return,
            }
        }
    }
}

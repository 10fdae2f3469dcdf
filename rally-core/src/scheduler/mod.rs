//! Cooperative task scheduler
//!
//! Runs a fixed, priority-ordered list of periodic tasks against a wrapping
//! 16-bit tick counter. Nothing is preempted: each task body runs to
//! completion before the next one is selected.

pub mod executor;
pub mod task;

pub use executor::{Scheduler, SchedulerError, TaskSet};
pub use task::{is_due, Task, OVERRUN_MAX};

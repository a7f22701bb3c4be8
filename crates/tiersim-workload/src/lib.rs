//! `tiersim-workload` — tasks and the demand sources that emit them.
//!
//! A [`Task`] is one workload item from one device slot: a demand triple,
//! a payload size, a priority class, and a lifecycle that ends in exactly
//! one of `Completed` or `Failed`.
//!
//! [`DemandSource`] is the generation seam; [`WorkloadGenerator`] is the
//! standard implementation — a linear device ramp where every device emits
//! one task per round.

pub mod generator;
pub mod task;

#[cfg(test)]
mod tests;

pub use generator::{DemandSource, WorkloadGenerator};
pub use task::{Priority, Task, TaskStatus};

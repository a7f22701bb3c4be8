//! Placement policies: deciding which server runs which task.
//!
//! | Module        | Contents                                         |
//! |---------------|--------------------------------------------------|
//! | [`scheduler`] | `Placement`, the `Scheduler` trait               |
//! | [`greedy`]    | `GreedyTierScheduler` — tier order, busiest node |
//!
//! A scheduler owns the whole placement step: it picks servers, reserves
//! capacity through the ledger, and marks tasks scheduled. The engine only
//! consumes the returned [`Placement`]s, so capacity is deducted exactly
//! once per task.

pub mod greedy;
pub mod scheduler;


pub use greedy::GreedyTierScheduler;
pub use scheduler::{Placement, Scheduler};

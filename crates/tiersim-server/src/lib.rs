//! `tiersim-server` — capacity ledgers for compute nodes.
//!
//! A [`Server`] tracks live cpu/storage/memory availability against fixed
//! capacities, holds one [`Reservation`] per in-flight task, and accumulates
//! transferred-data and monetary-cost counters.  Allocation is atomic
//! (all-or-nothing) and release is idempotent, so availability can never
//! leave the `[0, capacity]` envelope.
//!
//! [`build_fleet`] stamps the full fleet out of a validated
//! `TopologyConfig`, dense `ServerId`s in tier order.

pub mod fleet;
pub mod server;


pub use fleet::build_fleet;
pub use server::{Reservation, Server, Utilization};

//! Simulation time model.
//!
//! # Design
//!
//! Time is a single monotonically increasing scalar, [`SimTime`].  One round
//! advances it by exactly 1.0; mobility handover penalties add fractional
//! amounts on the same axis; reservation deadlines (`now + latency`) compare
//! against it directly.  There is no wall-clock mapping — every duration-like
//! quantity in the system (service latency, handover delay) is already
//! expressed on this one axis, so the unit never needs converting.
//!
//! `f64` rather than an integer tick because penalties are fractional and
//! deadlines are open sums of configured latencies.  Timestamps are compared,
//! never hashed.

use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The timestamp `delay` units after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    /// Units elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Owns the current timestamp and restricts how it may move.
///
/// Exactly two mutations exist: [`advance_round`](SimClock::advance_round)
/// (the fixed end-of-round step) and [`charge_delay`](SimClock::charge_delay)
/// (out-of-band penalties such as handover latency).  Everything else reads
/// [`now`](SimClock::now).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    /// A clock at `SimTime::ZERO`.
    pub fn new() -> Self {
        Self { now: SimTime::ZERO }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Advance by exactly one round.
    #[inline]
    pub fn advance_round(&mut self) {
        self.now = self.now.after(1.0);
    }

    /// Charge an out-of-band delay.  Non-positive amounts are ignored — time
    /// never rewinds.
    #[inline]
    pub fn charge_delay(&mut self, delay: f64) {
        if delay > 0.0 {
            self.now = self.now.after(delay);
        }
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now)
    }
}

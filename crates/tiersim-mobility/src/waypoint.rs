//! Random-waypoint mover: pause somewhere, pick a target, travel, repeat.

use tiersim_core::config::AreaBounds;
use tiersim_core::{SimRng, Vec2};

/// Arrival tolerance in metres. Closer than this snaps into a pause.
const ARRIVAL_EPS_M: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pause { remaining_s: f64 },
    Move { velocity: Vec2 },
}

/// The classic random-waypoint model over a rectangular arena.
///
/// Two details matter for reproducing traces:
///
/// - Pause expiry draws the next target and speed and fixes the velocity,
///   but actual movement starts on the *following* [`advance`] call.
/// - Arrival is checked after integrating, within [`ARRIVAL_EPS_M`]. A
///   target drawn on top of the current position would give a zero-length
///   direction vector; the divisor clamps to 1.0 so velocity stays finite.
///
/// [`advance`]: RandomWaypoint::advance
#[derive(Debug)]
pub struct RandomWaypoint {
    area:        AreaBounds,
    speed_range: (f64, f64),
    pause_range: (f64, f64),
    rng:         SimRng,
    phase:       Phase,
    pos:         Vec2,
    target:      Vec2,
}

impl RandomWaypoint {
    /// A mover resting at a random point of `area`, pause already drawn.
    pub fn new(
        area: AreaBounds,
        speed_range: (f64, f64),
        pause_range: (f64, f64),
        mut rng: SimRng,
    ) -> Self {
        let pos = random_point(&mut rng, &area);
        let target = random_point(&mut rng, &area);
        let remaining_s = uniform(&mut rng, pause_range);
        Self {
            area,
            speed_range,
            pause_range,
            rng,
            phase: Phase::Pause { remaining_s },
            pos,
            target,
        }
    }

    /// Current position without advancing time.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Whether the mover is currently resting.
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Pause { .. })
    }

    /// Pin the current position, e.g. to seed a deployment layout. The next
    /// leg's target is drawn fresh at pause expiry, so pinning never aims
    /// the mover anywhere.
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Advance by `dt_ms` and return the (possibly unchanged) position.
    pub fn advance(&mut self, dt_ms: f64) -> Vec2 {
        let dt = dt_ms / 1000.0;
        match self.phase {
            Phase::Pause { remaining_s } => {
                let remaining = remaining_s - dt;
                if remaining <= 0.0 {
                    self.target = random_point(&mut self.rng, &self.area);
                    let speed = uniform(&mut self.rng, self.speed_range);
                    let leg = self.target - self.pos;
                    let dist = leg.length();
                    let divisor = if dist == 0.0 { 1.0 } else { dist };
                    self.phase = Phase::Move { velocity: leg * (speed / divisor) };
                } else {
                    self.phase = Phase::Pause { remaining_s: remaining };
                }
            }
            Phase::Move { velocity } => {
                self.pos = self.pos + velocity * dt;
                if self.pos.distance(self.target) < ARRIVAL_EPS_M {
                    let remaining_s = uniform(&mut self.rng, self.pause_range);
                    self.phase = Phase::Pause { remaining_s };
                }
            }
        }
        self.pos
    }
}

fn random_point(rng: &mut SimRng, area: &AreaBounds) -> Vec2 {
    Vec2::new(
        uniform(rng, (area.x_min, area.x_max)),
        uniform(rng, (area.y_min, area.y_max)),
    )
}

/// Uniform draw tolerating degenerate (`hi <= lo`) ranges.
fn uniform(rng: &mut SimRng, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

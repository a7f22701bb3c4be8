//! A mobile device: where it is, what it hears, and who it talks to.

use tiersim_core::{DeviceId, ServerId, Vec2};
use tiersim_server::Server;

use crate::waypoint::RandomWaypoint;

/// Where an entity sits. Planar positions are the norm; scalar is the
/// one-axis layout used by line deployments, measured against a server's x
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Scalar(f64),
    Planar(Vec2),
}

impl Position {
    /// Normalize to 2-D for centroid math; a scalar lifts onto the x axis.
    pub fn as_planar(self) -> Vec2 {
        match self {
            Position::Scalar(s) => Vec2::new(s, 0.0),
            Position::Planar(v) => v,
        }
    }
}

/// A moving device that associates with servers and hands over on signal.
#[derive(Debug)]
pub struct MobileEntity {
    id:           DeviceId,
    position:     Position,
    speed_m_s:    f64,
    attached:     Option<ServerId>,
    threshold_db: f64,
    latency_ms:   f64,
    waypoint:     Option<RandomWaypoint>,
}

impl MobileEntity {
    pub fn new(
        id: DeviceId,
        position: Position,
        speed_m_s: f64,
        threshold_db: f64,
        latency_ms: f64,
    ) -> Self {
        Self {
            id,
            position,
            speed_m_s,
            attached: None,
            threshold_db,
            latency_ms,
            waypoint: None,
        }
    }

    /// Drive this entity with a waypoint mover instead of scalar drift.
    pub fn with_waypoint(mut self, waypoint: RandomWaypoint) -> Self {
        self.position = Position::Planar(waypoint.position());
        self.waypoint = Some(waypoint);
        self
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn attached(&self) -> Option<ServerId> {
        self.attached
    }

    pub fn threshold_db(&self) -> f64 {
        self.threshold_db
    }

    /// Penalty-free association, used at initial deployment.
    pub fn attach(&mut self, server: ServerId) {
        self.attached = Some(server);
    }

    /// Re-associate and return the latency penalty the switch costs.
    pub fn handover(&mut self, server: ServerId) -> f64 {
        self.attached = Some(server);
        self.latency_ms
    }

    /// Advance one time step. A waypoint model drives planar movement;
    /// without one, scalar positions drift at `speed_m_s` and planar
    /// positions stay put.
    pub fn advance(&mut self, dt_ms: f64) {
        if let Some(w) = self.waypoint.as_mut() {
            self.position = Position::Planar(w.advance(dt_ms));
        } else if let Position::Scalar(s) = self.position {
            self.position = Position::Scalar(s + self.speed_m_s * (dt_ms / 1000.0));
        }
    }

    /// Path-loss RSS in dB: `-20 * log10(max(d, 1))`. Distances under one
    /// metre clamp to 0 dB, so the value is always finite.
    pub fn signal_strength(&self, server: &Server) -> f64 {
        let dist = match self.position {
            Position::Planar(p) => p.distance(server.position()),
            Position::Scalar(s) => (s - server.position().x).abs(),
        };
        -20.0 * dist.max(1.0).log10()
    }

    /// Loudest server by raw RSS, first wins on ties. `None` on an empty
    /// fleet.
    pub fn best_server(&self, servers: &[Server]) -> Option<ServerId> {
        self.best_with_signal(servers).map(|(srv, _)| srv.id())
    }

    /// Hysteresis-gated choice: the raw best only displaces the current
    /// attachment when its gain clears `threshold_db`. Unattached entities
    /// take the raw best outright.
    pub fn pick_server(&self, servers: &[Server]) -> Option<ServerId> {
        let (best, best_sig) = self.best_with_signal(servers)?;
        let Some(current_id) = self.attached else {
            return Some(best.id());
        };
        let Some(current) = servers.iter().find(|s| s.id() == current_id) else {
            return Some(best.id());
        };
        if best_sig - self.signal_strength(current) >= self.threshold_db {
            Some(best.id())
        } else {
            Some(current_id)
        }
    }

    fn best_with_signal<'a>(&self, servers: &'a [Server]) -> Option<(&'a Server, f64)> {
        let mut best: Option<(&Server, f64)> = None;
        for srv in servers {
            let sig = self.signal_strength(srv);
            match best {
                Some((_, top)) if sig <= top => {}
                _ => best = Some((srv, sig)),
            }
        }
        best
    }
}

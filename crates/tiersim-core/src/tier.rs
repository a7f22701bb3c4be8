//! Compute-tier enum shared across all placement-related crates.

/// One level of the compute hierarchy, nearest-first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Micro data centers colocated with access points.  Lowest latency,
    /// smallest capacity.
    Edge,
    /// Metro aggregation sites.
    Regional,
    /// Hyperscale core.  Highest latency, effectively unbounded capacity.
    Cloud,
}

impl Tier {
    /// The fixed spill-over order: nearest tier first, falling outward only
    /// when a tier has no feasible node.
    pub const ORDER: [Tier; 3] = [Tier::Edge, Tier::Regional, Tier::Cloud];

    /// Human-readable label, also the prefix of server names (`Edge_1`).
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Edge     => "Edge",
            Tier::Regional => "Regional",
            Tier::Cloud    => "Cloud",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

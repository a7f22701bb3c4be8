//! Fleet construction from a topology table.

use tiersim_core::config::TopologyConfig;
use tiersim_core::{ConfigResult, ServerId};

use crate::server::Server;

/// Stamp out every node declared in `topology`, tier by tier in
/// [`Tier::ORDER`](tiersim_core::Tier::ORDER), with dense ids matching the
/// returned vector's indices.
///
/// Each tier's template is validated first; any inconsistency aborts before
/// a single node exists.
pub fn build_fleet(topology: &TopologyConfig) -> ConfigResult<Vec<Server>> {
    let mut fleet = Vec::with_capacity(topology.total_nodes());
    for (tier, spec) in topology.iter() {
        spec.validate(tier)?;
        for slot in 0..spec.nodes {
            let id = ServerId(fleet.len() as u32);
            let position = spec.positions[slot as usize];
            fleet.push(Server::new(id, tier, slot, spec, position));
        }
    }
    Ok(fleet)
}

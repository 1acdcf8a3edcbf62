use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::{
    config::Config,
    error::EmbeddingError,
    mapping::Mapping,
    network::SubstrateNetwork,
    request::{Request, VirtualLink},
    topology::{RouteCandidate, Topology},
    NodeId,
};

mod greedy;
mod random_fit;

pub use greedy::GreedyMapper;
pub use random_fit::RandomFitMapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MapperPolicy {
    Greedy,
    RandomFit,
}

/// マッピングアルゴリズムの契約
///
/// Given one request and the current substrate, either return a fully
/// populated mapping (every virtual node placed, every virtual link routed)
/// or fail with `ResourceExhausted`. A failing mapper must clear its partial
/// mapping before returning: there is no automatic rollback, and partial
/// load must never stay visible.
pub trait Mapper {
    fn map_request(
        &mut self,
        request: &Request,
        substrate: &mut SubstrateNetwork,
        topology: &Topology,
    ) -> Result<Mapping, EmbeddingError>;
}

pub fn from_policy(config: &Config) -> Box<dyn Mapper> {
    match MapperPolicy::from_str(&config.policy.mapper_policy) {
        Ok(MapperPolicy::Greedy) => Box::new(GreedyMapper::new()),
        Ok(MapperPolicy::RandomFit) => Box::new(RandomFitMapper::new(config)),
        Err(_) => panic!("Invalid Mapper Policy: {}.", config.policy.mapper_policy),
    }
}

fn hosting_endpoints(mapping: &Mapping, virtual_link: &VirtualLink) -> (NodeId, NodeId) {
    let source_host = match mapping.get_hosting_node_for(virtual_link.src) {
        Some(host) => host,
        None => panic!("The virtual link {} has an unmapped source.", virtual_link.id),
    };
    let destiny_host = match mapping.get_hosting_node_for(virtual_link.dst) {
        Some(host) => host,
        None => panic!(
            "The virtual link {} has an unmapped destination.",
            virtual_link.id
        ),
    };

    (source_host, destiny_host)
}

/// 経路上のすべてのリンクに帯域が残っているか
fn candidate_is_feasible(
    candidate: &RouteCandidate,
    substrate: &SubstrateNetwork,
    bandwidth: f64,
) -> bool {
    candidate
        .link_route
        .iter()
        .all(|link_id| substrate.get_link_by_id(*link_id).remaining_bandwidth() > bandwidth)
}

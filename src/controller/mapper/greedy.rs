use crate::{
    error::EmbeddingError, mapping::Mapping, network::SubstrateNetwork,
    request::{Request, VirtualLink}, topology::Topology, LinkId,
};

use super::{candidate_is_feasible, hosting_endpoints, Mapper};

/// 残容量最大のノードを選ぶGreedyマッパー
///
/// Hosts each virtual node on the physical node with the largest remaining
/// capacity, then routes each virtual link over the first candidate path
/// with enough bandwidth on every hop.
#[derive(Debug, Default)]
pub struct GreedyMapper;

impl GreedyMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Mapper for GreedyMapper {
    fn map_request(
        &mut self,
        request: &Request,
        substrate: &mut SubstrateNetwork,
        topology: &Topology,
    ) -> Result<Mapping, EmbeddingError> {
        let mut mapping = Mapping::new();

        for virtual_node in &request.nodes {
            let host = substrate
                .get_nodes_with_remaining_capacity_greater_than(virtual_node.capacity)
                .into_iter()
                .max_by(|a, b| a.remaining_capacity().total_cmp(&b.remaining_capacity()))
                .map(|node| node.id);

            let host = match host {
                Some(host) => host,
                None => {
                    mapping.clear_mappings(substrate);
                    return Err(EmbeddingError::ResourceExhausted(request.index));
                }
            };

            mapping.add_node_mapping(virtual_node, host, substrate)?;
        }

        for virtual_link in &request.links {
            let path = match search_path(&mapping, virtual_link, substrate, topology) {
                Some(path) => path,
                None => {
                    mapping.clear_mappings(substrate);
                    return Err(EmbeddingError::ResourceExhausted(request.index));
                }
            };

            mapping.add_link_mapping(virtual_link, path, substrate)?;
        }

        Ok(mapping)
    }
}

fn search_path(
    mapping: &Mapping,
    virtual_link: &VirtualLink,
    substrate: &SubstrateNetwork,
    topology: &Topology,
) -> Option<Vec<LinkId>> {
    let (source_host, destiny_host) = hosting_endpoints(mapping, virtual_link);

    // 同一ホスト上の仮想リンクは物理リンクを使わない
    if source_host == destiny_host {
        return Some(vec![]);
    }

    topology
        .get_route_candidates(source_host, destiny_host)
        .iter()
        .find(|candidate| candidate_is_feasible(candidate, substrate, virtual_link.bandwidth))
        .map(|candidate| candidate.link_route.clone())
}

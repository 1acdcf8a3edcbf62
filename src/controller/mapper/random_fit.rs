use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::Config, error::EmbeddingError, mapping::Mapping, network::SubstrateNetwork,
    request::{Request, VirtualLink}, topology::Topology, LinkId,
};

use super::{candidate_is_feasible, hosting_endpoints, Mapper};

/// ランダムに割当先を選ぶマッパー
///
/// Picks a uniformly random capable host per virtual node and tries the
/// route candidates in random order. Reproducible through the simulation
/// seed.
#[derive(Debug)]
pub struct RandomFitMapper {
    rng: ChaCha8Rng,
}

impl RandomFitMapper {
    pub fn new(config: &Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.simulation.random_seed),
        }
    }
}

impl Mapper for RandomFitMapper {
    fn map_request(
        &mut self,
        request: &Request,
        substrate: &mut SubstrateNetwork,
        topology: &Topology,
    ) -> Result<Mapping, EmbeddingError> {
        let mut mapping = Mapping::new();

        for virtual_node in &request.nodes {
            let capable =
                substrate.get_nodes_with_remaining_capacity_greater_than(virtual_node.capacity);
            if capable.is_empty() {
                mapping.clear_mappings(substrate);
                return Err(EmbeddingError::ResourceExhausted(request.index));
            }
            let host = capable[self.rng.gen_range(0..capable.len())].id;

            mapping.add_node_mapping(virtual_node, host, substrate)?;
        }

        for virtual_link in &request.links {
            let path = self.search_path(&mapping, virtual_link, substrate, topology);
            let path = match path {
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

impl RandomFitMapper {
    fn search_path(
        &mut self,
        mapping: &Mapping,
        virtual_link: &VirtualLink,
        substrate: &SubstrateNetwork,
        topology: &Topology,
    ) -> Option<Vec<LinkId>> {
        let (source_host, destiny_host) = hosting_endpoints(mapping, virtual_link);

        if source_host == destiny_host {
            return Some(vec![]);
        }

        let candidates = topology.get_route_candidates(source_host, destiny_host);

        // 候補の探索順をシャッフルする
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        let mut n = order.len();
        while n > 1 {
            let k = self.rng.gen_range(0..n);
            n -= 1;
            order.swap(n, k);
        }

        order
            .into_iter()
            .map(|i| &candidates[i])
            .find(|candidate| candidate_is_feasible(candidate, substrate, virtual_link.bandwidth))
            .map(|candidate| candidate.link_route.clone())
    }
}

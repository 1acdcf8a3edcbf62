use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{config::Config, vne_core::dist::get_poisson_interval, VirtualLinkId, VirtualNodeId};

/// 仮想ノード
#[derive(Debug, Clone)]
pub struct VirtualNode {
    pub id: VirtualNodeId,
    /// Required capacity on the hosting physical node.
    pub capacity: f64,
}

/// 仮想リンク
#[derive(Debug, Clone)]
pub struct VirtualLink {
    pub id: VirtualLinkId,
    pub src: VirtualNodeId,
    pub dst: VirtualNodeId,
    /// Required bandwidth on every physical link of the hosting path.
    pub bandwidth: f64,
}

/// 仮想ネットワーク要求
///
/// One request to embed: an ordered set of virtual nodes and links with
/// demands, alive from `start_time` until `end_time`.
#[derive(Debug, Clone)]
pub struct Request {
    pub index: usize,
    pub nodes: Vec<VirtualNode>,
    pub links: Vec<VirtualLink>,
    pub start_time: usize,
    pub end_time: usize,
    pub duration: usize,
}

impl Request {
    pub fn new(
        index: usize,
        nodes: Vec<VirtualNode>,
        links: Vec<VirtualLink>,
        start: usize,
        duration: usize,
    ) -> Self {
        let end = start + duration;
        Self {
            index,
            nodes,
            links,
            start_time: start,
            end_time: end,
            duration,
        }
    }
}

/// 要求リストを生成する
///
/// Arrival and holding times follow the Exponential Distribution; the whole
/// list is reproducible from `config.simulation.random_seed`.
pub fn get_request_list(config: &Config) -> Vec<Request> {
    let traffic = &config.traffic;
    let mut rng = ChaCha8Rng::seed_from_u64(config.simulation.random_seed);

    let mut request_list = Vec::with_capacity(traffic.request_num);
    let mut arrival_time = 0;

    for index in 0..traffic.request_num {
        arrival_time += get_poisson_interval(&mut rng, traffic.arrival_lambda);
        let duration = get_poisson_interval(&mut rng, traffic.holding_lambda);

        let request = generate_request(config, &mut rng, index, arrival_time, duration);
        request_list.push(request);
    }

    request_list
}

fn generate_request(
    config: &Config,
    rng: &mut ChaCha8Rng,
    index: usize,
    start: usize,
    duration: usize,
) -> Request {
    let traffic = &config.traffic;
    let node_count = rng.gen_range(traffic.virtual_nodes_min..=traffic.virtual_nodes_max);

    let nodes: Vec<VirtualNode> = (0..node_count)
        .map(|id| VirtualNode {
            id: VirtualNodeId::new(id),
            capacity: rng.gen_range(traffic.capacity_min..=traffic.capacity_max),
        })
        .collect();

    // Chain links keep the virtual topology connected; extra links are drawn
    // per non-adjacent pair.
    let mut links: Vec<VirtualLink> = vec![];
    for id in 1..node_count {
        links.push(VirtualLink {
            id: VirtualLinkId::new(links.len()),
            src: VirtualNodeId::new(id - 1),
            dst: VirtualNodeId::new(id),
            bandwidth: rng.gen_range(traffic.bandwidth_min..=traffic.bandwidth_max),
        });
    }
    for src in 0..node_count {
        for dst in src + 2..node_count {
            if rng.gen_range(0.0..1.0) < traffic.extra_link_ratio {
                links.push(VirtualLink {
                    id: VirtualLinkId::new(links.len()),
                    src: VirtualNodeId::new(src),
                    dst: VirtualNodeId::new(dst),
                    bandwidth: rng.gen_range(traffic.bandwidth_min..=traffic.bandwidth_max),
                });
            }
        }
    }

    Request::new(index, nodes, links, start, duration)
}

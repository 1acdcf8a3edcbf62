use std::fmt::Display;

use fxhash::FxHashMap;

use crate::{
    config::Config,
    topology::Topology,
    utils::{get_average, get_maximum, get_std_dev},
    LinkId, NodeId,
};

mod physical;
pub use physical::{PhysicalLink, PhysicalNode};

/// 物理網の状態
///
/// Holds the physical topology and its current load. Created once per
/// simulation run and mutated in place by the mapping ledger; never copied
/// during a run.
#[derive(Debug, Clone)]
pub struct SubstrateNetwork {
    physical_nodes: FxHashMap<NodeId, PhysicalNode>,
    physical_links: FxHashMap<LinkId, PhysicalLink>,
}

impl Display for SubstrateNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Substrate: {} nodes, {} links",
            self.physical_nodes.len(),
            self.physical_links.len()
        )?;
        for node in self.physical_nodes.values() {
            writeln!(f, "{node}")?;
        }
        for link in self.physical_links.values() {
            writeln!(f, "{link}")?;
        }

        Ok(())
    }
}

impl SubstrateNetwork {
    /// Builds the substrate for a topology with the capacities and
    /// availabilities taken from the config.
    pub fn new(config: &Config, topology: &Topology) -> Self {
        let nw = &config.network;

        let nodes = (0..topology.node_count())
            .map(|id| {
                PhysicalNode::new(
                    id,
                    nw.node_capacity,
                    nw.node_availability,
                    nw.intermediary_node_availability,
                )
            })
            .collect();

        let links = topology
            .edges
            .iter()
            .map(|edge| {
                PhysicalLink::new(
                    edge.src.into(),
                    edge.dst.into(),
                    nw.link_bandwidth,
                    nw.link_cost,
                    nw.link_delay,
                    nw.link_availability,
                )
            })
            .collect();

        Self::from_parts(nodes, links)
    }

    pub fn from_parts(nodes: Vec<PhysicalNode>, links: Vec<PhysicalLink>) -> Self {
        let physical_nodes = nodes.into_iter().map(|n| (n.id, n)).collect();
        let physical_links = links.into_iter().map(|l| (l.id, l)).collect();

        Self {
            physical_nodes,
            physical_links,
        }
    }

    pub fn node_count(&self) -> usize {
        self.physical_nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.physical_links.len()
    }

    pub fn get_nodes(&self) -> &FxHashMap<NodeId, PhysicalNode> {
        &self.physical_nodes
    }

    pub fn get_links(&self) -> &FxHashMap<LinkId, PhysicalLink> {
        &self.physical_links
    }

    /// IDで指定して物理ノード(参照)を取得する
    pub fn get_node_by_id(&self, id: NodeId) -> &PhysicalNode {
        match self.physical_nodes.get(&id) {
            Some(node) => node,
            None => panic!("The physical node {id} does not exist."),
        }
    }

    /// IDで指定して物理リンク(参照)を取得する
    pub fn get_link_by_id(&self, id: LinkId) -> &PhysicalLink {
        match self.physical_links.get(&id) {
            Some(link) => link,
            None => panic!("The physical link {id} does not exist."),
        }
    }

    /// 残容量がthresholdより大きい物理ノードをすべて返す
    pub fn get_nodes_with_remaining_capacity_greater_than(
        &self,
        threshold: f64,
    ) -> Vec<&PhysicalNode> {
        self.physical_nodes
            .values()
            .filter(|node| node.remaining_capacity() > threshold)
            .collect()
    }

    pub fn add_node_load(&mut self, id: NodeId, amount: f64) {
        match self.physical_nodes.get_mut(&id) {
            Some(node) => node.add_load(amount),
            None => panic!("The physical node {id} does not exist."),
        }
    }

    pub fn remove_node_load(&mut self, id: NodeId, amount: f64) {
        match self.physical_nodes.get_mut(&id) {
            Some(node) => node.remove_load(amount),
            None => panic!("The physical node {id} does not exist."),
        }
    }

    pub fn add_link_load(&mut self, id: LinkId, amount: f64) {
        match self.physical_links.get_mut(&id) {
            Some(link) => link.add_bandwidth_load(amount),
            None => panic!("The physical link {id} does not exist."),
        }
    }

    pub fn remove_link_load(&mut self, id: LinkId, amount: f64) {
        match self.physical_links.get_mut(&id) {
            Some(link) => link.remove_bandwidth_load(amount),
            None => panic!("The physical link {id} does not exist."),
        }
    }

    pub fn get_average_nodes_load(&self) -> f64 {
        get_average(&self.collect_nodes_load())
    }

    pub fn get_maximum_nodes_load(&self) -> f64 {
        get_maximum(&self.collect_nodes_load())
    }

    pub fn get_nodes_load_std_dev(&self) -> f64 {
        get_std_dev(&self.collect_nodes_load())
    }

    pub fn get_average_links_bandwidth_load(&self) -> f64 {
        get_average(&self.collect_links_bandwidth_load())
    }

    pub fn get_maximum_links_bandwidth_load(&self) -> f64 {
        get_maximum(&self.collect_links_bandwidth_load())
    }

    pub fn get_links_bandwidth_load_std_dev(&self) -> f64 {
        get_std_dev(&self.collect_links_bandwidth_load())
    }

    /// Load ratio `load / capacity` of every physical node.
    fn collect_nodes_load(&self) -> Vec<f64> {
        self.physical_nodes
            .values()
            .map(|node| node.load() / node.capacity)
            .collect()
    }

    /// Bandwidth load ratio of every physical link.
    fn collect_links_bandwidth_load(&self) -> Vec<f64> {
        self.physical_links
            .values()
            .map(|link| link.bandwidth_load() / link.bandwidth_capacity)
            .collect()
    }
}

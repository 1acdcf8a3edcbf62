use fxhash::{FxHashMap, FxHashSet};
use rust_decimal::Decimal;

use crate::{
    error::ConflictError,
    network::SubstrateNetwork,
    request::{VirtualLink, VirtualNode},
    LinkId, NodeId, VirtualLinkId, VirtualNodeId,
};

/// One virtual node placed on one physical node. The demanded capacity is
/// recorded so that `clear` subtracts exactly what was added.
#[derive(Debug, Clone)]
struct NodeAssignment {
    host: NodeId,
    capacity: f64,
}

/// One virtual link routed over an ordered physical path (possibly empty,
/// when both endpoints share a host).
#[derive(Debug, Clone)]
struct LinkAssignment {
    path: Vec<LinkId>,
    bandwidth: f64,
    src: VirtualNodeId,
    dst: VirtualNodeId,
}

/// 仮想ネットワークの物理網上へのマッピング台帳
///
/// Records one request's placement, enforces at-most-once placement per
/// virtual element, and accounts substrate load. The substrate is passed
/// into every mutating call so that load changes stay explicit.
///
/// `node_usage` / `link_usage` count the virtual users of each physical
/// resource, so in-use queries and the sharing rate need no scan over the
/// mappings.
#[derive(Debug, Clone)]
pub struct Mapping {
    nodes_mapping: FxHashMap<VirtualNodeId, NodeAssignment>,
    links_mapping: FxHashMap<VirtualLinkId, LinkAssignment>,
    node_usage: FxHashMap<NodeId, usize>,
    link_usage: FxHashMap<LinkId, usize>,
    handle_resources_load: bool,
}

impl Default for Mapping {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapping {
    pub fn new() -> Self {
        Self {
            nodes_mapping: FxHashMap::default(),
            links_mapping: FxHashMap::default(),
            node_usage: FxHashMap::default(),
            link_usage: FxHashMap::default(),
            handle_resources_load: true,
        }
    }

    /// 仮想ノードを物理ノードへ割り当てる
    ///
    /// The ledger does not re-validate capacity; checking it beforehand is
    /// the mapper's job.
    pub fn add_node_mapping(
        &mut self,
        virtual_node: &VirtualNode,
        host: NodeId,
        substrate: &mut SubstrateNetwork,
    ) -> Result<(), ConflictError> {
        if self.nodes_mapping.contains_key(&virtual_node.id) {
            return Err(ConflictError::NodeAlreadyMapped(virtual_node.id));
        }

        if self.handle_resources_load {
            substrate.add_node_load(host, virtual_node.capacity);
        }

        *self.node_usage.entry(host).or_insert(0) += 1;
        self.nodes_mapping.insert(
            virtual_node.id,
            NodeAssignment {
                host,
                capacity: virtual_node.capacity,
            },
        );

        Ok(())
    }

    /// 仮想リンクを物理パスへ割り当てる
    pub fn add_link_mapping(
        &mut self,
        virtual_link: &VirtualLink,
        path: Vec<LinkId>,
        substrate: &mut SubstrateNetwork,
    ) -> Result<(), ConflictError> {
        if self.links_mapping.contains_key(&virtual_link.id) {
            return Err(ConflictError::LinkAlreadyMapped(virtual_link.id));
        }

        if self.handle_resources_load {
            for link_id in &path {
                substrate.add_link_load(*link_id, virtual_link.bandwidth);
            }
        }

        for link_id in &path {
            *self.link_usage.entry(*link_id).or_insert(0) += 1;
        }
        self.links_mapping.insert(
            virtual_link.id,
            LinkAssignment {
                path,
                bandwidth: virtual_link.bandwidth,
                src: virtual_link.src,
                dst: virtual_link.dst,
            },
        );

        Ok(())
    }

    pub fn is_node_mapped(&self, virtual_node: VirtualNodeId) -> bool {
        self.nodes_mapping.contains_key(&virtual_node)
    }

    pub fn is_link_mapped(&self, virtual_link: VirtualLinkId) -> bool {
        self.links_mapping.contains_key(&virtual_link)
    }

    pub fn get_hosting_node_for(&self, virtual_node: VirtualNodeId) -> Option<NodeId> {
        self.nodes_mapping.get(&virtual_node).map(|a| a.host)
    }

    pub fn get_hosting_links_for(&self, virtual_link: VirtualLinkId) -> Option<&[LinkId]> {
        self.links_mapping.get(&virtual_link).map(|a| a.path.as_slice())
    }

    pub fn is_node_in_use(&self, node: NodeId) -> bool {
        self.node_usage.get(&node).is_some_and(|&count| count > 0)
    }

    pub fn is_link_in_use(&self, link: LinkId) -> bool {
        self.link_usage.get(&link).is_some_and(|&count| count > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes_mapping.is_empty() && self.links_mapping.is_empty()
    }

    /// マッピングを解除し，負荷を元へ戻す
    ///
    /// Subtracts every load contribution this mapping added, symmetric to
    /// `add_node_mapping` / `add_link_mapping`. Safe on an empty mapping.
    pub fn clear_mappings(&mut self, substrate: &mut SubstrateNetwork) {
        if self.handle_resources_load {
            for assignment in self.nodes_mapping.values() {
                substrate.remove_node_load(assignment.host, assignment.capacity);
            }
            for assignment in self.links_mapping.values() {
                for link_id in &assignment.path {
                    substrate.remove_link_load(*link_id, assignment.bandwidth);
                }
            }
        }

        self.nodes_mapping.clear();
        self.links_mapping.clear();
        self.node_usage.clear();
        self.link_usage.clear();
    }

    /// Switches the mapping into accounting-free mode for all future
    /// placements. Load already applied stays applied; a later
    /// `clear_mappings` will not subtract it either.
    pub fn deactivate_resources_handling(&mut self) {
        self.handle_resources_load = false;
    }

    /// マッピング全体の稼働率を計算する
    ///
    /// Product of the availability of every distinct hosting node, every
    /// distinct path link, and the intermediary availability of every
    /// distinct transit node. A node is a transit node of a path when it is
    /// an endpoint of one of the path's links but hosts neither endpoint of
    /// that virtual link. Resources shared by several virtual elements
    /// contribute exactly once.
    pub fn get_availability(&self, substrate: &SubstrateNetwork) -> Decimal {
        let mut uniq_physical_links: FxHashSet<LinkId> = FxHashSet::default();
        let mut uniq_intermediary_nodes: FxHashSet<NodeId> = FxHashSet::default();

        for assignment in self.links_mapping.values() {
            let source_host = self.get_hosting_node_for(assignment.src);
            let destiny_host = self.get_hosting_node_for(assignment.dst);

            for link_id in &assignment.path {
                uniq_physical_links.insert(*link_id);

                let hosting_link = substrate.get_link_by_id(*link_id);
                for endpoint in [hosting_link.src, hosting_link.dst] {
                    if Some(endpoint) != source_host && Some(endpoint) != destiny_host {
                        uniq_intermediary_nodes.insert(endpoint);
                    }
                }
            }
        }

        let mut availability = Decimal::ONE;
        for host in self.uniq_hosting_nodes() {
            availability *= substrate.get_node_by_id(host).availability;
        }
        for link_id in uniq_physical_links {
            availability *= substrate.get_link_by_id(link_id).availability;
        }
        for node_id in uniq_intermediary_nodes {
            availability *= substrate.get_node_by_id(node_id).intermediary_availability;
        }

        availability
    }

    /// 共有されている物理ノードの割合を計算する
    ///
    /// Fraction, over `nodes_number`, of distinct physical nodes hosting
    /// more than one virtual node of this mapping.
    pub fn get_node_sharing_rate(&self, nodes_number: usize) -> f64 {
        let nodes_being_shared = self
            .node_usage
            .values()
            .filter(|&&count| count > 1)
            .count();

        nodes_being_shared as f64 / nodes_number as f64
    }

    fn uniq_hosting_nodes(&self) -> FxHashSet<NodeId> {
        self.nodes_mapping.values().map(|a| a.host).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{PhysicalLink, PhysicalNode};
    use crate::request::{VirtualLink, VirtualNode};

    // Availabilities chosen exactly representable in f64 so that decimal
    // products can be written down literally.
    const NODE_AV: f64 = 0.5;
    const TRANSIT_AV: f64 = 0.75;
    const LINK_AV: f64 = 0.25;

    fn substrate() -> SubstrateNetwork {
        // Path topology 0-1-2-3, plus node 4 attached to 0.
        let nodes = (0..5)
            .map(|i| PhysicalNode::new(i, 100.0, NODE_AV, TRANSIT_AV))
            .collect();
        let links = vec![
            PhysicalLink::new(0, 1, 50.0, 1.0, 1.0, LINK_AV),
            PhysicalLink::new(1, 2, 50.0, 1.0, 1.0, LINK_AV),
            PhysicalLink::new(2, 3, 50.0, 1.0, 1.0, LINK_AV),
            PhysicalLink::new(0, 4, 50.0, 1.0, 1.0, LINK_AV),
        ];

        SubstrateNetwork::from_parts(nodes, links)
    }

    fn vnode(id: usize, capacity: f64) -> VirtualNode {
        VirtualNode {
            id: VirtualNodeId::new(id),
            capacity,
        }
    }

    fn vlink(id: usize, src: usize, dst: usize, bandwidth: f64) -> VirtualLink {
        VirtualLink {
            id: VirtualLinkId::new(id),
            src: VirtualNodeId::new(src),
            dst: VirtualNodeId::new(dst),
            bandwidth,
        }
    }

    fn dec(value: f64) -> Decimal {
        Decimal::try_from(value).unwrap()
    }

    #[test]
    fn place_then_clear_is_load_neutral() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        mapping
            .add_node_mapping(&vnode(0, 10.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(1, 20.0), NodeId::new(3), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(
                &vlink(0, 0, 1, 5.0),
                vec![
                    LinkId::between(0, 1),
                    LinkId::between(1, 2),
                    LinkId::between(2, 3),
                ],
                &mut substrate,
            )
            .unwrap();

        assert_eq!(10.0, substrate.get_node_by_id(NodeId::new(0)).load());
        assert_eq!(
            5.0,
            substrate
                .get_link_by_id(LinkId::between(1, 2))
                .bandwidth_load()
        );

        mapping.clear_mappings(&mut substrate);

        for node in substrate.get_nodes().values() {
            assert_eq!(0.0, node.load());
        }
        for link in substrate.get_links().values() {
            assert_eq!(0.0, link.bandwidth_load());
        }
        assert!(mapping.is_empty());
    }

    #[test]
    fn clear_on_empty_mapping_is_noop() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        mapping.clear_mappings(&mut substrate);

        assert!(mapping.is_empty());
    }

    #[test]
    fn double_node_mapping_is_a_conflict() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();
        let node = vnode(0, 10.0);

        mapping
            .add_node_mapping(&node, NodeId::new(0), &mut substrate)
            .unwrap();
        let err = mapping
            .add_node_mapping(&node, NodeId::new(1), &mut substrate)
            .unwrap_err();

        assert_eq!(ConflictError::NodeAlreadyMapped(node.id), err);
        // The rejected call must not have touched the load.
        assert_eq!(0.0, substrate.get_node_by_id(NodeId::new(1)).load());
    }

    #[test]
    fn double_link_mapping_is_a_conflict() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();
        let link = vlink(0, 0, 1, 5.0);

        mapping
            .add_link_mapping(&link, vec![LinkId::between(0, 1)], &mut substrate)
            .unwrap();
        let err = mapping
            .add_link_mapping(&link, vec![LinkId::between(1, 2)], &mut substrate)
            .unwrap_err();

        assert_eq!(ConflictError::LinkAlreadyMapped(link.id), err);
        assert_eq!(
            0.0,
            substrate
                .get_link_by_id(LinkId::between(1, 2))
                .bandwidth_load()
        );
    }

    #[test]
    fn availability_of_empty_mapping_is_one() {
        let substrate = substrate();
        let mapping = Mapping::new();

        assert_eq!(Decimal::ONE, mapping.get_availability(&substrate));
    }

    #[test]
    fn availability_counts_a_shared_host_once() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(2), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(1, 1.0), NodeId::new(2), &mut substrate)
            .unwrap();

        assert_eq!(dec(NODE_AV), mapping.get_availability(&substrate));
    }

    #[test]
    fn availability_multiplies_hosts_links_and_intermediaries() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        // Endpoints on 0 and 3; path 0-1-2-3 makes 1 and 2 transit nodes.
        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(1, 1.0), NodeId::new(3), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(
                &vlink(0, 0, 1, 1.0),
                vec![
                    LinkId::between(0, 1),
                    LinkId::between(1, 2),
                    LinkId::between(2, 3),
                ],
                &mut substrate,
            )
            .unwrap();

        let expected = dec(NODE_AV)
            * dec(NODE_AV)
            * dec(LINK_AV)
            * dec(LINK_AV)
            * dec(LINK_AV)
            * dec(TRANSIT_AV)
            * dec(TRANSIT_AV);
        assert_eq!(expected, mapping.get_availability(&substrate));
    }

    #[test]
    fn availability_counts_foreign_host_as_intermediary() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        // Virtual node 2 lives on physical node 1, which also transits the
        // path of the virtual link between nodes 0 and 3. The exclusion only
        // covers the link's own endpoint hosts, so node 1 contributes both
        // its hosting and its intermediary availability.
        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(1, 1.0), NodeId::new(2), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(2, 1.0), NodeId::new(1), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(
                &vlink(0, 0, 1, 1.0),
                vec![LinkId::between(0, 1), LinkId::between(1, 2)],
                &mut substrate,
            )
            .unwrap();

        let expected = dec(NODE_AV)
            * dec(NODE_AV)
            * dec(NODE_AV)
            * dec(LINK_AV)
            * dec(LINK_AV)
            * dec(TRANSIT_AV);
        assert_eq!(expected, mapping.get_availability(&substrate));
    }

    #[test]
    fn same_host_virtual_link_adds_no_links_or_intermediaries() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(1, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(&vlink(0, 0, 1, 5.0), vec![], &mut substrate)
            .unwrap();

        assert_eq!(dec(NODE_AV), mapping.get_availability(&substrate));
        for link in substrate.get_links().values() {
            assert_eq!(0.0, link.bandwidth_load());
        }
    }

    #[test]
    fn node_sharing_rate_counts_shared_hosts_once() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_node_mapping(&vnode(1, 1.0), NodeId::new(1), &mut substrate)
            .unwrap();
        assert_eq!(0.0, mapping.get_node_sharing_rate(5));

        mapping
            .add_node_mapping(&vnode(2, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        assert_eq!(0.2, mapping.get_node_sharing_rate(5));

        // A third virtual node on the same host does not count it again.
        mapping
            .add_node_mapping(&vnode(3, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        assert_eq!(0.2, mapping.get_node_sharing_rate(5));

        mapping
            .add_node_mapping(&vnode(4, 1.0), NodeId::new(1), &mut substrate)
            .unwrap();
        assert_eq!(0.4, mapping.get_node_sharing_rate(5));
    }

    #[test]
    fn in_use_queries_follow_the_mapping() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();

        assert!(!mapping.is_node_in_use(NodeId::new(0)));

        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(&vlink(0, 0, 0, 1.0), vec![LinkId::between(0, 1)], &mut substrate)
            .unwrap();

        assert!(mapping.is_node_in_use(NodeId::new(0)));
        assert!(mapping.is_link_in_use(LinkId::between(0, 1)));
        assert!(!mapping.is_link_in_use(LinkId::between(1, 2)));

        mapping.clear_mappings(&mut substrate);

        assert!(!mapping.is_node_in_use(NodeId::new(0)));
        assert!(!mapping.is_link_in_use(LinkId::between(0, 1)));
    }

    #[test]
    fn deactivated_mapping_leaves_load_untouched() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();
        mapping.deactivate_resources_handling();

        mapping
            .add_node_mapping(&vnode(0, 10.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(&vlink(0, 0, 0, 5.0), vec![LinkId::between(0, 1)], &mut substrate)
            .unwrap();

        assert_eq!(0.0, substrate.get_node_by_id(NodeId::new(0)).load());
        assert_eq!(
            0.0,
            substrate
                .get_link_by_id(LinkId::between(0, 1))
                .bandwidth_load()
        );

        // Bookkeeping still works without accounting.
        assert!(mapping.is_node_mapped(VirtualNodeId::new(0)));
        mapping.clear_mappings(&mut substrate);
        assert!(mapping.is_empty());
    }

    #[test]
    fn lookups_return_recorded_assignments() {
        let mut substrate = substrate();
        let mut mapping = Mapping::new();
        let path = vec![LinkId::between(0, 1), LinkId::between(1, 2)];

        mapping
            .add_node_mapping(&vnode(0, 1.0), NodeId::new(0), &mut substrate)
            .unwrap();
        mapping
            .add_link_mapping(&vlink(0, 0, 0, 1.0), path.clone(), &mut substrate)
            .unwrap();

        assert!(mapping.is_node_mapped(VirtualNodeId::new(0)));
        assert!(!mapping.is_node_mapped(VirtualNodeId::new(9)));
        assert_eq!(
            Some(NodeId::new(0)),
            mapping.get_hosting_node_for(VirtualNodeId::new(0))
        );
        assert_eq!(
            Some(path.as_slice()),
            mapping.get_hosting_links_for(VirtualLinkId::new(0))
        );
        assert_eq!(None, mapping.get_hosting_node_for(VirtualNodeId::new(9)));
    }
}

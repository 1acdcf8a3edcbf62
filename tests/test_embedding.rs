use rust_decimal::Decimal;

use vne_sim::config::Config;
use vne_sim::controller::mapper::{GreedyMapper, Mapper, RandomFitMapper};
use vne_sim::error::EmbeddingError;
use vne_sim::network::SubstrateNetwork;
use vne_sim::request::{Request, VirtualLink, VirtualNode};
use vne_sim::topology::Topology;
use vne_sim::{VirtualLinkId, VirtualNodeId};

fn path_matrix(n: usize) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![false; n]; n];
    for i in 0..n - 1 {
        matrix[i][i + 1] = true;
        matrix[i + 1][i] = true;
    }

    matrix
}

fn build_request(index: usize, capacities: &[f64], links: &[(usize, usize, f64)]) -> Request {
    let nodes = capacities
        .iter()
        .enumerate()
        .map(|(id, &capacity)| VirtualNode {
            id: VirtualNodeId::new(id),
            capacity,
        })
        .collect();
    let links = links
        .iter()
        .enumerate()
        .map(|(id, &(src, dst, bandwidth))| VirtualLink {
            id: VirtualLinkId::new(id),
            src: VirtualNodeId::new(src),
            dst: VirtualNodeId::new(dst),
            bandwidth,
        })
        .collect();

    Request::new(index, nodes, links, 0, 100)
}

#[test]
fn greedy_embeds_and_releases_a_request() {
    let config = Config::for_tests();
    let topology = Topology::from_link_matrix("path4", path_matrix(4));
    let mut substrate = SubstrateNetwork::new(&config, &topology);
    let mut mapper = GreedyMapper::new();

    let request = build_request(0, &[10.0, 20.0], &[(0, 1, 5.0)]);
    let mut mapping = mapper
        .map_request(&request, &mut substrate, &topology)
        .unwrap();

    for virtual_node in &request.nodes {
        assert!(mapping.is_node_mapped(virtual_node.id));
    }
    for virtual_link in &request.links {
        assert!(mapping.is_link_mapped(virtual_link.id));
    }

    let total_node_load: f64 = substrate.get_nodes().values().map(|n| n.load()).sum();
    assert!((total_node_load - 30.0).abs() < 1e-9);

    mapping.clear_mappings(&mut substrate);

    for node in substrate.get_nodes().values() {
        assert_eq!(0.0, node.load());
    }
    for link in substrate.get_links().values() {
        assert_eq!(0.0, link.bandwidth_load());
    }
}

#[test]
fn accepted_mapping_has_a_probability_availability() {
    let config = Config::for_tests();
    let topology = Topology::from_link_matrix("path4", path_matrix(4));
    let mut substrate = SubstrateNetwork::new(&config, &topology);
    let mut mapper = GreedyMapper::new();

    let request = build_request(0, &[10.0, 10.0, 10.0], &[(0, 1, 5.0), (1, 2, 5.0)]);
    let mapping = mapper
        .map_request(&request, &mut substrate, &topology)
        .unwrap();

    let availability = mapping.get_availability(&substrate);
    assert!(availability > Decimal::ZERO);
    assert!(availability <= Decimal::ONE);
}

#[test]
fn oversized_node_demand_is_a_rejection() {
    let config = Config::for_tests();
    let topology = Topology::from_link_matrix("path4", path_matrix(4));
    let mut substrate = SubstrateNetwork::new(&config, &topology);
    let mut mapper = GreedyMapper::new();

    let request = build_request(0, &[150.0], &[]);
    let err = mapper
        .map_request(&request, &mut substrate, &topology)
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::ResourceExhausted(0)));
}

#[test]
fn partial_placement_is_rolled_back_by_the_mapper() {
    let config = Config::for_tests();
    // Single substrate node: the second virtual node cannot fit.
    let topology = Topology::from_link_matrix("single", vec![vec![false]]);
    let mut substrate = SubstrateNetwork::new(&config, &topology);
    let mut mapper = GreedyMapper::new();

    let request = build_request(0, &[60.0, 60.0], &[]);
    let err = mapper
        .map_request(&request, &mut substrate, &topology)
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::ResourceExhausted(0)));
    // The first placement must not stay visible after the failure.
    for node in substrate.get_nodes().values() {
        assert_eq!(0.0, node.load());
    }
}

#[test]
fn bandwidth_exhaustion_is_rolled_back_too() {
    let config = Config::for_tests();
    let topology = Topology::from_link_matrix("path4", path_matrix(4));
    let mut substrate = SubstrateNetwork::new(&config, &topology);
    let mut mapper = GreedyMapper::new();

    let request = build_request(0, &[10.0, 10.0], &[(0, 1, 150.0)]);
    let err = mapper
        .map_request(&request, &mut substrate, &topology)
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::ResourceExhausted(0)));
    for node in substrate.get_nodes().values() {
        assert_eq!(0.0, node.load());
    }
    for link in substrate.get_links().values() {
        assert_eq!(0.0, link.bandwidth_load());
    }
}

#[test]
fn random_fit_embeds_a_request_reproducibly() {
    let config = Config::for_tests();
    let topology = Topology::from_link_matrix("path4", path_matrix(4));

    let mut first_hosts = vec![];
    for round in 0..2 {
        let mut substrate = SubstrateNetwork::new(&config, &topology);
        let mut mapper = RandomFitMapper::new(&config);

        let request = build_request(0, &[10.0, 10.0], &[(0, 1, 5.0)]);
        let mapping = mapper
            .map_request(&request, &mut substrate, &topology)
            .unwrap();

        let hosts: Vec<_> = request
            .nodes
            .iter()
            .map(|vn| mapping.get_hosting_node_for(vn.id))
            .collect();
        first_hosts.push(hosts);

        assert!(mapping.get_availability(&substrate) > Decimal::ZERO, "round {round}");
    }

    assert_eq!(first_hosts[0], first_hosts[1]);
}

use vne_sim::config::Config;
use vne_sim::controller::{dynamic, mapper};
use vne_sim::network::SubstrateNetwork;
use vne_sim::request;
use vne_sim::topology::Topology;

fn ring_matrix(n: usize) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![false; n]; n];
    for i in 0..n {
        let j = (i + 1) % n;
        matrix[i][j] = true;
        matrix[j][i] = true;
    }

    matrix
}

fn run(config: &Config) -> (SubstrateNetwork, dynamic::SimulationResult) {
    let topology = Topology::from_link_matrix("ring6", ring_matrix(6));
    let mut substrate = SubstrateNetwork::new(config, &topology);
    let request_list = request::get_request_list(config);

    let mut mapper = mapper::from_policy(config);
    let result = dynamic::dynamic_analysis(
        config,
        &mut substrate,
        &topology,
        mapper.as_mut(),
        &request_list,
    );

    (substrate, result)
}

#[test]
fn seeded_greedy_run_records_every_request() {
    let config = Config::for_tests();
    let (substrate, result) = run(&config);

    assert_eq!(config.traffic.request_num, result.request_num);
    assert_eq!(config.traffic.request_num, result.records.len());
    assert!(result.blocking_rate >= 0.0 && result.blocking_rate <= 1.0);
    assert!(result.accepted_num <= result.request_num);

    // A small request mix on an idle ring must not block everything.
    assert!(result.accepted_num > 0);

    for record in &result.records {
        if record.accepted {
            assert!(record.availability.is_some());
            assert!(record.node_sharing_rate.is_some());
        } else {
            assert!(record.availability.is_none());
            assert!(record.node_sharing_rate.is_none());
        }
    }

    // Every mapping is released at the end of the run.
    for node in substrate.get_nodes().values() {
        assert!(node.load().abs() < 1e-9);
    }
    for link in substrate.get_links().values() {
        assert!(link.bandwidth_load().abs() < 1e-9);
    }
}

#[test]
fn random_fit_run_is_load_neutral_as_well() {
    let mut config = Config::for_tests();
    config.policy.mapper_policy = "random_fit".to_string();

    let (substrate, result) = run(&config);

    assert_eq!(config.traffic.request_num, result.records.len());
    for node in substrate.get_nodes().values() {
        assert!(node.load().abs() < 1e-9);
    }
    for link in substrate.get_links().values() {
        assert!(link.bandwidth_load().abs() < 1e-9);
    }
    assert_eq!("random_fit", result.policy);
}

#[test]
fn identical_seeds_give_identical_outcomes() {
    let config = Config::for_tests();

    let (_, a) = run(&config);
    let (_, b) = run(&config);

    assert_eq!(a.blocking_rate, b.blocking_rate);
    assert_eq!(a.accepted_num, b.accepted_num);
    for (x, y) in a.records.iter().zip(b.records.iter()) {
        assert_eq!(x.accepted, y.accepted);
        assert_eq!(x.availability, y.availability);
    }
}

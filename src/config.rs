use serde_derive::{Deserialize, Serialize};

use crate::utils;

mod debug_config;
mod network_config;
mod policy_config;
mod simulation_config;
mod traffic_config;

pub use debug_config::DebugConfig;
pub use network_config::NetworkConfig;
pub use policy_config::PolicyConfig;
pub use simulation_config::SimulationConfig;
pub use traffic_config::TrafficConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub debug: DebugConfig,
    pub network: NetworkConfig,
    pub policy: PolicyConfig,
    pub traffic: TrafficConfig,
}

impl Config {
    /// Config構造体を作成する
    /// toml形式で書くこと．
    pub fn new(file_name: &str) -> Config {
        // configファイルを文字列として読込
        match utils::read_file(file_name) {
            Ok(contents) => {
                // 文字列をTOMLファイルとして読込
                match toml::from_str(&contents) {
                    Ok(config) => config,
                    Err(_) => panic!("TOMLファイルのパースに失敗しました。"),
                }
            }
            Err(_) => panic!("ファイルの読込に失敗しました。"),
        }
    }

    /// Fixture config for unit and integration tests.
    pub fn for_tests() -> Config {
        Config {
            simulation: SimulationConfig {
                random_seed: 42,
                outdir: "results".to_string(),
            },
            debug: DebugConfig {
                log_request_map: false,
                log_request_block: false,
                log_request_depart: false,
                log_load_snapshot: false,
            },
            network: NetworkConfig {
                topology: "nsfnet".to_string(),
                node_capacity: 100.0,
                link_bandwidth: 100.0,
                link_cost: 1.0,
                link_delay: 1.0,
                node_availability: 0.999,
                intermediary_node_availability: 0.9999,
                link_availability: 0.9995,
            },
            policy: PolicyConfig {
                mapper_policy: "greedy".to_string(),
            },
            traffic: TrafficConfig {
                request_num: 50,
                arrival_lambda: 0.05,
                holding_lambda: 0.001,
                virtual_nodes_min: 2,
                virtual_nodes_max: 5,
                capacity_min: 1.0,
                capacity_max: 10.0,
                bandwidth_min: 1.0,
                bandwidth_max: 10.0,
                extra_link_ratio: 0.3,
            },
        }
    }
}

use fxhash::FxHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use serde_derive::Serialize;

use crate::{
    config::Config,
    debugger,
    error::EmbeddingError,
    mapping::Mapping,
    network::SubstrateNetwork,
    request::Request,
    topology::Topology,
    utils::generate_uuid,
    vne_core::parameters::{PB_CHARS, PB_TEMPLATES},
};

use super::mapper::Mapper;

/// 1要求分の計測結果
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub index: usize,
    pub accepted: bool,
    /// Decimal probability, serialized as a string. Absent for blocked
    /// requests.
    pub availability: Option<Decimal>,
    pub node_sharing_rate: Option<f64>,
    pub average_nodes_load: f64,
    pub maximum_nodes_load: f64,
    pub nodes_load_std_dev: f64,
    pub average_links_bandwidth_load: f64,
    pub maximum_links_bandwidth_load: f64,
    pub links_bandwidth_load_std_dev: f64,
}

/// 1回のシミュレーションの結果
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub run_id: String,
    pub policy: String,
    pub random_seed: u64,
    pub request_num: usize,
    pub accepted_num: usize,
    pub blocking_rate: f64,
    pub records: Vec<RequestRecord>,
}

/// 要求を到着順に処理するシミュレーションループ
///
/// Requests arrive ordered by `start_time`; before each arrival every
/// mapping whose request has departed is released. A `ResourceExhausted`
/// outcome is recorded as a rejection and the run continues; a conflict is
/// a mapper defect and aborts the run.
pub fn dynamic_analysis(
    config: &Config,
    substrate: &mut SubstrateNetwork,
    topology: &Topology,
    mapper: &mut dyn Mapper,
    request_list: &[Request],
) -> SimulationResult {
    let mut live_mappings: FxHashMap<usize, Mapping> = FxHashMap::default();
    let mut records = Vec::with_capacity(request_list.len());
    let mut block_count = 0;

    let pb = ProgressBar::new(request_list.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PB_TEMPLATES)
            .unwrap()
            .progress_chars(PB_CHARS),
    );

    for request in request_list {
        let current_time = request.start_time;
        dynamic_release(config, substrate, request_list, current_time, &mut live_mappings);

        match mapper.map_request(request, substrate, topology) {
            Ok(mapping) => {
                debugger::log_request_map(config, substrate, &mapping, request);
                records.push(record_request(request, substrate, Some(&mapping)));
                live_mappings.insert(request.index, mapping);
            }
            Err(EmbeddingError::ResourceExhausted(_)) => {
                block_count += 1;
                debugger::log_request_block(config, request);
                records.push(record_request(request, substrate, None));
            }
            Err(EmbeddingError::Conflict(err)) => {
                debugger::log_alert(&format!("mapper defect: {err}"));
                panic!("mapper defect: {err}");
            }
        }

        debugger::log_load_snapshot(config, substrate);
        pb.inc(1);
    }

    // 終了時に残っているマッピングを解放する
    for mapping in live_mappings.values_mut() {
        mapping.clear_mappings(substrate);
    }
    pb.finish_and_clear();

    let accepted_num = request_list.len() - block_count;
    let blocking_rate = if request_list.is_empty() {
        0.0
    } else {
        (block_count as f64) / (request_list.len() as f64)
    };

    SimulationResult {
        run_id: generate_uuid().to_string(),
        policy: config.policy.mapper_policy.clone(),
        random_seed: config.simulation.random_seed,
        request_num: request_list.len(),
        accepted_num,
        blocking_rate,
        records,
    }
}

/// 退去時刻を過ぎた要求のマッピングを解放する
fn dynamic_release(
    config: &Config,
    substrate: &mut SubstrateNetwork,
    request_list: &[Request],
    current_time: usize,
    live_mappings: &mut FxHashMap<usize, Mapping>,
) {
    let departed: Vec<usize> = live_mappings
        .keys()
        .copied()
        .filter(|&index| request_list[index].end_time <= current_time)
        .collect();

    for index in departed {
        if let Some(mut mapping) = live_mappings.remove(&index) {
            mapping.clear_mappings(substrate);
            debugger::log_request_depart(config, &request_list[index]);
        }
    }
}

fn record_request(
    request: &Request,
    substrate: &SubstrateNetwork,
    mapping: Option<&Mapping>,
) -> RequestRecord {
    RequestRecord {
        index: request.index,
        accepted: mapping.is_some(),
        availability: mapping.map(|m| m.get_availability(substrate)),
        node_sharing_rate: mapping.map(|m| m.get_node_sharing_rate(substrate.node_count())),
        average_nodes_load: substrate.get_average_nodes_load(),
        maximum_nodes_load: substrate.get_maximum_nodes_load(),
        nodes_load_std_dev: substrate.get_nodes_load_std_dev(),
        average_links_bandwidth_load: substrate.get_average_links_bandwidth_load(),
        maximum_links_bandwidth_load: substrate.get_maximum_links_bandwidth_load(),
        links_bandwidth_load_std_dev: substrate.get_links_bandwidth_load_std_dev(),
    }
}

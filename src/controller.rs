use crate::{
    config::Config, network::SubstrateNetwork, request, topology::Topology,
};

pub mod dynamic;
pub mod mapper;
pub mod output;

use dynamic::SimulationResult;

/// シミュレーションを1回実行する
pub fn main(config: &Config) -> (SubstrateNetwork, Topology, SimulationResult) {
    let topology = Topology::new(config);
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

    output::save_config(config, &config.simulation.outdir);
    output::save_records(&config.simulation.outdir, &result);
    output::save_summary(&config.simulation.outdir, &result);

    (substrate, topology, result)
}

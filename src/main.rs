use std::env;

use vne_sim::{config, controller, controller::output};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = if args.len() == 2 {
        config::Config::new(&args[1])
    } else {
        config::Config::new("./config.toml")
    };

    eprintln!(
        "SEED: {}\tPOLICY: {}",
        config.simulation.random_seed, config.policy.mapper_policy
    );

    output::init_master_dir(&mut config);

    let (_substrate, _topology, result) = controller::main(&config);

    eprintln!(
        "accepted: {}/{}\tblocking rate: {:.5}",
        result.accepted_num, result.request_num, result.blocking_rate
    );
}

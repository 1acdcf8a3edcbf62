use console::style;

use crate::{
    config::Config, mapping::Mapping, network::SubstrateNetwork, request::Request,
};

pub fn log_alert(msg: &str) {
    println!("{:>8}| {}", style("ALERT").red(), style(msg).bold());
}

pub fn log_request_map(
    config: &Config,
    substrate: &SubstrateNetwork,
    mapping: &Mapping,
    request: &Request,
) {
    if config.debug.log_request_map {
        // 各仮想ノードのホストを取得
        let hosts: Vec<String> = request
            .nodes
            .iter()
            .map(|vn| match mapping.get_hosting_node_for(vn.id) {
                Some(host) => format!("{host}"),
                None => "-".to_string(),
            })
            .collect();

        println!(
            "{:>8}|{:5} av={} hosts={:?}",
            style("MAP").green(),
            request.index,
            mapping.get_availability(substrate),
            hosts
        );
    }
}

pub fn log_request_block(config: &Config, request: &Request) {
    if config.debug.log_request_block {
        println!(
            "{:>8}|{:5} {} nodes / {} links",
            style("BLOCK").red(),
            request.index,
            request.nodes.len(),
            request.links.len()
        );
    }
}

pub fn log_request_depart(config: &Config, request: &Request) {
    if config.debug.log_request_depart {
        println!(
            "{:>8}|{:5} t={}",
            style("DEPART").yellow(),
            request.index,
            request.end_time
        );
    }
}

pub fn log_load_snapshot(config: &Config, substrate: &SubstrateNetwork) {
    if config.debug.log_load_snapshot {
        println!(
            "{:>8}| nodes {:.3}/{:.3} links {:.3}/{:.3}",
            style("LOAD").blue(),
            substrate.get_average_nodes_load(),
            substrate.get_maximum_nodes_load(),
            substrate.get_average_links_bandwidth_load(),
            substrate.get_maximum_links_bandwidth_load()
        );
    }
}

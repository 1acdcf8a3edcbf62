use std::fs;

use crate::{config::Config, utils::generate_id};

use super::dynamic::SimulationResult;

pub fn init_master_dir(config: &mut Config) {
    // ディレクトリ名の決定
    let id: String = generate_id();
    let master_dir: String = format!(
        "./{}/{}/{}/{}",
        config.simulation.outdir, config.network.topology, config.policy.mapper_policy, id
    );

    // ディレクトリの作成
    match fs::create_dir_all(&master_dir) {
        Ok(_) => (),
        Err(_) => panic!("ディレクトリの作成に失敗しました (権限?)"),
    }

    config.simulation.outdir = master_dir;
}

/// config構造体をファイルとして出力する
/// config構造体->TOMLデータ->文字列->ファイル
pub fn save_config(config: &Config, output_dir: &str) {
    match toml::Value::try_from(config) {
        Ok(toml_data) => match toml::to_string_pretty(&toml_data) {
            Ok(toml_string) => {
                match fs::write(format!("{}/config.toml", output_dir), toml_string) {
                    Ok(_) => (),
                    Err(_) => panic!("TOML文字列をファイルに書き込めませんでした"),
                }
            }
            Err(_) => panic!("TOMLデータを文字列に変換できませんでした"),
        },
        Err(err) => panic!(
            "構造体をTOMLデータに変換できませんでした: {}\n{:?}",
            err, config
        ),
    }
}

/// 要求ごとの計測結果をJSONとして出力する
pub fn save_records(output_dir: &str, result: &SimulationResult) {
    let contents = match serde_json::to_string_pretty(&result.records) {
        Ok(contents) => contents,
        Err(err) => panic!("計測結果をJSONに変換できませんでした: {err}"),
    };

    match fs::write(format!("{}/records.json", output_dir), contents) {
        Ok(_) => (),
        Err(_) => panic!("ファイル書き込みに失敗しました"),
    }
}

/// 実行サマリをJSONとして出力する
pub fn save_summary(output_dir: &str, result: &SimulationResult) {
    let summary = serde_json::json!({
        "run_id": result.run_id,
        "policy": result.policy,
        "random_seed": result.random_seed,
        "request_num": result.request_num,
        "accepted_num": result.accepted_num,
        "blocking_rate": result.blocking_rate,
    });

    let contents = match serde_json::to_string_pretty(&summary) {
        Ok(contents) => contents,
        Err(err) => panic!("サマリをJSONに変換できませんでした: {err}"),
    };

    match fs::write(format!("{}/summary.json", output_dir), contents) {
        Ok(_) => (),
        Err(_) => panic!("ファイル書き込みに失敗しました"),
    }
}

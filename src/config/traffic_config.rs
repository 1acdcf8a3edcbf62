use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
/// 要求トラフィック関連の設定
pub struct TrafficConfig {
    /// 要求の総数
    pub request_num: usize,
    /// 到着間隔の指数分布パラメータ
    pub arrival_lambda: f64,
    /// 保持時間の指数分布パラメータ
    pub holding_lambda: f64,
    /// 要求あたりの仮想ノード数 (最小)
    pub virtual_nodes_min: usize,
    /// 要求あたりの仮想ノード数 (最大)
    pub virtual_nodes_max: usize,
    /// 仮想ノードのCPU要求量 (最小)
    pub capacity_min: f64,
    /// 仮想ノードのCPU要求量 (最大)
    pub capacity_max: f64,
    /// 仮想リンクの帯域要求量 (最小)
    pub bandwidth_min: f64,
    /// 仮想リンクの帯域要求量 (最大)
    pub bandwidth_max: f64,
    /// チェイン以外の仮想リンクを張る確率
    pub extra_link_ratio: f64,
}

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
/// 物理網関連の設定
pub struct NetworkConfig {
    /// 対象物理トポロジ
    pub topology: String,
    /// 物理ノードのCPU容量
    pub node_capacity: f64,
    /// 物理リンクの帯域容量
    pub link_bandwidth: f64,
    /// 物理リンクのコスト
    pub link_cost: f64,
    /// 物理リンクの遅延
    pub link_delay: f64,
    /// ホストとしての物理ノードの稼働率
    pub node_availability: f64,
    /// 中継ノードとしての物理ノードの稼働率
    pub intermediary_node_availability: f64,
    /// 物理リンクの稼働率
    pub link_availability: f64,
}

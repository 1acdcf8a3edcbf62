use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
/// シミュレーション関連の設定
pub struct SimulationConfig {
    /// ランダムシード
    pub random_seed: u64,
    /// 統計情報出力先フォルダ
    pub outdir: String,
}

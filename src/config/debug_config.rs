use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
/// デバッガ関連の設定
pub struct DebugConfig {
    /// 要求のマッピング成功を出力するか
    pub log_request_map: bool,
    /// 要求のブロックを出力するか
    pub log_request_block: bool,
    /// 要求の退去を出力するか
    pub log_request_depart: bool,
    /// ステップ時に負荷の統計情報を出力するか
    pub log_load_snapshot: bool,
}

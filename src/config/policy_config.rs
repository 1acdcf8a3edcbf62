use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
/// マッピングポリシー関連の設定
pub struct PolicyConfig {
    /// マッピングポリシー (greedy, random_fit)
    pub mapper_policy: String,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub category_id: String,
    pub pattern: String,
    pub replacement: String,
    pub entry_ids: Vec<String>,
    pub smart_mode: bool,
}

use serde::{Deserialize, Serialize};
use crate::structs::content::commit_item::CommitItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub category_id: String,
    pub changes: Vec<CommitItem>,
}

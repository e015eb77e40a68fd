use serde::{Deserialize, Serialize};
use crate::enums::apply_status::ApplyStatus;
use crate::structs::content::proposed_change::ProposedChange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRecord {
    pub entry_id: String,
    #[serde(default)]
    pub entry_label: String,
    pub status: ApplyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<ProposedChange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

use serde::{Deserialize, Serialize};
use crate::structs::content::apply_record::ApplyRecord;

/// Full response of one apply call. `total_updated` comes from the store and
/// is kept as reported, even when it disagrees with `records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySummary {
    pub total_updated: usize,
    #[serde(default)]
    pub records: Vec<ApplyRecord>,
}

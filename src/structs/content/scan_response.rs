use serde::{Deserialize, Serialize};
use crate::errors::ReplaceResult;
use crate::structs::content::scan_match::ScanMatch;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub total_matches: usize,
    #[serde(default)]
    pub matches: Vec<ScanMatch>,
}

impl ScanResponse {
    pub fn validate(&self) -> ReplaceResult<()> {
        self.matches.iter().try_for_each(ScanMatch::validate)
    }
}

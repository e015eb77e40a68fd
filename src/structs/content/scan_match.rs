use serde::{Deserialize, Serialize};
use crate::errors::{ReplaceError, ReplaceResult};

/// One occurrence of the search pattern in one field of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMatch {
    pub entry_id: String,
    pub field_name: String,
    pub before_text: String,
    #[serde(default)]
    pub entry_label: String,
}

impl ScanMatch {
    pub fn validate(&self) -> ReplaceResult<()> {
        if self.entry_id.is_empty() {
            return Err(ReplaceError::validation_error("entryId", "must not be empty", None));
        }
        if self.field_name.is_empty() {
            return Err(ReplaceError::validation_error(
                "fieldName",
                "must not be empty",
                Some(&format!("match on entry '{}' has no field name", self.entry_id)),
            ));
        }
        Ok(())
    }
}

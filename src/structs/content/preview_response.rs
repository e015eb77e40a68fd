use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::errors::{ReplaceError, ReplaceResult};
use crate::structs::content::preview_entry::PreviewEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub preview: Vec<PreviewEntry>,
}

impl PreviewResponse {
    pub fn validate(&self) -> ReplaceResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.preview {
            entry.validate()?;
            if !seen.insert(entry.entry_id.as_str()) {
                return Err(ReplaceError::validation_error(
                    "entryId",
                    "must be unique within a preview",
                    Some(&format!("entry '{}' appears more than once", entry.entry_id)),
                ));
            }
        }
        Ok(())
    }
}

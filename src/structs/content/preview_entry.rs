use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::errors::{ReplaceError, ReplaceResult};
use crate::structs::content::proposed_change::ProposedChange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewEntry {
    pub entry_id: String,
    #[serde(default)]
    pub entry_label: String,
    #[serde(default)]
    pub changes: Vec<ProposedChange>,
}

impl PreviewEntry {
    pub fn find_change(&self, field_name: &str) -> Option<&ProposedChange> {
        self.changes.iter().find(|change| change.field_name == field_name)
    }

    pub fn approvable_fields(&self) -> impl Iterator<Item = &str> {
        self.changes
            .iter()
            .filter(|change| change.is_default_approved())
            .map(|change| change.field_name.as_str())
    }

    /// Selections are keyed by field name, so each field may carry at most
    /// one change per entry.
    pub fn validate(&self) -> ReplaceResult<()> {
        if self.entry_id.is_empty() {
            return Err(ReplaceError::validation_error("entryId", "must not be empty", None));
        }

        let mut seen = HashSet::new();
        for (position, change) in self.changes.iter().enumerate() {
            if change.field_name.is_empty() {
                return Err(ReplaceError::validation_error(
                    "fieldName",
                    "must not be empty",
                    Some(&format!("change #{} of entry '{}' has no field name", position + 1, self.entry_id)),
                ));
            }
            if !seen.insert(change.field_name.as_str()) {
                return Err(ReplaceError::validation_error(
                    "fieldName",
                    "must be unique within an entry",
                    Some(&format!("entry '{}' has more than one change for '{}'", self.entry_id, change.field_name)),
                ));
            }
        }
        Ok(())
    }
}

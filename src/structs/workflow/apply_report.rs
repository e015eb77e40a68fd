use crate::structs::content::apply_record::ApplyRecord;

/// Apply records split by status, in response order within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub total_updated: usize,
    pub updated: Vec<ApplyRecord>,
    pub failed: Vec<ApplyRecord>,
}

impl ApplyReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// A computed before/after pair for one field.
///
/// `policy_approved` is tri-state: `None` and `Some(true)` both mean the
/// policy check lets the change through, only `Some(false)` excludes it from
/// the default selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedChange {
    pub field_name: String,
    pub before_text: String,
    pub after_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_approved: Option<bool>,
}

impl ProposedChange {
    pub fn is_default_approved(&self) -> bool {
        self.policy_approved != Some(false)
    }
}

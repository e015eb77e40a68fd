use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub smart_mode: bool,

    #[serde(default)]
    pub default_category: Option<String>,
}

use serde::{Deserialize, Serialize};
use crate::structs::config::gateway_config::GatewayConfig;
use crate::structs::config::workflow_config::WorkflowConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub workflow: WorkflowConfig,
}

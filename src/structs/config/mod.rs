pub mod config;
pub mod gateway_config;
pub mod workflow_config;

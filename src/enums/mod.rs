pub mod apply_status;
pub mod call_outcome;
pub mod commands;
pub mod guard_rejection;
pub mod notice_level;
pub mod workflow_action;
pub mod workflow_stage;

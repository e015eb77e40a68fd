pub mod notice_logger;
pub mod progress_spinner;
pub mod workflow_logger;

pub mod aggregator;
pub mod selection_ledger;
pub mod session_handle;
pub mod workflow_session;

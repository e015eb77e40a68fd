//! Guided bulk find & replace against a remote content store.
//!
//! A run moves through four stages (select, scan, preview, apply). The
//! [`services::workflow_session::WorkflowSession`] holds the run state and
//! the per-field [`services::selection_ledger::SelectionLedger`]; the
//! [`services::aggregator::Aggregator`] turns the selection into the changes
//! that are committed through a [`traits::content_gateway::ContentGateway`].

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub mod apply_report;
pub mod match_group;
pub mod notice;
pub mod pending_call;
pub mod preview_request;
pub mod preview_statistics;
pub mod scan_request;

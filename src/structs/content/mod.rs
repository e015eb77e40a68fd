pub mod apply_record;
pub mod apply_request;
pub mod apply_summary;
pub mod category;
pub mod commit_item;
pub mod entry;
pub mod preview_entry;
pub mod preview_response;
pub mod proposed_change;
pub mod scan_match;
pub mod scan_response;

use std::sync::Mutex;
use async_trait::async_trait;
use mockall::mock;
use bulk_replace::enums::apply_status::ApplyStatus;
use bulk_replace::errors::ReplaceResult;
use bulk_replace::services::workflow_session::WorkflowSession;
use bulk_replace::structs::content::apply_record::ApplyRecord;
use bulk_replace::structs::content::apply_request::ApplyRequest;
use bulk_replace::structs::content::apply_summary::ApplySummary;
use bulk_replace::structs::content::category::Category;
use bulk_replace::structs::content::entry::Entry;
use bulk_replace::structs::content::preview_entry::PreviewEntry;
use bulk_replace::structs::content::preview_response::PreviewResponse;
use bulk_replace::structs::content::proposed_change::ProposedChange;
use bulk_replace::structs::content::scan_match::ScanMatch;
use bulk_replace::structs::content::scan_response::ScanResponse;
use bulk_replace::structs::workflow::notice::Notice;
use bulk_replace::structs::workflow::preview_request::PreviewRequest;
use bulk_replace::structs::workflow::scan_request::ScanRequest;
use bulk_replace::traits::content_gateway::ContentGateway;
use bulk_replace::traits::notifier::Notifier;

mock! {
    pub Gateway {}

    #[async_trait]
    impl ContentGateway for Gateway {
        async fn list_categories(&self) -> ReplaceResult<Vec<Category>>;
        async fn list_entries(&self, category_id: &str) -> ReplaceResult<Vec<Entry>>;
        async fn scan(&self, request: &ScanRequest) -> ReplaceResult<ScanResponse>;
        async fn preview(&self, request: &PreviewRequest) -> ReplaceResult<PreviewResponse>;
        async fn apply(&self, request: &ApplyRequest) -> ReplaceResult<ApplySummary>;
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub fn change(field_name: &str, before: &str, after: &str, policy_approved: Option<bool>) -> ProposedChange {
    ProposedChange {
        field_name: field_name.to_string(),
        before_text: before.to_string(),
        after_text: after.to_string(),
        policy_approved,
    }
}

pub fn preview_entry(entry_id: &str, changes: Vec<ProposedChange>) -> PreviewEntry {
    PreviewEntry {
        entry_id: entry_id.to_string(),
        entry_label: format!("Entry {}", entry_id),
        changes,
    }
}

pub fn scan_match(entry_id: &str, field_name: &str, before: &str) -> ScanMatch {
    ScanMatch {
        entry_id: entry_id.to_string(),
        field_name: field_name.to_string(),
        before_text: before.to_string(),
        entry_label: format!("Entry {}", entry_id),
    }
}

pub fn entry(id: &str) -> Entry {
    Entry {
        id: id.to_string(),
        label: format!("Entry {}", id),
    }
}

pub fn record(entry_id: &str, status: ApplyStatus, error: Option<&str>) -> ApplyRecord {
    ApplyRecord {
        entry_id: entry_id.to_string(),
        entry_label: format!("Entry {}", entry_id),
        status,
        changes: None,
        error: error.map(str::to_string),
    }
}

/// E1: `field1` approved, `field2` rejected by policy.
pub fn scenario_b_preview() -> Vec<PreviewEntry> {
    vec![preview_entry(
        "E1",
        vec![
            change("field1", "foo one", "bar one", None),
            change("field2", "foo two", "bar two", Some(false)),
        ],
    )]
}

/// Category C1, entries E1 and E2 selected, "foo" -> "bar".
pub fn ready_session() -> WorkflowSession {
    let mut session = WorkflowSession::new();
    session.select_category("C1");
    session.set_selected_entries(vec!["E1".to_string(), "E2".to_string()]);
    session.set_search("foo");
    session.set_replacement("bar");
    session
}

/// A ready session that already went through a successful preview.
pub fn previewed_session(preview: Vec<PreviewEntry>) -> WorkflowSession {
    let mut session = ready_session();
    let ticket = session.begin_preview().expect("preview guards pass");
    let outcome = session.complete_preview(ticket, Ok(PreviewResponse { preview }));
    assert!(outcome.is_applied());
    session
}

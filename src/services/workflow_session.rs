use uuid::Uuid;
use crate::enums::call_outcome::CallOutcome;
use crate::enums::guard_rejection::GuardRejection;
use crate::enums::workflow_action::WorkflowAction;
use crate::enums::workflow_stage::WorkflowStage;
use crate::errors::{ReplaceError, ReplaceResult};
use crate::services::aggregator::Aggregator;
use crate::services::selection_ledger::SelectionLedger;
use crate::structs::content::apply_request::ApplyRequest;
use crate::structs::content::apply_summary::ApplySummary;
use crate::structs::content::category::Category;
use crate::structs::content::commit_item::CommitItem;
use crate::structs::content::entry::Entry;
use crate::structs::content::preview_entry::PreviewEntry;
use crate::structs::content::preview_response::PreviewResponse;
use crate::structs::content::scan_response::ScanResponse;
use crate::structs::workflow::apply_report::ApplyReport;
use crate::structs::workflow::match_group::MatchGroup;
use crate::structs::workflow::pending_call::PendingCall;
use crate::structs::workflow::preview_request::PreviewRequest;
use crate::structs::workflow::preview_statistics::PreviewStatistics;
use crate::structs::workflow::scan_request::ScanRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    action: WorkflowAction,
    generation: u64,
}

/// State of one guided find & replace run.
///
/// Boundary calls are split in two halves. `begin_*` checks the guards and
/// hands out a [`PendingCall`] ticket, `complete_*` takes the ticket back with
/// the gateway result. Only the call currently in flight can complete; a reset
/// or a category change abandons it, and its late result comes back as
/// [`CallOutcome::Stale`] without touching anything.
#[derive(Debug, Clone)]
pub struct WorkflowSession {
    id: String,
    stage: WorkflowStage,
    categories: Vec<Category>,
    entries: Vec<Entry>,
    category_id: Option<String>,
    selected_entries: Vec<String>,
    search: String,
    replacement: String,
    smart_mode: bool,
    scan: Option<ScanResponse>,
    preview: Vec<PreviewEntry>,
    ledger: SelectionLedger,
    apply_summary: Option<ApplySummary>,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl Default for WorkflowSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            stage: WorkflowStage::Select,
            categories: Vec::new(),
            entries: Vec::new(),
            category_id: None,
            selected_entries: Vec::new(),
            search: String::new(),
            replacement: String::new(),
            smart_mode: false,
            scan: None,
            preview: Vec::new(),
            ledger: SelectionLedger::new(),
            apply_summary: None,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    pub fn selected_entries(&self) -> &[String] {
        &self.selected_entries
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn smart_mode(&self) -> bool {
        self.smart_mode
    }

    pub fn scan_response(&self) -> Option<&ScanResponse> {
        self.scan.as_ref()
    }

    pub fn preview(&self) -> &[PreviewEntry] {
        &self.preview
    }

    pub fn preview_entry(&self, entry_id: &str) -> Option<&PreviewEntry> {
        self.preview.iter().find(|entry| entry.entry_id == entry_id)
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    pub fn apply_summary(&self) -> Option<&ApplySummary> {
        self.apply_summary.as_ref()
    }

    // ---------------------------------------------------------------------
    // User edits. None of these move the workflow forward.
    // ---------------------------------------------------------------------

    /// Chooses a category. Anything derived from the previous one (entries,
    /// entry selection, results, outstanding call) is dropped and the run goes
    /// back to the select stage.
    pub fn select_category(&mut self, category_id: &str) {
        if self.category_id.as_deref() == Some(category_id) {
            return;
        }

        log::debug!("Session {} switching category to '{}'", self.id, category_id);
        self.abandon_in_flight();
        self.category_id = Some(category_id.to_string());
        self.entries.clear();
        self.selected_entries.clear();
        self.clear_results();
        self.stage = WorkflowStage::Select;
    }

    pub fn set_selected_entries(&mut self, entry_ids: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(entry_ids.len());
        for id in entry_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.selected_entries = unique;
    }

    pub fn toggle_entry(&mut self, entry_id: &str, selected: bool) {
        let present = self.selected_entries.iter().any(|id| id == entry_id);
        if selected && !present {
            self.selected_entries.push(entry_id.to_string());
        } else if !selected {
            self.selected_entries.retain(|id| id != entry_id);
        }
    }

    pub fn select_all_entries(&mut self, selected: bool) {
        self.selected_entries = if selected {
            self.entries.iter().map(|entry| entry.id.clone()).collect()
        } else {
            Vec::new()
        };
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn set_replacement(&mut self, replacement: &str) {
        self.replacement = replacement.to_string();
    }

    pub fn set_smart_mode(&mut self, smart_mode: bool) {
        self.smart_mode = smart_mode;
    }

    /// Selects or deselects one proposed change. References to anything not
    /// in the current preview are ignored and reported as `false`.
    pub fn toggle_field(&mut self, entry_id: &str, field_name: &str, selected: bool) -> bool {
        let known = self
            .preview_entry(entry_id)
            .is_some_and(|entry| entry.find_change(field_name).is_some());
        if known {
            self.ledger.toggle_field(entry_id, field_name, selected);
        }
        known
    }

    pub fn select_all_for_entry(&mut self, entry_id: &str, selected: bool) -> bool {
        match self.preview.iter().find(|entry| entry.entry_id == entry_id) {
            Some(entry) => {
                self.ledger.select_all_for_entry(entry_id, &entry.changes, selected);
                true
            }
            None => false,
        }
    }

    pub fn select_all_changes(&mut self, selected: bool) {
        self.ledger.select_all(&self.preview, selected);
    }

    // ---------------------------------------------------------------------
    // Derived views, recomputed on every read.
    // ---------------------------------------------------------------------

    pub fn commit_payload(&self) -> Vec<CommitItem> {
        Aggregator::build_commit_payload(&self.preview, &self.ledger)
    }

    pub fn match_groups(&self) -> Vec<MatchGroup> {
        self.scan
            .as_ref()
            .map(|scan| Aggregator::group_matches(&scan.matches))
            .unwrap_or_default()
    }

    pub fn preview_statistics(&self) -> PreviewStatistics {
        Aggregator::summarize_preview(&self.preview, &self.ledger)
    }

    pub fn apply_report(&self) -> Option<ApplyReport> {
        self.apply_summary.as_ref().map(Aggregator::summarize_apply)
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    pub fn begin_load_categories(&mut self) -> Result<PendingCall<()>, GuardRejection> {
        self.ensure_idle()?;
        Ok(self.start_call(WorkflowAction::LoadCategories, ()))
    }

    pub fn complete_load_categories(&mut self, ticket: PendingCall<()>, result: ReplaceResult<Vec<Category>>) -> CallOutcome {
        if !self.finish_call(&ticket) {
            return CallOutcome::Stale;
        }

        match result {
            Ok(categories) => {
                self.categories = categories;
                CallOutcome::Applied
            }
            Err(e) => CallOutcome::Failed(ReplaceError::for_action(ticket.action, e)),
        }
    }

    /// The ticket carries the category id the entries are requested for.
    pub fn begin_load_entries(&mut self) -> Result<PendingCall<String>, GuardRejection> {
        self.ensure_idle()?;
        let category_id = self.category_id.clone().ok_or(GuardRejection::NoCategory)?;
        Ok(self.start_call(WorkflowAction::LoadEntries, category_id))
    }

    pub fn complete_load_entries(&mut self, ticket: PendingCall<String>, result: ReplaceResult<Vec<Entry>>) -> CallOutcome {
        if !self.finish_call(&ticket) {
            return CallOutcome::Stale;
        }

        match result {
            Ok(entries) => {
                self.selected_entries.retain(|id| entries.iter().any(|entry| &entry.id == id));
                self.entries = entries;
                CallOutcome::Applied
            }
            Err(e) => CallOutcome::Failed(ReplaceError::for_action(ticket.action, e)),
        }
    }

    pub fn begin_scan(&mut self) -> Result<PendingCall<ScanRequest>, GuardRejection> {
        self.ensure_idle()?;
        self.ensure_stage(WorkflowAction::Scan, &[WorkflowStage::Select, WorkflowStage::Scan])?;
        let (category_id, pattern) = self.search_inputs()?;

        let request = ScanRequest {
            category_id,
            pattern,
            entry_ids: self.selected_entries.clone(),
        };
        Ok(self.start_call(WorkflowAction::Scan, request))
    }

    pub fn complete_scan(&mut self, ticket: PendingCall<ScanRequest>, result: ReplaceResult<ScanResponse>) -> CallOutcome {
        if !self.finish_call(&ticket) {
            return CallOutcome::Stale;
        }

        match result.and_then(|response| response.validate().map(|()| response)) {
            Ok(response) => {
                log::debug!(
                    "Session {} scan returned {} matches ({} reported)",
                    self.id,
                    response.matches.len(),
                    response.total_matches
                );
                self.scan = Some(response);
                self.stage = WorkflowStage::Scan;
                CallOutcome::Applied
            }
            Err(e) => CallOutcome::Failed(ReplaceError::for_action(ticket.action, e)),
        }
    }

    pub fn begin_preview(&mut self) -> Result<PendingCall<PreviewRequest>, GuardRejection> {
        self.ensure_idle()?;
        self.ensure_stage(
            WorkflowAction::Preview,
            &[WorkflowStage::Select, WorkflowStage::Scan, WorkflowStage::Preview],
        )?;
        let (category_id, pattern) = self.search_inputs()?;
        if self.replacement.is_empty() {
            return Err(GuardRejection::EmptyReplacement);
        }

        let request = PreviewRequest {
            category_id,
            pattern,
            replacement: self.replacement.clone(),
            entry_ids: self.selected_entries.clone(),
            smart_mode: self.smart_mode,
        };
        Ok(self.start_call(WorkflowAction::Preview, request))
    }

    pub fn complete_preview(&mut self, ticket: PendingCall<PreviewRequest>, result: ReplaceResult<PreviewResponse>) -> CallOutcome {
        if !self.finish_call(&ticket) {
            return CallOutcome::Stale;
        }

        match result.and_then(|response| response.validate().map(|()| response)) {
            Ok(response) => {
                self.preview = response.preview;
                self.ledger.initialize(&self.preview);
                self.stage = WorkflowStage::Preview;
                CallOutcome::Applied
            }
            Err(e) => CallOutcome::Failed(ReplaceError::for_action(ticket.action, e)),
        }
    }

    pub fn begin_apply(&mut self) -> Result<PendingCall<ApplyRequest>, GuardRejection> {
        self.ensure_idle()?;
        self.ensure_stage(WorkflowAction::Apply, &[WorkflowStage::Preview])?;
        let category_id = self.category_id.clone().ok_or(GuardRejection::NoCategory)?;

        let changes = self.commit_payload();
        if changes.is_empty() {
            return Err(GuardRejection::NothingSelected);
        }

        let request = ApplyRequest { category_id, changes };
        Ok(self.start_call(WorkflowAction::Apply, request))
    }

    pub fn complete_apply(&mut self, ticket: PendingCall<ApplyRequest>, result: ReplaceResult<ApplySummary>) -> CallOutcome {
        if !self.finish_call(&ticket) {
            return CallOutcome::Stale;
        }

        match result {
            Ok(summary) => {
                self.apply_summary = Some(summary);
                self.stage = WorkflowStage::Apply;
                CallOutcome::Applied
            }
            Err(e) => CallOutcome::Failed(ReplaceError::for_action(ticket.action, e)),
        }
    }

    /// Back to the select stage with a clean slate. Loaded categories are kept.
    pub fn reset(&mut self) {
        log::debug!("Session {} reset from {} stage", self.id, self.stage);
        self.abandon_in_flight();
        self.stage = WorkflowStage::Select;
        self.category_id = None;
        self.entries.clear();
        self.selected_entries.clear();
        self.search.clear();
        self.replacement.clear();
        self.smart_mode = false;
        self.clear_results();
    }

    fn clear_results(&mut self) {
        self.scan = None;
        self.preview.clear();
        self.ledger.reset();
        self.apply_summary = None;
    }

    fn abandon_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Session {} abandoning outstanding {} call", self.id, in_flight.action);
        }
        self.generation += 1;
    }

    fn ensure_idle(&self) -> Result<(), GuardRejection> {
        if self.in_flight.is_some() {
            return Err(GuardRejection::Busy);
        }
        Ok(())
    }

    fn ensure_stage(&self, action: WorkflowAction, allowed: &[WorkflowStage]) -> Result<(), GuardRejection> {
        if !allowed.contains(&self.stage) {
            return Err(GuardRejection::WrongStage { action, stage: self.stage });
        }
        Ok(())
    }

    fn search_inputs(&self) -> Result<(String, String), GuardRejection> {
        let category_id = self.category_id.clone().ok_or(GuardRejection::NoCategory)?;
        if self.search.trim().is_empty() {
            return Err(GuardRejection::EmptyPattern);
        }
        if self.selected_entries.is_empty() {
            return Err(GuardRejection::NoEntries);
        }
        Ok((category_id, self.search.clone()))
    }

    fn start_call<R>(&mut self, action: WorkflowAction, request: R) -> PendingCall<R> {
        self.generation += 1;
        self.in_flight = Some(InFlight { action, generation: self.generation });
        PendingCall {
            action,
            generation: self.generation,
            request,
        }
    }

    fn finish_call<R>(&mut self, ticket: &PendingCall<R>) -> bool {
        let expected = InFlight {
            action: ticket.action,
            generation: ticket.generation,
        };
        if self.in_flight == Some(expected) {
            self.in_flight = None;
            true
        } else {
            log::debug!(
                "Session {} discarding stale {} response (generation {}, current {})",
                self.id,
                ticket.action,
                ticket.generation,
                self.generation
            );
            false
        }
    }
}

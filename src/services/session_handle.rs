use std::sync::Arc;
use tokio::sync::Mutex;
use crate::enums::call_outcome::CallOutcome;
use crate::enums::guard_rejection::GuardRejection;
use crate::enums::workflow_action::WorkflowAction;
use crate::services::workflow_session::WorkflowSession;
use crate::structs::workflow::notice::Notice;
use crate::structs::workflow::pending_call::PendingCall;
use crate::traits::content_gateway::ContentGateway;
use crate::traits::notifier::Notifier;

/// Drives a [`WorkflowSession`] against a gateway.
///
/// The session lock is released while a gateway call is awaited, so other
/// tasks can read the session or reset it in the meantime. Results of calls
/// abandoned that way are dropped by the session.
#[derive(Clone)]
pub struct SessionHandle {
    session: Arc<Mutex<WorkflowSession>>,
    gateway: Arc<dyn ContentGateway>,
    notifier: Arc<dyn Notifier>,
}

impl SessionHandle {
    pub fn new(gateway: Arc<dyn ContentGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_session(WorkflowSession::new(), gateway, notifier)
    }

    pub fn with_session(session: WorkflowSession, gateway: Arc<dyn ContentGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            gateway,
            notifier,
        }
    }

    /// Runs `f` against the session under the lock.
    pub async fn update<T>(&self, f: impl FnOnce(&mut WorkflowSession) -> T) -> T {
        let mut session = self.session.lock().await;
        f(&mut session)
    }

    pub async fn snapshot(&self) -> WorkflowSession {
        self.session.lock().await.clone()
    }

    pub async fn reset(&self) {
        self.session.lock().await.reset();
    }

    pub async fn load_categories(&self) -> Result<CallOutcome, GuardRejection> {
        let ticket = self.begin(WorkflowAction::LoadCategories, WorkflowSession::begin_load_categories).await?;
        let result = self.gateway.list_categories().await;

        let mut session = self.session.lock().await;
        let outcome = session.complete_load_categories(ticket, result);
        let message = format!("Loaded {} categories", session.categories().len());
        drop(session);

        self.report(WorkflowAction::LoadCategories, &outcome, message);
        Ok(outcome)
    }

    pub async fn load_entries(&self) -> Result<CallOutcome, GuardRejection> {
        let ticket = self.begin(WorkflowAction::LoadEntries, WorkflowSession::begin_load_entries).await?;
        let result = self.gateway.list_entries(&ticket.request).await;

        let mut session = self.session.lock().await;
        let outcome = session.complete_load_entries(ticket, result);
        let message = format!("Loaded {} entries", session.entries().len());
        drop(session);

        self.report(WorkflowAction::LoadEntries, &outcome, message);
        Ok(outcome)
    }

    pub async fn scan(&self) -> Result<CallOutcome, GuardRejection> {
        let ticket = self.begin(WorkflowAction::Scan, WorkflowSession::begin_scan).await?;
        let result = self.gateway.scan(&ticket.request).await;

        let mut session = self.session.lock().await;
        let outcome = session.complete_scan(ticket, result);
        let message = format!(
            "Found {} matches in {} entries",
            session.scan_response().map_or(0, |scan| scan.total_matches),
            session.match_groups().len()
        );
        drop(session);

        self.report(WorkflowAction::Scan, &outcome, message);
        Ok(outcome)
    }

    pub async fn preview(&self) -> Result<CallOutcome, GuardRejection> {
        let ticket = self.begin(WorkflowAction::Preview, WorkflowSession::begin_preview).await?;
        let result = self.gateway.preview(&ticket.request).await;

        let mut session = self.session.lock().await;
        let outcome = session.complete_preview(ticket, result);
        let stats = session.preview_statistics();
        drop(session);

        let message = format!(
            "Preview ready: {} changes in {} entries ({} approved, {} rejected)",
            stats.total_changes, stats.entry_count, stats.approved_count, stats.rejected_count
        );
        self.report(WorkflowAction::Preview, &outcome, message);
        Ok(outcome)
    }

    pub async fn apply(&self) -> Result<CallOutcome, GuardRejection> {
        let ticket = self.begin(WorkflowAction::Apply, WorkflowSession::begin_apply).await?;
        let result = self.gateway.apply(&ticket.request).await;

        let mut session = self.session.lock().await;
        let outcome = session.complete_apply(ticket, result);
        let report = session.apply_report();
        drop(session);

        let message = format!("Updated {} entries", report.as_ref().map_or(0, |r| r.total_updated));
        self.report(WorkflowAction::Apply, &outcome, message);

        if let Some(report) = report.filter(|r| outcome.is_applied() && r.has_failures()) {
            self.notifier.notify(Notice::warning(format!("{} entries could not be updated", report.failed.len())));
        }
        Ok(outcome)
    }

    async fn begin<R>(
        &self,
        action: WorkflowAction,
        begin: impl FnOnce(&mut WorkflowSession) -> Result<PendingCall<R>, GuardRejection>,
    ) -> Result<PendingCall<R>, GuardRejection> {
        let result = begin(&mut *self.session.lock().await);

        match &result {
            Ok(ticket) => log::debug!("Starting {} (generation {})", action, ticket.generation),
            Err(GuardRejection::Busy) => log::debug!("Ignoring {} request, another call is in flight", action),
            Err(GuardRejection::NothingSelected) => {
                self.notifier.notify(Notice::warning("No changes selected, nothing to apply"));
            }
            Err(rejection) => {
                self.notifier.notify(Notice::warning(format!("Cannot {}: {}", action, rejection)));
            }
        }

        result
    }

    fn report(&self, action: WorkflowAction, outcome: &CallOutcome, success_message: String) {
        match outcome {
            CallOutcome::Applied => self.notifier.notify(Notice::success(success_message)),
            CallOutcome::Failed(error) => {
                log::debug!("{} failed: {}", action, error.technical_details());
                self.notifier.notify(Notice::error(error.user_message()));
            }
            CallOutcome::Stale => log::debug!("Dropped late {} response", action),
        }
    }
}

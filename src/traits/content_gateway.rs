use async_trait::async_trait;
use crate::errors::ReplaceResult;
use crate::structs::content::apply_request::ApplyRequest;
use crate::structs::content::apply_summary::ApplySummary;
use crate::structs::content::category::Category;
use crate::structs::content::entry::Entry;
use crate::structs::content::preview_response::PreviewResponse;
use crate::structs::content::scan_response::ScanResponse;
use crate::structs::workflow::preview_request::PreviewRequest;
use crate::structs::workflow::scan_request::ScanRequest;

/// Remote content store operations used by the workflow.
///
/// Every call is one request/response exchange. Any error means the whole
/// call failed; implementations never return partial results.
#[async_trait]
pub trait ContentGateway: Send + Sync {

    async fn list_categories(&self) -> ReplaceResult<Vec<Category>>;

    async fn list_entries(&self, category_id: &str) -> ReplaceResult<Vec<Entry>>;

    async fn scan(&self, request: &ScanRequest) -> ReplaceResult<ScanResponse>;

    async fn preview(&self, request: &PreviewRequest) -> ReplaceResult<PreviewResponse>;

    async fn apply(&self, request: &ApplyRequest) -> ReplaceResult<ApplySummary>;
}

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use crate::errors::{ReplaceError, ReplaceResult};
use crate::structs::config::gateway_config::GatewayConfig;
use crate::structs::content::apply_request::ApplyRequest;
use crate::structs::content::apply_summary::ApplySummary;
use crate::structs::content::category::Category;
use crate::structs::content::entry::Entry;
use crate::structs::content::preview_response::PreviewResponse;
use crate::structs::content::scan_response::ScanResponse;
use crate::structs::workflow::preview_request::PreviewRequest;
use crate::structs::workflow::scan_request::ScanRequest;
use crate::traits::content_gateway::ContentGateway;

/// HTTP/JSON client for the content store's find & replace endpoints.
pub struct ContentStoreAdapter {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ContentStoreAdapter {

    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        let api_key = config
            .api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|key| !key.is_empty());

        Self::new(config.base_url.clone(), api_key)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("x-api-key", key),
            None => builder,
        }
    }

    async fn send<R>(&self, builder: RequestBuilder, operation_name: &str) -> ReplaceResult<R> where R: DeserializeOwned {
        let response = match self.authorize(builder).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Network error during {} request: {}", operation_name, e);
                return Err(ReplaceError::network_error(
                    operation_name,
                    e.url().map(|u| u.as_str()),
                    None,
                    "failed to reach the content store",
                ));
            }
        };

        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("{} request failed with status {}: {}", operation_name, status, error_text);
            return Err(ReplaceError::network_error(
                operation_name,
                Some(&url),
                Some(status.as_u16()),
                &error_text,
            ));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse JSON response for {}: {}", operation_name, e);
            ReplaceError::parse_error(&format!("{} response", operation_name), &e.to_string())
        })
    }

    fn search_query(category_id: &str, pattern: &str, entry_ids: &[String]) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("categoryId", category_id.to_string()),
            ("search", pattern.to_string()),
        ];
        query.extend(entry_ids.iter().map(|id| ("entryIds", id.clone())));
        query
    }
}

#[async_trait]
impl ContentGateway for ContentStoreAdapter {

    async fn list_categories(&self) -> ReplaceResult<Vec<Category>> {
        let builder = self.client.get(self.url("categories"));
        self.send(builder, "list categories").await
    }

    async fn list_entries(&self, category_id: &str) -> ReplaceResult<Vec<Entry>> {
        let builder = self
            .client
            .get(self.url("entries"))
            .query(&[("categoryId", category_id)]);
        self.send(builder, "list entries").await
    }

    async fn scan(&self, request: &ScanRequest) -> ReplaceResult<ScanResponse> {
        let query = Self::search_query(&request.category_id, &request.pattern, &request.entry_ids);
        let builder = self.client.get(self.url("scan")).query(&query);
        self.send(builder, "scan").await
    }

    async fn preview(&self, request: &PreviewRequest) -> ReplaceResult<PreviewResponse> {
        let mut query = Self::search_query(&request.category_id, &request.pattern, &request.entry_ids);
        query.push(("replace", request.replacement.clone()));
        if request.smart_mode {
            query.push(("smart", "true".to_string()));
        }

        let builder = self.client.get(self.url("preview")).query(&query);
        self.send(builder, "preview").await
    }

    async fn apply(&self, request: &ApplyRequest) -> ReplaceResult<ApplySummary> {
        let builder = self.client.post(self.url("apply")).json(request);
        self.send(builder, "apply").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let adapter = ContentStoreAdapter::new("http://localhost:1337/api/replace/".to_string(), None);
        assert_eq!(adapter.url("/scan"), "http://localhost:1337/api/replace/scan");
    }

    #[test]
    fn search_query_repeats_entry_ids() {
        let query = ContentStoreAdapter::search_query("articles", "foo", &["1".to_string(), "2".to_string()]);
        assert_eq!(
            query,
            vec![
                ("categoryId", "articles".to_string()),
                ("search", "foo".to_string()),
                ("entryIds", "1".to_string()),
                ("entryIds", "2".to_string()),
            ]
        );
    }
}

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use bulk_replace::adapters::content_store_adapter::ContentStoreAdapter;
use bulk_replace::enums::apply_status::ApplyStatus;
use bulk_replace::errors::ReplaceError;
use bulk_replace::structs::content::apply_request::ApplyRequest;
use bulk_replace::structs::content::commit_item::CommitItem;
use bulk_replace::structs::workflow::preview_request::PreviewRequest;
use bulk_replace::structs::workflow::scan_request::ScanRequest;
use bulk_replace::traits::content_gateway::ContentGateway;

fn scan_request() -> ScanRequest {
    ScanRequest {
        category_id: "C1".to_string(),
        pattern: "foo".to_string(),
        entry_ids: vec!["E1".to_string(), "E2".to_string()],
    }
}

#[tokio::test]
async fn list_categories_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "api::article.article", "label": "Article" },
            { "id": "api::page.page", "label": "Page" }
        ])))
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), None);
    let categories = adapter.list_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].label, "Page");
}

#[tokio::test]
async fn list_entries_sends_category_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entries"))
        .and(query_param("categoryId", "C1"))
        .and(header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "E1", "label": "Hello" }])))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), Some("secret".to_string()));
    let entries = adapter.list_entries("C1").await.unwrap();

    assert_eq!(entries[0].id, "E1");
}

#[tokio::test]
async fn scan_repeats_entry_ids_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .and(query_param("categoryId", "C1"))
        .and(query_param("search", "foo"))
        .and(query_param("entryIds", "E1"))
        .and(query_param("entryIds", "E2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalMatches": 2,
            "matches": [
                { "entryId": "E1", "fieldName": "title", "beforeText": "foo", "entryLabel": "First" },
                { "entryId": "E1", "fieldName": "body", "beforeText": "a foo", "entryLabel": "First" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), None);
    let response = adapter.scan(&scan_request()).await.unwrap();

    assert_eq!(response.total_matches, 2);
    assert_eq!(response.matches[1].field_name, "body");
}

#[tokio::test]
async fn preview_sends_replacement_and_smart_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/preview"))
        .and(query_param("replace", "bar"))
        .and(query_param("smart", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "preview": [{
                "entryId": "E1",
                "entryLabel": "First",
                "changes": [
                    { "fieldName": "field1", "beforeText": "foo", "afterText": "bar" },
                    { "fieldName": "field2", "beforeText": "foo", "afterText": "bar", "policyApproved": false },
                    { "fieldName": "field3", "beforeText": "foo", "afterText": "bar", "policyApproved": true }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), None);
    let request = PreviewRequest {
        category_id: "C1".to_string(),
        pattern: "foo".to_string(),
        replacement: "bar".to_string(),
        entry_ids: vec!["E1".to_string()],
        smart_mode: true,
    };
    let response = adapter.preview(&request).await.unwrap();

    let changes = &response.preview[0].changes;
    assert_eq!(changes[0].policy_approved, None);
    assert_eq!(changes[1].policy_approved, Some(false));
    assert_eq!(changes[2].policy_approved, Some(true));
}

#[tokio::test]
async fn apply_posts_changes_as_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apply"))
        .and(body_json(json!({
            "categoryId": "C1",
            "changes": [{ "entryId": "E1", "fieldName": "title", "newValue": "bar" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalUpdated": 1,
            "records": [
                { "entryId": "E1", "entryLabel": "First", "status": "updated",
                  "changes": [{ "fieldName": "title", "beforeText": "foo", "afterText": "bar" }] },
                { "entryId": "E2", "entryLabel": "Second", "status": "failed", "error": "locked" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), None);
    let request = ApplyRequest {
        category_id: "C1".to_string(),
        changes: vec![CommitItem {
            entry_id: "E1".to_string(),
            field_name: "title".to_string(),
            new_value: "bar".to_string(),
        }],
    };
    let summary = adapter.apply(&request).await.unwrap();

    assert_eq!(summary.total_updated, 1);
    assert_eq!(summary.records[0].status, ApplyStatus::Updated);
    assert_eq!(summary.records[1].status, ApplyStatus::Failed);
    assert_eq!(summary.records[1].error.as_deref(), Some("locked"));
}

#[tokio::test]
async fn non_success_status_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), None);
    let error = adapter.scan(&scan_request()).await.unwrap_err();

    match error {
        ReplaceError::NetworkError { status_code, reason, .. } => {
            assert_eq!(status_code, Some(500));
            assert_eq!(reason, "boom");
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"matches\": 3}"))
        .mount(&server)
        .await;

    let adapter = ContentStoreAdapter::new(server.uri(), None);
    let error = adapter.scan(&scan_request()).await.unwrap_err();

    assert!(matches!(error, ReplaceError::ParseError { .. }));
}

#[tokio::test]
async fn unreachable_store_is_a_network_error() {
    let adapter = ContentStoreAdapter::new("http://127.0.0.1:9".to_string(), None);
    let error = adapter.list_categories().await.unwrap_err();

    assert!(matches!(error, ReplaceError::NetworkError { status_code: None, .. }));
}

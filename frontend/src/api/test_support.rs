use crate::api::ApiClient;
use crate::config::DocumentStoreConfig;
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;

pub const PROJECT_ID: &str = "demo";
pub const COMMIT_PATH: &str = "/v1/projects/demo/databases/(default)/documents:commit";

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_config(DocumentStoreConfig::new(server.base_url(), PROJECT_ID))
}

pub fn commit_ok_json() -> serde_json::Value {
    json!({
        "commitTime": "2025-01-02T10:00:00.123456Z",
        "writeResults": [{ "updateTime": "2025-01-02T10:00:00.123456Z" }]
    })
}

pub async fn mock_commit_ok(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path(COMMIT_PATH);
            then.status(200).json_body(commit_ok_json());
        })
        .await
}

pub async fn mock_commit_denied(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path(COMMIT_PATH);
            then.status(403).json_body(json!({
                "error": {
                    "code": 403,
                    "message": "Missing or insufficient permissions.",
                    "status": "PERMISSION_DENIED"
                }
            }));
        })
        .await
}

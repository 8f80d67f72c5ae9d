#![cfg(not(coverage))]

use super::test_support::*;
use super::*;
use crate::config::DocumentStoreConfig;
use httpmock::prelude::*;
use serde_json::json;

fn record(created_at: CreatedAt) -> FeedbackRecord {
    FeedbackRecord {
        user_id: Some("u1".into()),
        role: Role::Vendor,
        feedback: "Great service!".into(),
        email: None,
        created_at,
    }
}

#[tokio::test]
async fn add_feedback_commits_one_create_only_write() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(COMMIT_PATH)
                .json_body_partial(
                    json!({
                        "writes": [{
                            "update": {
                                "fields": {
                                    "userId": { "stringValue": "u1" },
                                    "role": { "stringValue": "vendor" },
                                    "feedback": { "stringValue": "Great service!" }
                                }
                            },
                            "currentDocument": { "exists": false }
                        }]
                    })
                    .to_string(),
                );
            then.status(200).json_body(commit_ok_json());
        })
        .await;

    let client = client_for(&server);
    let doc = client
        .add_feedback("feedbacks", &record(CreatedAt::ServerTime), false)
        .await
        .expect("write succeeds");

    mock.assert_hits_async(1).await;
    assert_eq!(doc.collection, "feedbacks");
    assert!(!doc.id.is_empty());
}

#[tokio::test]
async fn add_feedback_appends_api_key_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(COMMIT_PATH)
                .query_param("key", "browser-key");
            then.status(200).json_body(commit_ok_json());
        })
        .await;

    let client = ApiClient::new_with_config(
        DocumentStoreConfig::new(server.base_url(), PROJECT_ID).with_api_key("browser-key"),
    );
    client
        .add_feedback("feedback", &record(CreatedAt::ServerTime), true)
        .await
        .expect("write succeeds");
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn add_feedback_maps_permission_error() {
    let server = MockServer::start_async().await;
    let _mock = mock_commit_denied(&server).await;

    let client = client_for(&server);
    let err = client
        .add_feedback("feedbacks", &record(CreatedAt::ServerTime), false)
        .await
        .expect_err("write rejected");
    assert_eq!(err.code, "PERMISSION_DENIED");
    assert_eq!(err.error, "Missing or insufficient permissions.");
}

#[tokio::test]
async fn add_feedback_reports_unreachable_store() {
    let client = ApiClient::new_with_config(DocumentStoreConfig::new("http://127.0.0.1:9", PROJECT_ID));
    let err = client
        .add_feedback("feedbacks", &record(CreatedAt::ServerTime), false)
        .await
        .expect_err("no server listening");
    assert_eq!(err.code, "REQUEST_FAILED");
}

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;

use crate::{
    api::types::{ApiError, CommitResponse},
    config::{self, DocumentStoreConfig},
    utils::storage as storage_utils,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    store: Option<DocumentStoreConfig>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            store: None,
        }
    }

    #[cfg(test)]
    pub fn new_with_config(store: DocumentStoreConfig) -> Self {
        Self {
            client: Client::new(),
            store: Some(store),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_store(&self) -> DocumentStoreConfig {
        if let Some(store) = &self.store {
            store.clone()
        } else {
            config::await_document_store().await
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = storage_utils::read_item(storage_utils::ID_TOKEN_KEY) {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::unknown("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    /// Sends one atomic `documents:commit` request.
    pub(super) async fn commit(&self, body: &Value) -> Result<CommitResponse, ApiError> {
        let store = self.resolved_store().await;
        let headers = self.auth_headers()?;
        let mut request = self.http_client().post(store.commit_url()).headers(headers);
        if let Some(key) = &store.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &text))
        }
    }
}

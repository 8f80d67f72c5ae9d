use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_PROJECT_ID: &str = "streetfood-hub";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "FIRESTORE_BASE_URL")]
    pub firestore_base_url: Option<String>,
    #[serde(default, alias = "PROJECT_ID")]
    pub project_id: Option<String>,
    #[serde(default, alias = "API_KEY")]
    pub api_key: Option<String>,
}

/// Resolved connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
}

impl DocumentStoreConfig {
    pub fn new(base_url: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn commit_url(&self) -> String {
        format!(
            "{}/v1/{}/documents:commit",
            self.base_url,
            crate::api::firestore::database_path(&self.project_id)
        )
    }
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FIRESTORE_BASE_URL, DEFAULT_PROJECT_ID)
    }
}

impl From<RuntimeConfig> for DocumentStoreConfig {
    fn from(cfg: RuntimeConfig) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let mut resolved = Self::new(
            non_empty(cfg.firestore_base_url)
                .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string()),
            non_empty(cfg.project_id).unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
        );
        resolved.api_key = non_empty(cfg.api_key);
        resolved
    }
}

static DOCUMENT_STORE: OnceLock<DocumentStoreConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<RuntimeConfig> {
    // Optional global object: window.__STREETFOOD_ENV = { PROJECT_ID: "...", API_KEY: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__STREETFOOD_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache(config: DocumentStoreConfig) -> DocumentStoreConfig {
    let _ = DOCUMENT_STORE.set(config.clone());
    config
}

pub async fn await_document_store() -> DocumentStoreConfig {
    if let Some(cached) = DOCUMENT_STORE.get() {
        return cached.clone();
    }
    if let Some(cfg) = get_from_env_js() {
        return cache(cfg.into());
    }
    if let Some(cfg) = fetch_runtime_config().await {
        log::info!("Loaded runtime config from config.json");
        return cache(cfg.into());
    }
    log::warn!("No runtime config found, using default document store settings");
    cache(DocumentStoreConfig::default())
}

pub async fn init() {
    let _ = await_document_store().await;
}

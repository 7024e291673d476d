//! Where the finance API lives.
//!
//! The base URL is looked up in this order: a `finance_api_url` entry in the
//! browser's local storage, the `FINANCE_API_URL` variable at build time, and
//! finally `http://localhost:8000`.

const DEFAULT_API_URL: &str = "http://localhost:8000";
const STORAGE_KEY: &str = "finance_api_url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn load() -> Self {
        Self::resolve(load_stored_url(), option_env!("FINANCE_API_URL"))
    }

    fn resolve(stored: Option<String>, compiled: Option<&str>) -> Self {
        stored
            .as_deref()
            .and_then(normalize)
            .or_else(|| compiled.and_then(normalize))
            .map(|base_url| Self { base_url })
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn load_stored_url() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

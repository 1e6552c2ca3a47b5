use std::env;

/// Base URL used when neither the flag nor the env var is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the token and analyze endpoints live.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `SENTI_API_URL`, falling back to the local default.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("SENTI_API_URL") {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

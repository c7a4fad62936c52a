//! Build-time API configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process env at runtime, so the backend base
//! URL is baked in at compile time from `SNIPZO_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `SNIPZO_API_BASE_URL` is not set during the build.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self { base_url: DEFAULT_API_BASE_URL.to_owned() };
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Configuration from the compile-time environment.
    pub fn from_env() -> Self {
        Self::new(option_env!("SNIPZO_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

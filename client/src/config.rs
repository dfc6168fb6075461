//! REST backend location.
//!
//! The base URL is fixed at build time from `TASKDESK_API_BASE` and shared
//! with views through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Where the task backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ApiConfig {
    /// Normalize `base_url` (surrounding whitespace and trailing slashes are
    /// dropped). A blank value falls back to [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self {
            base_url: base_url.to_owned(),
        }
    }

    /// Config baked in by the build (`TASKDESK_API_BASE`), else the default.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TASKDESK_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/tasks`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

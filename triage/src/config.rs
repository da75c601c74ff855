//! Backend base URL and endpoint paths.
//!
//! The browser build bakes the base URL in at compile time from
//! `RADETHIX_API_BASE`; the CLI passes it in from a flag or env var.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_BASE_ENV: &str = "RADETHIX_API_BASE";

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const PREDICT_PATH: &str = "/predict";
pub const REPORT_PATH: &str = "/generate-report";

/// Multipart field name the prediction endpoint reads the image from.
pub const PREDICT_FILE_FIELD: &str = "file";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, trimming trailing slashes. Blank input
    /// falls back to [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config from the `RADETHIX_API_BASE` value captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("RADETHIX_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.url(LOGIN_PATH)
    }

    #[must_use]
    pub fn signup_url(&self) -> String {
        self.url(SIGNUP_PATH)
    }

    #[must_use]
    pub fn predict_url(&self) -> String {
        self.url(PREDICT_PATH)
    }

    #[must_use]
    pub fn report_url(&self) -> String {
        self.url(REPORT_PATH)
    }
}

//! Async `reqwest` client for the triage backend.
//!
//! ERROR HANDLING
//! ==============
//! Methods return `triage::ApiError` so the CLI maps failures to the same
//! user-facing strings as the browser client.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use triage::config::PREDICT_FILE_FIELD;
use triage::types::{LoginRequest, SignupRequest};
use triage::upload::SelectedFile;
use triage::{ApiConfig, ApiError, PredictResponse, Report, ReportRequest, User};

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub struct Backend {
    http: reqwest::Client,
    config: ApiConfig,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

impl Backend {
    /// Build a client with a whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the TLS backend cannot initialize.
    pub fn new(config: ApiConfig, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[cfg(test)]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn post_json<B, T>(&self, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await.map_err(transport)?;
        ApiError::check_status(response.status().as_u16())?;
        response.json::<T>().await.map_err(decode)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.post_json(self.config.login_url(), request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ApiError> {
        self.post_json(self.config.signup_url(), request).await
    }

    /// Upload `file` to the predict endpoint. `on_headers` runs once the
    /// status line is in, before the body is read.
    pub async fn predict<F>(&self, file: &SelectedFile, on_headers: F) -> Result<PredictResponse, ApiError>
    where
        F: FnOnce(),
    {
        let part = reqwest::multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(PREDICT_FILE_FIELD, part);
        let url = self.config.predict_url();
        tracing::debug!(%url, bytes = file.len(), "POST multipart");
        let response = self.http.post(url).multipart(form).send().await.map_err(transport)?;
        on_headers();
        ApiError::check_status(response.status().as_u16())?;
        response.json::<PredictResponse>().await.map_err(decode)
    }

    pub async fn generate_report(&self, request: &ReportRequest) -> Result<Report, ApiError> {
        self.post_json(self.config.report_url(), request).await
    }
}

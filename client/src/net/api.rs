//! REST API helpers for communicating with the triage backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers map the error to a fixed
//! toast string with [`ApiError::user_message`] and log the detail; nothing
//! here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use triage::types::{LoginRequest, SignupRequest};
use triage::upload::SelectedFile;
use triage::{ApiConfig, ApiError, PredictResponse, Report, ReportRequest, User};

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(transport_error)?;
    ApiError::check_status(resp.status())?;
    resp.json::<T>().await.map_err(decode_error)
}

/// Log in with a patient ID via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the patient is unknown, or a transport /
/// decode error.
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.login_url(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Register a new patient via `POST /auth/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn signup(config: &ApiConfig, request: &SignupRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.signup_url(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Upload `file` as multipart field `file` to `POST /predict`.
///
/// `on_headers` runs once the response status line arrives, before the body
/// is read.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, the
/// status is not 2xx, or the body does not decode.
pub async fn predict<F>(config: &ApiConfig, file: &SelectedFile, on_headers: F) -> Result<PredictResponse, ApiError>
where
    F: FnOnce(),
{
    #[cfg(feature = "hydrate")]
    {
        let form = multipart_form(file)?;
        let resp = gloo_net::http::Request::post(&config.predict_url())
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(transport_error)?;
        on_headers();
        ApiError::check_status(resp.status())?;
        resp.json::<PredictResponse>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, file, on_headers);
        Err(unavailable())
    }
}

/// Request a narrative report via `POST /generate-report`.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn generate_report(config: &ApiConfig, request: &ReportRequest) -> Result<Report, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.report_url(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

#[cfg(feature = "hydrate")]
fn multipart_form(file: &SelectedFile) -> Result<web_sys::FormData, ApiError> {
    let blob = crate::util::browser::bytes_to_blob(&file.bytes, &file.mime)
        .ok_or_else(|| ApiError::Request("could not wrap file bytes".to_owned()))?;
    let form = web_sys::FormData::new().map_err(|_| ApiError::Request("FormData unavailable".to_owned()))?;
    form.append_with_blob_and_filename(triage::config::PREDICT_FILE_FIELD, &blob, &file.name)
        .map_err(|_| ApiError::Request("could not append file".to_owned()))?;
    Ok(form)
}

//! Shared domain model and client logic for the RAD-ETHIX triage client.
//!
//! This crate owns the wire representation exchanged with the prediction,
//! report, and auth endpoints, plus every piece of client behavior that does
//! not need a browser: session persistence, the analysis workflow state
//! machine, findings formatting, report editing/export, and toasts. Both the
//! Leptos `client` and the `cli` build on it.

pub mod auth;
pub mod config;
pub mod doctors;
pub mod error;
pub mod findings;
pub mod report;
pub mod selection;
pub mod session;
pub mod toast;
pub mod types;
pub mod upload;
pub mod workflow;

pub use config::ApiConfig;
pub use error::{ApiError, Operation};
pub use types::{Finding, PredictResponse, Report, ReportRequest, User};

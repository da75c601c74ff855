//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `analysis`, `ui`) so individual
//! components can depend on small focused models. The report panel uses
//! `triage::report::ReportPanel` directly.

pub mod analysis;
pub mod auth;
pub mod ui;

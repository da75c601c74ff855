//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the triage dashboard surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod doctors_modal;
pub mod findings_grid;
pub mod header;
pub mod patient_card;
pub mod progress_bar;
pub mod report_panel;
pub mod results_section;
pub mod toast;
pub mod upload_area;

//! Plain-text rendering of CLI results.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::fmt::Write as _;

use triage::User;
use triage::doctors::{DOCTORS, format_fee};
use triage::findings::{cards, lead_diagnosis, summary_diagnosis};
use triage::selection::FindingsView;
use triage::workflow::AnalysisResult;

pub fn user(user: &User) -> String {
    format!(
        "Name:       {}\nAge:        {} years\nGender:     {}\nPatient ID: {}",
        user.name, user.age, user.gender, user.patient_id
    )
}

/// Headline, overall confidence, review flag, then one block per finding.
pub fn analysis(result: &AnalysisResult, view: FindingsView) -> String {
    let shown = view.apply(&result.findings);
    let diagnosis = match view {
        FindingsView::Standard => summary_diagnosis(&result.findings),
        FindingsView::Legacy => lead_diagnosis(&shown),
    };

    let mut out = format!("Overall confidence: {}\n\n{}\n", result.confidence_value, diagnosis.title);
    let _ = writeln!(out, "{}", diagnosis.description);
    if result.needs_doctor_review {
        let reason = result.review_reason.as_deref().unwrap_or_default();
        let _ = writeln!(out, "\n! Doctor review recommended. {reason}");
    }
    if !shown.is_empty() {
        let _ = writeln!(out, "\n{}:", view.label());
    }
    for card in cards(&shown) {
        let _ = writeln!(out, "\n  {}\n  {}\n  {}", card.title, card.description, card.meta_line());
    }
    out
}

pub fn doctors(featured_fee: u32) -> String {
    let mut out = format!("Consultations from {}\n", format_fee(featured_fee));
    for doctor in DOCTORS {
        let _ = write!(
            out,
            "\n{} ({})\n  {}\n  {}  {}\n",
            doctor.name,
            doctor.specialty,
            doctor.description,
            doctor.phone,
            format_fee(doctor.fee_inr)
        );
    }
    out
}

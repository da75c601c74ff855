use super::*;
use triage::Finding;

fn finding(disease: &str, confidence: f64, critical: bool) -> Finding {
    Finding {
        disease: disease.to_owned(),
        description: format!("{disease} description"),
        confidence,
        severity: "Moderate".to_owned(),
        critical,
    }
}

fn result(findings: Vec<Finding>) -> AnalysisResult {
    AnalysisResult {
        confidence_value: "87%".to_owned(),
        findings,
        needs_doctor_review: false,
        review_reason: None,
    }
}

#[test]
fn user_lists_every_field() {
    let rendered = user(&User {
        name: "Amogh".to_owned(),
        age: 19,
        gender: "Male".to_owned(),
        patient_id: "PES1UG24CS053".to_owned(),
    });
    assert!(rendered.contains("19 years"));
    assert!(rendered.contains("PES1UG24CS053"));
}

#[test]
fn empty_analysis_says_no_findings() {
    let rendered = analysis(&result(Vec::new()), FindingsView::Standard);
    assert!(rendered.starts_with("Overall confidence: 87%"));
    assert!(rendered.contains("No findings"));
    assert!(rendered.contains("No significant findings detected."));
}

#[test]
fn legacy_view_shows_selected_cards_only() {
    let rendered = analysis(
        &result(vec![
            finding("Pneumonia", 0.9, true),
            finding("Cardiomegaly", 0.6, false),
            finding("Effusion", 0.5, false),
            finding("Nodule", 0.8, false),
        ]),
        FindingsView::Legacy,
    );
    assert!(rendered.contains("\nNodule\n"));
    assert!(rendered.contains("Confidence: 90% | Severity: Moderate (Critical)"));
    assert!(!rendered.contains("Effusion"));
}

#[test]
fn review_flag_is_shown_with_reason() {
    let mut flagged = result(vec![finding("Mass", 0.45, false)]);
    flagged.needs_doctor_review = true;
    flagged.review_reason = Some("Low confidence".to_owned());
    assert!(analysis(&flagged, FindingsView::Standard).contains("Doctor review recommended. Low confidence"));
}

#[test]
fn doctors_lists_directory_and_featured_fee() {
    let rendered = doctors(350);
    assert!(rendered.starts_with("Consultations from \u{20b9}350"));
    assert!(rendered.contains("Dr. Reshma Suresh (Cardiology)"));
    assert_eq!(rendered.matches("+91-").count(), 4);
}

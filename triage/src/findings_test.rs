use super::*;

fn finding(disease: &str, confidence: f64, critical: bool) -> Finding {
    Finding {
        disease: disease.to_owned(),
        description: format!("{disease} description"),
        confidence,
        severity: if critical { "Critical" } else { "Moderate" }.to_owned(),
        critical,
    }
}

// =============================================================
// confidence strings
// =============================================================

#[test]
fn confidence_percent_rounds_to_whole_number() {
    assert_eq!(confidence_percent(0.873), "87%");
    assert_eq!(confidence_percent(0.875), "88%");
    assert_eq!(confidence_percent(0.0), "0%");
    assert_eq!(confidence_percent(1.0), "100%");
}

#[test]
fn confidence_percent_rounds_half_up() {
    assert_eq!(confidence_percent(0.125), "13%");
    assert_eq!(confidence_percent(0.5), "50%");
}

#[test]
fn confidence_precise_keeps_one_decimal() {
    assert_eq!(confidence_precise(0.873), "87.3%");
    assert_eq!(confidence_precise(0.5), "50.0%");
}

#[test]
fn confidence_band_thresholds_are_exclusive() {
    assert_eq!(ConfidenceBand::from_confidence(0.71), ConfidenceBand::High);
    assert_eq!(ConfidenceBand::from_confidence(0.7), ConfidenceBand::Medium);
    assert_eq!(ConfidenceBand::from_confidence(0.41), ConfidenceBand::Medium);
    assert_eq!(ConfidenceBand::from_confidence(0.4), ConfidenceBand::Low);
    assert_eq!(ConfidenceBand::Low.css_class(), "low");
}

// =============================================================
// cards
// =============================================================

#[test]
fn cards_preserve_backend_order() {
    let findings = vec![finding("Effusion", 0.5, false), finding("Cardiomegaly", 0.9, false)];
    let titles: Vec<_> = cards(&findings).into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Effusion", "Cardiomegaly"]);
}

#[test]
fn meta_line_annotates_critical() {
    let card = FindingCard::from_finding(&finding("Pneumothorax", 0.62, true));
    assert_eq!(card.meta_line(), "Confidence: 62% | Severity: Critical (Critical)");
    let card = FindingCard::from_finding(&finding("Nodule", 0.31, false));
    assert_eq!(card.meta_line(), "Confidence: 31% | Severity: Moderate");
}

// =============================================================
// headlines
// =============================================================

#[test]
fn summary_diagnosis_lists_every_finding() {
    let findings = vec![finding("Mass", 0.8, true), finding("Nodule", 0.4, false)];
    let diagnosis = summary_diagnosis(&findings);
    assert_eq!(diagnosis.title, "Findings: Mass, Nodule");
    assert_eq!(
        diagnosis.description,
        "Mass: Mass description (Critical)\nNodule: Nodule description"
    );
}

#[test]
fn summary_diagnosis_empty() {
    let diagnosis = summary_diagnosis(&[]);
    assert_eq!(diagnosis.title, "No findings");
    assert_eq!(diagnosis.description, "No significant findings detected.");
}

#[test]
fn lead_diagnosis_uses_first_displayed() {
    let diagnosis = lead_diagnosis(&[finding("Nodule", 0.8, false), finding("Mass", 0.9, true)]);
    assert_eq!(diagnosis.title, "Nodule");
    assert_eq!(diagnosis.description, "Nodule description");
    assert_eq!(lead_diagnosis(&[]).title, "No significant findings");
}

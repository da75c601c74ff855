use super::*;

fn finding(disease: &str, confidence: f64, critical: bool) -> Finding {
    Finding {
        disease: disease.to_owned(),
        description: String::new(),
        confidence,
        severity: String::new(),
        critical,
    }
}

fn names(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.disease.as_str()).collect()
}

#[test]
fn legacy_selection_top_two_then_pneumonia() {
    let findings = vec![
        finding("Pneumonia", 0.9, true),
        finding("Cardiomegaly", 0.6, false),
        finding("Effusion", 0.5, false),
        finding("Nodule", 0.8, false),
    ];
    assert_eq!(names(&legacy_selection(&findings)), vec!["Nodule", "Cardiomegaly", "Pneumonia"]);
}

#[test]
fn legacy_selection_excludes_other_critical_findings() {
    let findings = vec![
        finding("Mass", 0.95, true),
        finding("Pneumothorax", 0.9, true),
        finding("Effusion", 0.5, false),
    ];
    assert_eq!(names(&legacy_selection(&findings)), vec!["Effusion"]);
}

#[test]
fn legacy_selection_ties_keep_original_order() {
    let findings = vec![
        finding("Atelectasis", 0.5, false),
        finding("Edema", 0.5, false),
        finding("Fibrosis", 0.5, false),
    ];
    assert_eq!(names(&legacy_selection(&findings)), vec!["Atelectasis", "Edema"]);
}

#[test]
fn legacy_selection_pneumonia_name_is_case_insensitive() {
    let findings = vec![
        finding("PNEUMONIA", 0.35, false),
        finding("Nodule", 0.4, false),
        finding("pneumonia", 0.6, true),
    ];
    let selected = legacy_selection(&findings);
    assert_eq!(names(&selected), vec!["Nodule", "PNEUMONIA"]);
}

#[test]
fn legacy_selection_non_critical_pneumonia_is_appended_not_ranked() {
    let findings = vec![
        finding("Pneumonia", 0.99, false),
        finding("Nodule", 0.3, false),
        finding("Effusion", 0.4, false),
        finding("Edema", 0.35, false),
    ];
    assert_eq!(names(&legacy_selection(&findings)), vec!["Effusion", "Edema", "Pneumonia"]);
}

#[test]
fn legacy_selection_without_pneumonia() {
    let findings = vec![finding("Nodule", 0.3, false)];
    assert_eq!(names(&legacy_selection(&findings)), vec!["Nodule"]);
    assert!(legacy_selection(&[]).is_empty());
}

#[test]
fn standard_view_is_identity() {
    let findings = vec![finding("Effusion", 0.5, false), finding("Pneumonia", 0.9, true)];
    assert_eq!(FindingsView::Standard.apply(&findings), findings);
    assert_eq!(FindingsView::default(), FindingsView::Standard);
}

#[test]
fn legacy_selection_tolerates_nan_confidence() {
    let findings = vec![
        finding("Atelectasis", f64::NAN, false),
        finding("Effusion", 0.7, false),
        finding("Nodule", 0.9, false),
        finding("Mass", 0.1, false),
    ];
    let selected = legacy_selection(&findings);
    assert_eq!(selected.len(), LEGACY_TOP_N);
    assert!(names(&selected).contains(&"Nodule"));
    assert!(!names(&selected).contains(&"Mass"));
    assert_eq!(legacy_selection(&findings), selected);
}

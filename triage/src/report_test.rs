use super::*;
use time::Month;

fn report(text: &str, citations: &[&str]) -> Report {
    Report {
        report_text: text.to_owned(),
        citations: citations.iter().map(|c| (*c).to_owned()).collect(),
    }
}

// =============================================================
// ReportDraft
// =============================================================

#[test]
fn cancel_restores_text_from_before_edit() {
    let mut draft = ReportDraft::new(report("IMPRESSION: clear", &[]));
    draft.begin_edit();
    draft.edit("IMPRESSION: changed");
    assert_eq!(draft.text(), "IMPRESSION: changed");
    draft.cancel();
    assert_eq!(draft.text(), "IMPRESSION: clear");
    assert!(!draft.is_editing());
}

#[test]
fn save_then_cancel_keeps_saved_text() {
    let mut draft = ReportDraft::new(report("v1", &[]));
    draft.begin_edit();
    draft.edit("v2");
    draft.save();

    draft.begin_edit();
    draft.edit("v3");
    draft.cancel();
    assert_eq!(draft.text(), "v2");
}

#[test]
fn edit_outside_edit_mode_is_ignored() {
    let mut draft = ReportDraft::new(report("v1", &[]));
    draft.edit("v2");
    assert_eq!(draft.text(), "v1");
}

// =============================================================
// ReportPanel
// =============================================================

#[test]
fn panel_success_and_failure() {
    let mut panel = ReportPanel::default();
    let request = panel.begin();
    assert!(panel.is_loading());
    assert!(panel.complete(request, report("body", &["Ref A"])));
    assert_eq!(panel.draft().map(ReportDraft::text), Some("body"));

    let retry = panel.begin();
    assert!(panel.draft().is_none());
    assert!(panel.fail(retry));
    assert_eq!(panel.status(), &ReportStatus::Failed);
}

#[test]
fn superseded_response_is_discarded() {
    let mut panel = ReportPanel::default();
    let old = panel.begin();
    let fresh = panel.begin();
    assert!(!panel.complete(old, report("old", &[])));
    assert!(panel.is_loading());
    assert!(panel.complete(fresh, report("fresh", &[])));
    assert!(!panel.fail(old));
    assert_eq!(panel.draft().map(ReportDraft::text), Some("fresh"));
}

#[test]
fn response_after_reset_is_discarded() {
    let mut panel = ReportPanel::default();
    let request = panel.begin();
    panel.reset();
    assert!(!panel.complete(request, report("late", &[])));
    assert_eq!(panel.status(), &ReportStatus::Idle);
}

#[test]
fn draft_mut_edits_ready_report() {
    let mut panel = ReportPanel::default();
    let request = panel.begin();
    panel.complete(request, report("a", &[]));
    let draft = panel.draft_mut().unwrap();
    draft.begin_edit();
    draft.edit("b");
    draft.save();
    assert_eq!(panel.draft().unwrap().text(), "b");
}

// =============================================================
// rendering
// =============================================================

#[test]
fn filename_pads_month_and_day() {
    let date = Date::from_calendar_date(2025, Month::March, 7).unwrap();
    assert_eq!(download_filename("PID-42", date), "PID-42_Report_2025-03-07.txt");
}

#[test]
fn download_body_appends_numbered_references() {
    let body = download_body("Line one", &["Ref A".to_owned(), "Ref B".to_owned()]);
    assert_eq!(body, "Line one\n\n=== REFERENCES ===\n\n[1] Ref A\n[2] Ref B\n");
}

#[test]
fn download_body_without_citations_has_no_references_block() {
    assert_eq!(download_body("Only text", &[]), "Only text\n\n");
}

#[test]
fn print_html_escapes_and_breaks_lines() {
    let html = print_html("a < b\nc & d", &["<Ref>".to_owned()]);
    assert!(html.contains("a &lt; b<br>c &amp; d"));
    assert!(html.contains("REFERENCES:"));
    assert!(html.contains("[1] &lt;Ref&gt;"));
    assert!(!html.contains("<Ref>"));
}

#[test]
fn print_html_omits_references_when_empty() {
    assert!(!print_html("x", &[]).contains("REFERENCES"));
}

#[test]
fn escape_html_handles_quotes() {
    assert_eq!(escape_html(r#""it's""#), "&quot;it&#39;s&quot;");
}

#[test]
fn response_from_before_reset_loses_to_next_request() {
    let mut panel = ReportPanel::default();
    let old = panel.begin();
    panel.reset();
    let fresh = panel.begin();
    assert_ne!(fresh, old);

    assert!(!panel.complete(old, report("previous patient", &[])));
    assert!(panel.is_loading());
    assert!(panel.complete(fresh, report("current patient", &[])));
    assert_eq!(panel.draft().map(ReportDraft::text), Some("current patient"));
}

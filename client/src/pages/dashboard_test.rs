use super::*;

#[test]
fn active_tab_gets_modifier() {
    assert_eq!(tab_class(true), "tab tab--active");
    assert_eq!(tab_class(false), "tab");
}

#[test]
fn analyze_button_relabels_while_pending() {
    assert_eq!(analyze_label(false), "Analyze X-ray");
    assert_eq!(analyze_label(true), "Analyzing...");
}

#[test]
fn analyze_without_file_only_toasts() {
    let owner = Owner::new();
    owner.with(|| {
        let analysis = RwSignal::new(AnalysisState::default());
        let ui = RwSignal::new(UiState::default());
        run_analyze(ApiConfig::default(), analysis, ui);
        assert!(!analysis.get_untracked().workflow.is_pending());
        assert_eq!(ui.get_untracked().toast.message(), NO_FILE_MESSAGE);
    });
}

#[test]
fn responses_from_before_logout_stay_stale() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        let ui = RwSignal::new(UiState::default());
        let analysis = RwSignal::new(AnalysisState::default());
        let report = RwSignal::new(ReportPanel::default());

        let mut old_analysis = None;
        let mut old_report = 0;
        analysis.update(|a| {
            a.workflow.select(triage::upload::SelectedFile::new("a.png", "image/png", vec![1]));
            if let AnalyzeStart::Started { request, .. } = a.workflow.begin_analyze() {
                old_analysis = Some(request);
            }
        });
        report.update(|r| old_report = r.begin());

        end_session(auth, ui, analysis, report);
        assert!(analysis.get_untracked().workflow.file().is_none());
        assert!(!report.get_untracked().is_loading());

        let mut fresh_analysis = None;
        analysis.update(|a| {
            a.workflow.select(triage::upload::SelectedFile::new("b.png", "image/png", vec![2]));
            if let AnalyzeStart::Started { request, .. } = a.workflow.begin_analyze() {
                fresh_analysis = Some(request);
            }
        });
        let fresh_report = report.try_update(ReportPanel::begin).unwrap();

        let old_analysis = old_analysis.unwrap();
        assert_ne!(fresh_analysis, Some(old_analysis));
        assert_ne!(fresh_report, old_report);
        let stale = triage::Report { report_text: "previous patient".to_owned(), citations: Vec::new() };
        assert!(!report.try_update(|r| r.complete(old_report, stale)).unwrap());
        assert!(!analysis.try_update(|a| a.workflow.fail(old_analysis)).unwrap());
        assert!(analysis.get_untracked().workflow.is_pending());
    });
}

//! Analysis view state: the workflow plus the chosen findings view.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use triage::Finding;
use triage::findings::{Diagnosis, lead_diagnosis, summary_diagnosis};
use triage::selection::FindingsView;
use triage::workflow::AnalysisWorkflow;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisState {
    pub workflow: AnalysisWorkflow,
    pub view: FindingsView,
}

impl AnalysisState {
    /// Findings to render under the active view; empty before any result.
    #[must_use]
    pub fn displayed_findings(&self) -> Vec<Finding> {
        self.workflow
            .result()
            .map(|r| self.view.apply(&r.findings))
            .unwrap_or_default()
    }

    /// Headline for the results section, `None` before any result.
    #[must_use]
    pub fn diagnosis(&self) -> Option<Diagnosis> {
        let result = self.workflow.result()?;
        Some(match self.view {
            FindingsView::Standard => summary_diagnosis(&result.findings),
            FindingsView::Legacy => lead_diagnosis(&self.view.apply(&result.findings)),
        })
    }

    /// Clear everything for the next session. Request counters survive so
    /// responses still in flight for the previous patient are discarded.
    pub fn reset(&mut self) {
        self.workflow.reset();
        self.view = FindingsView::default();
    }

    /// The Report tab is usable once an analysis result exists.
    #[must_use]
    pub fn can_report(&self) -> bool {
        self.workflow.result().is_some()
    }
}

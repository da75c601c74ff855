//! Report panel state, in-place editing, and print/download rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The narrative report comes from the external report endpoint. Editing,
//! printing, and downloading are purely local; nothing here is sent back.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt::Write as _;

use time::Date;

use crate::types::Report;
use crate::workflow::RequestId;

pub const LOADING_MESSAGE: &str = "Generating medical report with AI analysis...";
pub const FAILED_MESSAGE: &str = "Failed to generate report. Please try again.";
pub const DISCLAIMER: &str = "This report is generated by an AI-assisted diagnostic system and should be \
reviewed by a licensed radiologist or physician before clinical use. The findings, confidence scores, and \
recommendations are supplementary to clinical judgment and should not replace professional medical evaluation.";

/// A fetched report plus local edits.
///
/// `baseline` is the text the report had before the current edit session;
/// cancel restores it and save replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDraft {
    citations: Vec<String>,
    baseline: String,
    text: String,
    editing: bool,
}

impl ReportDraft {
    #[must_use]
    pub fn new(report: Report) -> Self {
        Self {
            citations: report.citations,
            baseline: report.report_text.clone(),
            text: report.report_text,
            editing: false,
        }
    }

    /// Current text, including unsaved edits.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn citations(&self) -> &[String] {
        &self.citations
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        if !self.editing {
            self.baseline = self.text.clone();
            self.editing = true;
        }
    }

    /// Replace the working text. Ignored outside edit mode.
    pub fn edit(&mut self, text: impl Into<String>) {
        if self.editing {
            self.text = text.into();
        }
    }

    /// Keep the working text; it becomes the new baseline.
    pub fn save(&mut self) {
        self.baseline = self.text.clone();
        self.editing = false;
    }

    /// Drop every edit made since [`ReportDraft::begin_edit`].
    pub fn cancel(&mut self) {
        self.text = self.baseline.clone();
        self.editing = false;
    }
}

/// Lifecycle of the report panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportStatus {
    #[default]
    Idle,
    Loading(RequestId),
    Ready(ReportDraft),
    Failed,
}

/// Report panel state with stale-response protection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportPanel {
    status: ReportStatus,
    last_request: RequestId,
}

impl ReportPanel {
    #[must_use]
    pub fn status(&self) -> &ReportStatus {
        &self.status
    }

    #[must_use]
    pub fn draft(&self) -> Option<&ReportDraft> {
        match &self.status {
            ReportStatus::Ready(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ReportDraft> {
        match &mut self.status {
            ReportStatus::Ready(draft) => Some(draft),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, ReportStatus::Loading(_))
    }

    /// Start a generate call, superseding any in flight.
    pub fn begin(&mut self) -> RequestId {
        self.last_request += 1;
        self.status = ReportStatus::Loading(self.last_request);
        self.last_request
    }

    /// Apply a report for `request`. Returns `false` if stale.
    pub fn complete(&mut self, request: RequestId, report: Report) -> bool {
        if self.status != ReportStatus::Loading(request) {
            return false;
        }
        self.status = ReportStatus::Ready(ReportDraft::new(report));
        true
    }

    /// Record a failed call for `request`. Returns `false` if stale.
    pub fn fail(&mut self, request: RequestId) -> bool {
        if self.status != ReportStatus::Loading(request) {
            return false;
        }
        self.status = ReportStatus::Failed;
        true
    }

    /// Return to idle; any in-flight response becomes stale.
    pub fn reset(&mut self) {
        self.status = ReportStatus::Idle;
    }
}

/// `{patient_id}_Report_{YYYY-MM-DD}.txt`.
#[must_use]
pub fn download_filename(patient_id: &str, date: Date) -> String {
    format!(
        "{patient_id}_Report_{:04}-{:02}-{:02}.txt",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// `[1] first`, `[2] second`, ...
#[must_use]
pub fn numbered_citations(citations: &[String]) -> Vec<String> {
    citations
        .iter()
        .enumerate()
        .map(|(idx, citation)| format!("[{}] {citation}", idx + 1))
        .collect()
}

/// Plain-text download body: the report, a blank line, then a references
/// block when there are citations.
#[must_use]
pub fn download_body(text: &str, citations: &[String]) -> String {
    let mut body = format!("{text}\n\n");
    if !citations.is_empty() {
        body.push_str("=== REFERENCES ===\n\n");
        for line in numbered_citations(citations) {
            let _ = writeln!(body, "{line}");
        }
    }
    body
}

/// Standalone HTML document for the print window.
#[must_use]
pub fn print_html(text: &str, citations: &[String]) -> String {
    let mut html = String::from(
        "<html><head><title>Medical Report</title><style>\
         body { font-family: 'Courier New', monospace; padding: 40px; line-height: 1.6; }\
         .report-content { white-space: pre-wrap; }\
         .citations { margin-top: 30px; border-top: 1px solid #ccc; padding-top: 20px; }\
         .citation-item { margin: 10px 0; font-size: 12px; }\
         @media print { body { padding: 20px; } }\
         </style></head><body><div class=\"report-content\">",
    );
    html.push_str(&escape_html(text).replace('\n', "<br>"));
    html.push_str("</div>");
    if !citations.is_empty() {
        html.push_str("<div class=\"citations\"><h3>REFERENCES:</h3>");
        for line in numbered_citations(citations) {
            let _ = write!(html, "<div class=\"citation-item\">{}</div>", escape_html(&line));
        }
        html.push_str("</div>");
    }
    html.push_str("</body></html>");
    html
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

//! Analysis workflow state machine.
//!
//! ```text
//! Idle --select--> Ready --analyze--> Pending --success--> Displayed
//! Displayed --remove--> Idle      Ready --remove--> Idle
//! Pending --failure--> Ready
//! ```
//!
//! DESIGN
//! ======
//! Every analyze call is tagged with a monotonically increasing
//! [`RequestId`]. A completion is applied only if its id is still the pending
//! one; selecting another file or removing the file while a request is in
//! flight makes its eventual response stale. While a request is pending,
//! further analyze calls are refused.
//!
//! Reading a picked file is asynchronous too. [`AnalysisWorkflow::begin_read`]
//! hands out a read token; a read that finishes after another pick or a
//! remove carries an outdated token and is dropped.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::findings::confidence_percent;
use crate::types::{Finding, PredictResponse};
use crate::upload::SelectedFile;

pub type RequestId = u64;

/// Progress shown when the upload starts.
pub const PROGRESS_STARTED: u8 = 20;
/// Progress shown once response headers arrive.
pub const PROGRESS_RESPONDED: u8 = 70;
pub const PROGRESS_DONE: u8 = 100;

pub const NO_FILE_MESSAGE: &str = "Please select an image first.";
pub const IMAGE_LOADED_MESSAGE: &str = "Image loaded. You can now analyze.";
pub const READ_FAILED_MESSAGE: &str = "Could not read that file. Please choose another image.";
pub const ANALYSIS_COMPLETE_MESSAGE: &str = "Analysis complete.";

/// Workflow phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Ready,
    Pending(RequestId),
    Displayed,
}

/// Findings derived from one successful predict call.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    /// Overall confidence as a whole percentage, e.g. `"87%"`.
    pub confidence_value: String,
    pub findings: Vec<Finding>,
    pub needs_doctor_review: bool,
    pub review_reason: Option<String>,
}

impl AnalysisResult {
    #[must_use]
    pub fn from_response(response: &PredictResponse) -> Self {
        Self {
            confidence_value: confidence_percent(response.confidence_metrics.overall_confidence),
            findings: response.findings.clone(),
            needs_doctor_review: response.needs_doctor_review,
            review_reason: response.review_reason.clone(),
        }
    }
}

/// Base64 PNG overlay returned alongside the findings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heatmap {
    base64: String,
}

impl Heatmap {
    /// Wrap the `combined_heatmap` field. Absent or empty means no heatmap.
    #[must_use]
    pub fn from_field(field: Option<&str>) -> Option<Self> {
        field
            .map(str::trim)
            .filter(|b64| !b64.is_empty())
            .map(|b64| Self { base64: b64.to_owned() })
    }

    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }

    /// Decode the PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns the decode error if the backend sent invalid base64.
    pub fn decode_png(&self) -> Result<Vec<u8>, base64::DecodeError> {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.decode(&self.base64)
    }
}

/// Outcome of [`AnalysisWorkflow::begin_analyze`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyzeStart {
    /// Send `file` to the predict endpoint, tagged `request`.
    Started { request: RequestId, file: SelectedFile },
    /// Nothing is selected; show [`NO_FILE_MESSAGE`].
    NoFile,
    /// A request is already in flight; do nothing.
    InFlight,
}

/// State owned by the analysis view: staged file, progress, and result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisWorkflow {
    phase: Phase,
    file: Option<SelectedFile>,
    progress: u8,
    progress_visible: bool,
    result: Option<AnalysisResult>,
    heatmap: Option<Heatmap>,
    last_request: RequestId,
    read_token: u64,
}

impl AnalysisWorkflow {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.file.as_ref().map(SelectedFile::preview_url)
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn progress_visible(&self) -> bool {
        self.progress_visible
    }

    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn heatmap(&self) -> Option<&Heatmap> {
        self.heatmap.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending(_))
    }

    /// Stage a new file. Any previous result and heatmap are dropped, and an
    /// in-flight request becomes stale.
    pub fn select(&mut self, file: SelectedFile) {
        self.clear_outputs();
        self.file = Some(file);
        self.phase = Phase::Ready;
    }

    /// A new file was picked and its bytes are being read. Prior results are
    /// dropped right away; the returned token must be passed to
    /// [`AnalysisWorkflow::finish_read`].
    pub fn begin_read(&mut self) -> u64 {
        self.read_token += 1;
        self.clear_outputs();
        if !matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Ready;
        }
        self.read_token
    }

    /// Stage the file produced by read `token`. Returns `false` if another
    /// pick or a remove happened in the meantime.
    pub fn finish_read(&mut self, token: u64, file: SelectedFile) -> bool {
        if token != self.read_token {
            return false;
        }
        self.select(file);
        true
    }

    /// Drop the staged file and everything derived from it.
    pub fn remove(&mut self) {
        self.read_token += 1;
        self.clear_outputs();
        self.file = None;
        self.phase = Phase::Idle;
    }

    /// Give up on read `token`, which produced no file. Drops the previously
    /// staged file so its preview is not shown under cleared results.
    /// Returns `false` if another pick or a remove happened in the meantime.
    pub fn abandon_read(&mut self, token: u64) -> bool {
        if token != self.read_token {
            return false;
        }
        self.remove();
        true
    }

    /// Back to a fresh, empty workflow for the next session. Request ids and
    /// read tokens keep counting, so anything still in flight stays stale.
    pub fn reset(&mut self) {
        self.remove();
    }

    /// Start an analyze call.
    pub fn begin_analyze(&mut self) -> AnalyzeStart {
        if self.is_pending() {
            return AnalyzeStart::InFlight;
        }
        let Some(file) = self.file.clone() else {
            return AnalyzeStart::NoFile;
        };
        self.last_request += 1;
        let request = self.last_request;
        self.phase = Phase::Pending(request);
        self.progress = PROGRESS_STARTED;
        self.progress_visible = true;
        AnalyzeStart::Started { request, file }
    }

    /// Response headers for `request` arrived. Returns `false` if stale.
    pub fn mark_responded(&mut self, request: RequestId) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.progress = PROGRESS_RESPONDED;
        true
    }

    /// Apply a successful response for `request`. Returns `false` if stale.
    pub fn complete(&mut self, request: RequestId, response: &PredictResponse) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.progress = PROGRESS_DONE;
        self.progress_visible = false;
        self.heatmap = Heatmap::from_field(response.combined_heatmap.as_deref());
        self.result = Some(AnalysisResult::from_response(response));
        self.phase = Phase::Displayed;
        true
    }

    /// Record a failed call for `request`. Returns `false` if stale.
    pub fn fail(&mut self, request: RequestId) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.progress_visible = false;
        self.phase = Phase::Ready;
        true
    }

    fn is_current(&self, request: RequestId) -> bool {
        self.phase == Phase::Pending(request)
    }

    fn clear_outputs(&mut self) {
        self.result = None;
        self.heatmap = None;
        self.progress = 0;
        self.progress_visible = false;
    }
}

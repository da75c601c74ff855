//! Which findings the results view shows.
//!
//! The standard view shows everything the backend returned, in order. The
//! legacy view keeps the two most confident non-critical findings and always
//! adds pneumonia when present. Pneumonia is special-cased by name only;
//! severity plays no part.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::types::Finding;

/// Number of non-critical findings kept by the legacy view.
pub const LEGACY_TOP_N: usize = 2;

const PNEUMONIA: &str = "pneumonia";

/// Findings display policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FindingsView {
    /// Every finding, backend order.
    #[default]
    Standard,
    /// Top non-critical findings plus pneumonia.
    Legacy,
}

impl FindingsView {
    #[must_use]
    pub fn apply(self, findings: &[Finding]) -> Vec<Finding> {
        match self {
            Self::Standard => findings.to_vec(),
            Self::Legacy => legacy_selection(findings),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "All findings",
            Self::Legacy => "Top findings",
        }
    }
}

/// Case-insensitive match on the disease name `"pneumonia"`.
#[must_use]
pub fn is_pneumonia(finding: &Finding) -> bool {
    finding.disease.to_lowercase() == PNEUMONIA
}

/// Legacy display selection.
///
/// 1. Drop critical findings and any named pneumonia.
/// 2. Sort the rest by confidence, highest first; equal confidences keep
///    their original order.
/// 3. Keep the first [`LEGACY_TOP_N`].
/// 4. Append the first pneumonia finding, critical or not, unless one is
///    already selected.
#[must_use]
pub fn legacy_selection(findings: &[Finding]) -> Vec<Finding> {
    let mut candidates: Vec<&Finding> = findings
        .iter()
        .filter(|f| !f.critical && !is_pneumonia(f))
        .collect();
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    candidates.truncate(LEGACY_TOP_N);

    let mut selected: Vec<Finding> = candidates.into_iter().cloned().collect();
    if let Some(pneumonia) = findings.iter().find(|f| is_pneumonia(f)) {
        if !selected.iter().any(is_pneumonia) {
            selected.push(pneumonia.clone());
        }
    }
    selected
}

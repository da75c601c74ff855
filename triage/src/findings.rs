//! Findings presentation: confidence strings, cards, and diagnosis headlines.

#[cfg(test)]
#[path = "findings_test.rs"]
mod findings_test;

use crate::types::Finding;

/// Title/description pair shown above the findings grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnosis {
    pub title: String,
    pub description: String,
}

/// Confidence bucket used to color report-panel summary cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            Self::High
        } else if confidence > 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Confidence as a whole-number percentage, e.g. `0.873` -> `"87%"`.
///
/// Halves round up, matching how the figure has always been displayed.
#[must_use]
pub fn confidence_percent(confidence: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let pct = (confidence * 100.0 + 0.5).floor() as i64;
    format!("{pct}%")
}

/// Confidence with one decimal place, e.g. `0.873` -> `"87.3%"`.
#[must_use]
pub fn confidence_precise(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Render-ready view of one finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindingCard {
    pub title: String,
    pub description: String,
    pub confidence: String,
    pub severity: String,
    pub critical: bool,
}

impl FindingCard {
    #[must_use]
    pub fn from_finding(finding: &Finding) -> Self {
        Self {
            title: finding.disease.clone(),
            description: finding.description.clone(),
            confidence: confidence_percent(finding.confidence),
            severity: finding.severity.clone(),
            critical: finding.critical,
        }
    }

    /// `"Confidence: 87% | Severity: High"`, with `" (Critical)"` appended
    /// for critical findings.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!(
            "Confidence: {} | Severity: {}{}",
            self.confidence,
            self.severity,
            critical_suffix(self.critical)
        )
    }
}

/// Map findings to cards, preserving order.
#[must_use]
pub fn cards(findings: &[Finding]) -> Vec<FindingCard> {
    findings.iter().map(FindingCard::from_finding).collect()
}

fn critical_suffix(critical: bool) -> &'static str {
    if critical { " (Critical)" } else { "" }
}

/// Headline for the standard results view: every finding name in the title,
/// one line per finding in the description.
#[must_use]
pub fn summary_diagnosis(findings: &[Finding]) -> Diagnosis {
    if findings.is_empty() {
        return Diagnosis {
            title: "No findings".to_owned(),
            description: "No significant findings detected.".to_owned(),
        };
    }
    let names = findings
        .iter()
        .map(|f| f.disease.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let description = findings
        .iter()
        .map(|f| format!("{}: {}{}", f.disease, f.description, critical_suffix(f.critical)))
        .collect::<Vec<_>>()
        .join("\n");
    Diagnosis { title: format!("Findings: {names}"), description }
}

/// Headline for the legacy view: the first displayed finding.
#[must_use]
pub fn lead_diagnosis(displayed: &[Finding]) -> Diagnosis {
    match displayed.first() {
        Some(first) => Diagnosis { title: first.disease.clone(), description: first.description.clone() },
        None => Diagnosis {
            title: "No significant findings".to_owned(),
            description: "The AI did not detect any concerning conditions.".to_owned(),
        },
    }
}

//! Wire DTOs for the auth, prediction, and report endpoints.
//!
//! DESIGN
//! ======
//! Fields the client never reads are not modeled; serde ignores them. Optional
//! response fields default to safe values so a sparse backend payload still
//! decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A patient record as returned by `/auth/login` and `/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Age in whole years.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub age: u32,
    /// Free-form gender label (`"Male"`, `"Female"`, `"Other"` from the signup form).
    pub gender: String,
    /// Backend-assigned patient identifier (e.g. `"PES1UG24CS053"`).
    pub patient_id: String,
}

/// One detected pathology.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Pathology name (e.g. `"Cardiomegaly"`).
    pub disease: String,
    /// Patient-facing explanation.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    /// Model probability in `[0, 1]`.
    pub confidence: f64,
    /// Backend severity label (`"Low"`, `"Moderate"`, `"High"`, `"Critical"`).
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub severity: String,
    /// Whether the backend flags this pathology as needing prompt attention.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub critical: bool,
}

/// Aggregate model confidence block of a predict response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    /// Highest per-pathology probability.
    pub overall_confidence: f64,
}

/// Response body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Base64-encoded PNG overlay; `None` when no pathology crossed threshold.
    #[serde(default)]
    pub combined_heatmap: Option<String>,
    pub confidence_metrics: ConfidenceMetrics,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub findings: Vec<Finding>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub needs_doctor_review: bool,
    #[serde(default)]
    pub review_reason: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub patient_id: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// Body of `POST /generate-report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub patient_name: String,
    pub patient_id: String,
    pub age: u32,
    pub gender: String,
    pub predictions: Vec<Finding>,
}

impl ReportRequest {
    /// Build a report request for `user` over the findings active right now.
    #[must_use]
    pub fn new(user: &User, findings: &[Finding]) -> Self {
        Self {
            patient_name: user.name.clone(),
            patient_id: user.patient_id.clone(),
            age: user.age,
            gender: user.gender.clone(),
            predictions: findings.to_vec(),
        }
    }
}

/// Response body of `POST /generate-report`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub report_text: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub citations: Vec<String>,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

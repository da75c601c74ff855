//! Auth gate form handling: mode switching and input validation.
//!
//! Validation runs before any request is sent; a rejected form never reaches
//! the backend.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::types::{LoginRequest, SignupRequest};

/// Demo account advertised on the landing view.
pub const DEMO_PATIENT_ID: &str = "PES1UG24CS053";
pub const DEMO_PROFILE: &str = "(Amogh, 19, Male)";

/// Gender choices offered by the signup form.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

/// Which auth view is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Landing,
    Login,
    Signup,
}

impl AuthMode {
    /// Submit button label, switching to a progress label while busy.
    #[must_use]
    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Signup, false) => "Create Account",
            (Self::Signup, true) => "Creating Account...",
            (Self::Landing, _) => "",
        }
    }
}

/// Validate the login form.
///
/// # Errors
///
/// Returns a user-facing message when the patient ID is blank.
pub fn validate_login(patient_id: &str) -> Result<LoginRequest, &'static str> {
    let patient_id = patient_id.trim();
    if patient_id.is_empty() {
        return Err("Enter a patient ID.");
    }
    Ok(LoginRequest { patient_id: patient_id.to_owned() })
}

/// Parse an age field into whole years within [`MIN_AGE`]..=[`MAX_AGE`].
#[must_use]
pub fn parse_age(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
}

/// Validate the signup form.
///
/// # Errors
///
/// Returns a user-facing message for a blank name, an unparseable or
/// out-of-range age, or a gender outside [`GENDER_OPTIONS`].
pub fn validate_signup(name: &str, age: &str, gender: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your full name.");
    }
    let Some(age) = parse_age(age) else {
        return Err("Enter an age between 1 and 120.");
    };
    if !GENDER_OPTIONS.contains(&gender) {
        return Err("Select a gender.");
    }
    Ok(SignupRequest { name: name.to_owned(), age, gender: gender.to_owned() })
}

use super::*;

#[test]
fn validate_login_trims_and_requires_value() {
    assert_eq!(
        validate_login("  PES1UG24CS053 "),
        Ok(LoginRequest { patient_id: "PES1UG24CS053".to_owned() })
    );
    assert_eq!(validate_login("   "), Err("Enter a patient ID."));
}

#[test]
fn parse_age_accepts_range_bounds() {
    assert_eq!(parse_age("1"), Some(1));
    assert_eq!(parse_age(" 120 "), Some(120));
    assert_eq!(parse_age("0"), None);
    assert_eq!(parse_age("121"), None);
    assert_eq!(parse_age("19.5"), None);
    assert_eq!(parse_age("nineteen"), None);
}

#[test]
fn validate_signup_builds_request() {
    assert_eq!(
        validate_signup(" John Doe ", "25", "Male"),
        Ok(SignupRequest { name: "John Doe".to_owned(), age: 25, gender: "Male".to_owned() })
    );
}

#[test]
fn validate_signup_reports_first_problem() {
    assert_eq!(validate_signup("", "25", "Male"), Err("Enter your full name."));
    assert_eq!(validate_signup("A", "", "Male"), Err("Enter an age between 1 and 120."));
    assert_eq!(validate_signup("A", "30", ""), Err("Select a gender."));
    assert_eq!(validate_signup("A", "30", "male"), Err("Select a gender."));
}

#[test]
fn submit_label_tracks_busy_state() {
    assert_eq!(AuthMode::Login.submit_label(false), "Login");
    assert_eq!(AuthMode::Login.submit_label(true), "Logging in...");
    assert_eq!(AuthMode::Signup.submit_label(true), "Creating Account...");
}

#[test]
fn auth_mode_default_is_landing() {
    assert_eq!(AuthMode::default(), AuthMode::Landing);
}

use super::*;
use triage::User;

fn patient() -> User {
    User {
        name: "Amogh".to_owned(),
        age: 19,
        gender: "Male".to_owned(),
        patient_id: "PES1UG24CS053".to_owned(),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_auth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_auth(&state));
}

#[test]
fn signed_in_patient_is_sent_to_dashboard() {
    let state = AuthState { user: Some(patient()), loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_auth(&state));
}

use super::*;

fn amogh() -> User {
    User {
        name: "Amogh".to_owned(),
        age: 19,
        gender: "Male".to_owned(),
        patient_id: "PES1UG24CS053".to_owned(),
    }
}

#[test]
fn default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn restored_without_user_stops_loading() {
    let mut state = AuthState::default();
    state.restored(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn sign_in_then_out() {
    let mut state = AuthState::default();
    state.sign_in(amogh());
    assert!(state.is_signed_in());
    state.sign_out();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
}

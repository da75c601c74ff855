use super::*;

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(ApiError::check_status(200), Ok(()));
    assert_eq!(ApiError::check_status(204), Ok(()));
    assert_eq!(ApiError::check_status(404), Err(ApiError::Status(404)));
    assert_eq!(ApiError::check_status(503), Err(ApiError::Status(503)));
}

#[test]
fn login_distinguishes_rejection_from_transport() {
    assert_eq!(ApiError::Status(404).user_message(Operation::Login), "Patient ID not found");
    assert_eq!(
        ApiError::Transport("offline".to_owned()).user_message(Operation::Login),
        "Login failed"
    );
}

#[test]
fn analyze_hides_failure_detail() {
    for error in [
        ApiError::Status(500),
        ApiError::Transport("reset".to_owned()),
        ApiError::Decode("eof".to_owned()),
    ] {
        assert_eq!(error.user_message(Operation::Analyze), "AI backend request failed.");
    }
}

#[test]
fn signup_and_report_messages_are_fixed() {
    assert_eq!(ApiError::Status(422).user_message(Operation::Signup), "Signup failed");
    assert_eq!(
        ApiError::Status(500).user_message(Operation::Report),
        "Failed to generate report. Please try again."
    );
}

#[test]
fn display_keeps_status_for_logs() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status: 502");
}

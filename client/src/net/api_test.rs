use super::*;

#[test]
fn transport_error_keeps_detail() {
    assert_eq!(
        transport_error("Failed to fetch"),
        ApiError::Transport("Failed to fetch".to_owned())
    );
}

#[test]
fn decode_error_keeps_detail() {
    assert_eq!(
        decode_error("missing field `findings`"),
        ApiError::Decode("missing field `findings`".to_owned())
    );
}

#[test]
fn transport_failures_map_to_operation_messages() {
    let err = transport_error("offline");
    assert_eq!(err.user_message(triage::Operation::Login), "Login failed");
    assert_eq!(err.user_message(triage::Operation::Analyze), "AI backend request failed.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_calls_fail_without_network() {
    let err = unavailable();
    assert!(matches!(err, ApiError::Transport(_)));
}

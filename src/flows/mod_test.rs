use super::*;
use crate::net::http::TransportError;

// =============================================================
// FlowState
// =============================================================

#[test]
fn begin_refuses_second_submission() {
    let mut state = FlowState::default();
    assert!(state.begin());
    assert!(state.is_submitting());
    assert!(!state.begin());
}

#[test]
fn begin_allowed_again_after_failure() {
    let mut state = FlowState::Failed(FlowError::Auth("nope".to_owned()));
    assert!(state.begin());
}

#[test]
fn settle_records_success_and_failure() {
    let mut state = FlowState::Submitting;
    state.settle(&Ok::<(), FlowError>(()), "Done");
    assert_eq!(state, FlowState::Success("Done".to_owned()));
    assert_eq!(state.message().as_deref(), Some("Done"));

    let mut state = FlowState::Submitting;
    state.settle(&Err::<(), _>(FlowError::Validation("Bad email".to_owned())), "Done");
    assert_eq!(state.message().as_deref(), Some("Bad email"));
    assert!(!state.is_submitting());
}

#[test]
fn idle_and_blank_success_have_no_message() {
    assert_eq!(FlowState::Idle.message(), None);
    assert_eq!(FlowState::Submitting.message(), None);
    assert_eq!(FlowState::Success(String::new()).message(), None);
}

// =============================================================
// Error conversion
// =============================================================

#[test]
fn structured_rejection_is_shown_verbatim() {
    let err = FlowError::from(ApiError::Rejected {
        status: 400,
        message: Some("invalid otp".to_owned()),
    });
    assert_eq!(err, FlowError::Auth("invalid otp".to_owned()));
    assert_eq!(err.to_string(), "invalid otp");
}

#[test]
fn unstructured_rejection_uses_generic_message() {
    let err = FlowError::from(ApiError::Rejected {
        status: 502,
        message: None,
    });
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

#[test]
fn transport_failure_is_network_error() {
    let err = FlowError::from(ApiError::Transport(TransportError("offline".to_owned())));
    assert_eq!(err, FlowError::Network(NETWORK_ERROR_MESSAGE.to_owned()));
}

#[test]
fn storage_failure_is_storage_error() {
    let err = FlowError::from(StorageError::Unavailable);
    assert_eq!(err, FlowError::Storage(STORAGE_ERROR_MESSAGE.to_owned()));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigation_constructors() {
    assert_eq!(Navigation::now("/dashboard").delay, None);
    let delayed = Navigation::after("/login", Duration::from_secs(2));
    assert_eq!(delayed.path, "/login");
    assert_eq!(delayed.delay, Some(Duration::from_secs(2)));
}

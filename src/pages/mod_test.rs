use std::cell::RefCell;
use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::flows::FlowError;

#[test]
fn submit_label_reflects_submitting() {
    assert_eq!(submit_label(&FlowState::Idle, "Sign in", "Signing in..."), "Sign in");
    assert_eq!(submit_label(&FlowState::Submitting, "Sign in", "Signing in..."), "Signing in...");
}

#[test]
fn message_class_marks_failures() {
    let failed = FlowState::Failed(FlowError::Auth("nope".to_owned()));
    assert_eq!(message_class(&failed), "auth-message auth-message--error");
    assert_eq!(message_class(&FlowState::Success("ok".to_owned())), "auth-message");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn follow_navigates_to_target_path() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());
    block_on(follow(navigate, Navigation::after("/login", Duration::from_secs(2))));
    assert_eq!(visited.into_inner(), vec!["/login".to_owned()]);
}

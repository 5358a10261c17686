use leptos::*;
use marketcalc_wasm::application::{SubmissionFlow, SubmissionPhase};
use marketcalc_wasm::domain::errors::AppError;

fn with_runtime(test: impl FnOnce()) {
    let runtime = create_runtime();
    test();
    runtime.dispose();
}

#[test]
fn validation_reject_never_sets_loading() {
    with_runtime(|| {
        let flow = SubmissionFlow::new("Test");

        flow.reject(&AppError::Validation("Please enter a ticker symbol.".to_string()));

        assert_eq!(flow.phase.get_untracked(), SubmissionPhase::Idle);
        assert_eq!(
            flow.notice.get_untracked(),
            Some("Please enter a ticker symbol.".to_string())
        );
        assert!(!flow.is_loading());
    });
}

#[test]
fn begin_shows_loading_and_clears_the_notice() {
    with_runtime(|| {
        let flow = SubmissionFlow::new("Test");
        flow.reject(&AppError::Validation("old notice".to_string()));

        let ticket = flow.begin();

        assert!(ticket.is_some());
        assert_eq!(flow.phase.get_untracked(), SubmissionPhase::Loading);
        assert_eq!(flow.notice.get_untracked(), None);
    });
}

#[test]
fn second_click_while_loading_is_dropped() {
    with_runtime(|| {
        let flow = SubmissionFlow::new("Test");

        let first = flow.begin();
        assert!(first.is_some());
        assert!(flow.begin().is_none());
        assert_eq!(flow.phase.get_untracked(), SubmissionPhase::Loading);
    });
}

#[test]
fn success_moves_to_ready() {
    with_runtime(|| {
        let flow = SubmissionFlow::new("Test");

        let ticket = flow.begin().unwrap();
        assert!(flow.settle_ok(&ticket));
        assert_eq!(flow.phase.get_untracked(), SubmissionPhase::Ready);
        assert!(!flow.is_loading());
    });
}

#[test]
fn failure_clears_loading_and_shows_a_notice() {
    with_runtime(|| {
        let flow = SubmissionFlow::new("Test");

        let ticket = flow.begin().unwrap();
        assert!(flow.settle_err(&ticket, &AppError::Network("HTTP error: 500".to_string())));

        assert_eq!(flow.phase.get_untracked(), SubmissionPhase::Failed);
        assert_eq!(flow.notice.get_untracked(), Some("HTTP error: 500".to_string()));
        assert!(!flow.is_loading());
    });
}

#[test]
fn late_completion_of_a_superseded_request_changes_nothing() {
    with_runtime(|| {
        let flow = SubmissionFlow::new("Test");

        let first = flow.begin().unwrap();
        assert!(flow.settle_err(&first, &AppError::Network("timed out".to_string())));

        let _second = flow.begin().unwrap();

        // First request's response arrives late: display state must not move
        assert!(!flow.settle_ok(&first));
        assert_eq!(flow.phase.get_untracked(), SubmissionPhase::Loading);
        assert!(flow.is_loading());
    });
}

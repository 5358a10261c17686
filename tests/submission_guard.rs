use marketcalc_wasm::application::SubmissionGuard;

#[test]
fn overlapping_begin_is_rejected() {
    let guard = SubmissionGuard::new();

    let first = guard.try_begin();
    assert!(first.is_some());
    assert!(guard.is_in_flight());

    // Rapid double click: second submission is dropped, not queued
    assert!(guard.try_begin().is_none());
}

#[test]
fn settle_clears_the_in_flight_flag() {
    let guard = SubmissionGuard::new();

    let ticket = guard.try_begin().unwrap();
    assert!(guard.settle(&ticket));
    assert!(!guard.is_in_flight());

    assert!(guard.try_begin().is_some());
}

#[test]
fn stale_ticket_is_reported_and_ignored() {
    let guard = SubmissionGuard::new();

    let first = guard.try_begin().unwrap();
    assert!(guard.settle(&first));

    let second = guard.try_begin().unwrap();

    // A late completion of the first request must not settle the second
    assert!(!guard.settle(&first));
    assert!(guard.is_in_flight());

    assert!(guard.settle(&second));
    assert!(!guard.is_in_flight());
}

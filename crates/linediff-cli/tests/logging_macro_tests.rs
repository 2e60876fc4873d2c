//! The lifecycle macros expand in a crate that depends only on
//! `linediff-core`, with no direct `tracing` or `linediff-core-types` import.

use linediff_core::errors::LineDiffError;
use linediff_core::logging_facility::test_capture::init_test_capture;
use linediff_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_lifecycle_macros_expand_in_downstream_crate() {
    let capture = init_test_capture();
    let op_name = "cli_macro_lifecycle";

    log_op_start!(op_name, old_path = "a.txt");
    log_op_end!(op_name, duration_ms = 5, distance = 2u64);
    log_op_error!(
        op_name,
        LineDiffError::NotUtf8 {
            path: "b.txt".to_string(),
        },
        duration_ms = 1,
        new_path = "b.txt"
    );

    let events = capture.events_for_op(op_name);
    let kinds: Vec<_> = events.iter().map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![Some("start"), Some("end"), Some("end_error")]);

    assert_eq!(events[0].field("old_path"), Some("a.txt"));
    assert_eq!(events[1].field("distance"), Some("2"));
    assert_eq!(events[2].field("err_code"), Some("ERR_INVALID_INPUT"));
    assert_eq!(events[2].field("new_path"), Some("b.txt"));
    assert_eq!(
        events[2].component.as_deref(),
        Some("logging_macro_tests")
    );
}

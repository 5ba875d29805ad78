//! Feature-gated check that failing validations emit tracing events
#![cfg(feature = "tracing")]

use tidepool::Validation;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn traced_failure_emits_a_debug_event() {
    let v = Validation::<i32, Vec<&str>>::failure(vec!["boom"]).traced("person");
    assert!(v.is_failure());
    assert!(logs_contain("validation failed"));
}

#[traced_test]
#[test]
fn traced_success_is_silent() {
    let v = Validation::<_, Vec<&str>>::success(1).traced("person");
    assert!(v.is_success());
    assert!(!logs_contain("validation failed"));
}

use causal_rail::errors::{InvalidOperationError, MessageError, NotFoundError};
use causal_rail::prelude::*;
use causal_rail::NotAFailure;
use std::cell::Cell;
use std::sync::Arc;

fn inner_ptr(outcome: &Outcome) -> Option<*const Outcome> {
    outcome.inner().map(|inner| inner as *const Outcome)
}

#[test]
fn success_has_no_error_or_inner() {
    let outcome = Outcome::success();
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert!(outcome.error().is_none());
    assert!(outcome.inner().is_none());
    assert_eq!(outcome.chain().count(), 0);
    assert!(outcome.root_cause().is_none());
}

#[test]
fn default_is_success() {
    assert!(Outcome::default().is_success());
}

#[test]
fn from_error_keeps_error_identity() {
    let error: ErrorRef = Arc::new(MessageError::new("boom"));
    let outcome = Outcome::from_error(error.clone());

    assert!(!outcome.is_success());
    assert!(Arc::ptr_eq(outcome.error().unwrap(), &error));
    assert!(outcome.inner().is_none());
}

#[test]
fn wrap_records_error_and_inner() {
    let root_error: ErrorRef = Arc::new(MessageError::new("boom"));
    let context_error: ErrorRef = Arc::new(MessageError::new("context"));
    let r1 = Outcome::from_error(root_error.clone());
    let r2 = Outcome::wrap(context_error.clone(), r1);

    assert!(Arc::ptr_eq(r2.error().unwrap(), &context_error));
    let inner = r2.inner().unwrap();
    assert!(Arc::ptr_eq(inner.error().unwrap(), &root_error));
    assert_eq!(r2.error().unwrap().message(), "context");
    assert_eq!(inner.error().unwrap().message(), "boom");
}

#[test]
#[should_panic(expected = "cannot be recorded as a failure cause")]
fn wrap_rejects_success_as_cause() {
    let _ = Outcome::wrap("context", Outcome::success());
}

#[test]
fn try_wrap_reports_success_as_cause() {
    let result = Outcome::try_wrap("context", Outcome::success());
    assert_eq!(result.unwrap_err(), NotAFailure);

    let ok = Outcome::try_wrap("context", Outcome::from_error("boom")).unwrap();
    assert_eq!(ok.chain().count(), 2);
}

#[test]
fn lift_unit_failure_shares_error_and_records_it_as_inner() {
    let original = Outcome::wrap("outer", Outcome::from_error("root"));
    let error = original.error().unwrap().clone();
    let original_inner = inner_ptr(&original);

    let lifted = Outcome::lift(original);

    assert!(Arc::ptr_eq(lifted.error().unwrap(), &error));
    let recorded = lifted.inner().unwrap();
    assert!(Arc::ptr_eq(recorded.error().unwrap(), &error));
    // the lifted failure's own chain is kept as is
    assert_eq!(inner_ptr(recorded), original_inner);
    assert_eq!(lifted.chain().count(), 3);
}

#[test]
fn lift_typed_failure() {
    let typed: TypedOutcome<String> = TypedOutcome::from_error(NotFoundError::new("user"));
    let error = typed.error().unwrap().clone();

    let lifted = Outcome::lift(typed);
    assert!(Arc::ptr_eq(lifted.error().unwrap(), &error));
    assert!(Arc::ptr_eq(lifted.inner().unwrap().error().unwrap(), &error));
}

#[test]
fn try_lift_rejects_success() {
    assert_eq!(Outcome::try_lift(Outcome::success()).unwrap_err(), NotAFailure);
    assert_eq!(Outcome::try_lift(TypedOutcome::success(1)).unwrap_err(), NotAFailure);
}

#[test]
#[should_panic]
fn lift_panics_on_success() {
    let _ = Outcome::lift(TypedOutcome::success("value"));
}

#[test]
fn implicit_conversion_from_error_value() {
    let outcome: Outcome = MessageError::new("converted").into();
    assert!(outcome.is_failure());
    assert_eq!(outcome.error().unwrap().message(), "converted");
}

#[test]
fn map_on_success_carries_value() {
    let mapped = Outcome::success().map(7);
    assert!(mapped.is_success());
    assert_eq!(mapped.value(), Some(&7));
}

#[test]
fn map_on_failure_keeps_error_and_inner() {
    let failed = Outcome::wrap("context", Outcome::from_error("boom"));
    let error = failed.error().unwrap().clone();
    let before = inner_ptr(&failed);

    let mapped: TypedOutcome<u8> = failed.map(7);

    assert!(!mapped.is_success());
    assert!(mapped.value().is_none());
    assert!(Arc::ptr_eq(mapped.error().unwrap(), &error));
    assert_eq!(mapped.inner().map(|i| i as *const Outcome), before);
}

#[test]
fn map_or_else_returns_on_success_for_success() {
    let called = Cell::new(false);
    let value = Outcome::success().map_or_else(2, |_, _| {
        called.set(true);
        1
    });
    assert_eq!(value, 2);
    assert!(!called.get());
}

#[test]
fn map_or_else_calls_on_error_for_failure() {
    let failed = Outcome::wrap("context", Outcome::from_error("boom"));
    let error = failed.error().unwrap().clone();

    let value = failed.map_or_else(2, |e, inner| {
        assert!(Arc::ptr_eq(&e, &error));
        assert_eq!(inner.unwrap().error().unwrap().message(), "boom");
        1
    });
    assert_eq!(value, 1);
}

#[test]
fn map_error_on_success_is_unchanged() {
    let called = Cell::new(false);
    let mapped = Outcome::success().map_error(|_, _| {
        called.set(true);
        MessageError::new("never")
    });
    assert!(mapped.is_success());
    assert!(!called.get());
}

#[test]
fn map_error_replaces_error_and_keeps_inner() {
    let failed = Outcome::wrap("context", Outcome::from_error("boom"));
    let before = inner_ptr(&failed);

    let mapped = failed.map_error(|error, inner| {
        assert_eq!(error.message(), "context");
        assert!(inner.is_some());
        InvalidOperationError::new("save", "read only")
    });

    assert!(mapped.error().unwrap().is::<InvalidOperationError>());
    assert_eq!(mapped.error().unwrap().message(), "cannot save: read only");
    assert_eq!(inner_ptr(&mapped), before);
}

#[test]
fn map_error_with_replaces_error_and_inner() {
    let failed = Outcome::wrap("context", Outcome::from_error("boom"));
    let replacement = Outcome::from_error("replacement cause");
    let replacement_error = replacement.error().unwrap().clone();

    let mapped = failed.map_error_with(|_, _| (NotFoundError::new("session"), replacement));

    assert!(mapped.error().unwrap().is::<NotFoundError>());
    let inner = mapped.inner().unwrap();
    assert!(Arc::ptr_eq(inner.error().unwrap(), &replacement_error));
    assert!(inner.inner().is_none());
}

#[test]
fn map_error_with_can_reuse_the_old_inner() {
    let failed = Outcome::wrap("context", Outcome::from_error("boom"));

    let mapped = failed.map_error_with(|error, inner| {
        let inner = inner.expect("wrapped failure has an inner");
        (MessageError::new(format!("re-described: {}", error.message())), inner)
    });

    assert_eq!(mapped.to_string(), "re-described: context -> boom");
}

#[test]
fn map_error_with_on_success_is_unchanged() {
    let mapped = Outcome::success()
        .map_error_with(|_, _| -> (MessageError, Outcome) { unreachable!("not called") });
    assert!(mapped.is_success());
}

#[test]
#[should_panic(expected = "cannot be recorded as a failure cause")]
fn map_error_with_rejects_success_as_new_inner() {
    let _ = Outcome::from_error("boom").map_error_with(|e, _| (e, Outcome::success()));
}

#[test]
fn inner_reads_are_stable() {
    let failed = Outcome::wrap("context", Outcome::from_error("boom"));
    let first = inner_ptr(&failed);
    let second = inner_ptr(&failed);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn with_context_wraps_failures_only() {
    let ok = Outcome::success().with_context("ignored");
    assert!(ok.is_success());

    let failed = Outcome::from_error("disk full").with_context("writing cache");
    assert_eq!(failed.to_string(), "writing cache -> disk full");
    assert_eq!(failed.root_cause().unwrap().message(), "disk full");
}

#[test]
fn into_result_round_trip() {
    assert!(Outcome::success().into_result().is_ok());
    let failure = Outcome::from_error("boom").into_result().unwrap_err();
    assert_eq!(failure.message(), "boom");
}

#[test]
fn display_success_and_alternate_failure() {
    assert_eq!(Outcome::success().to_string(), "success");

    let failed = Outcome::wrap("outer", Outcome::wrap("middle", Outcome::from_error("root")));
    assert_eq!(format!("{}", failed), "outer -> middle -> root");
    assert_eq!(format!("{:#}", failed), "outer\n  middle\n    root");
}

#[test]
fn outcomes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome>();
    assert_send_sync::<TypedOutcome<String>>();
    assert_send_sync::<Failure>();
}

#[test]
fn outcomes_can_be_read_from_other_threads() {
    let failed = Arc::new(Outcome::wrap("context", Outcome::from_error("boom")));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let failed = Arc::clone(&failed);
            std::thread::spawn(move || failed.to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "context -> boom");
    }
}

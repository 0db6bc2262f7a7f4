use thiserror::Error;
use vouch::{is_valid, not_panicking, not_throwing, CheckKind, Override, UNKNOWN_ERROR};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("rate limited after {attempts} attempts")]
struct RateLimited {
    attempts: u32,
}

#[test]
fn is_valid_detects_rejection() {
    let err = is_valid("1", |value| *value == "2", None).unwrap_err();
    assert_eq!(err.to_string(), "Validator did not return true.");
    assert_eq!(err.check(), Some(CheckKind::Valid));
}

#[test]
fn is_valid_returns_value() {
    assert_eq!(is_valid("1", |value| *value == "1", None).unwrap(), "1");
}

#[test]
fn not_throwing_returns_closure_value() {
    let value = not_throwing(|| Ok::<_, std::io::Error>("1"), None).unwrap();
    assert_eq!(value, "1");
}

#[test]
fn not_throwing_replaces_inner_error_with_text() {
    let err = not_throwing(|| "x".parse::<i32>(), "bad count").unwrap_err();
    assert_eq!(err.to_string(), "bad count");
    assert_eq!(err.check(), Some(CheckKind::NotThrowing));
}

#[test]
fn not_throwing_without_override_drops_inner_message() {
    let err = not_throwing(|| Err::<(), _>(RateLimited { attempts: 3 }), None).unwrap_err();
    assert_eq!(err.to_string(), UNKNOWN_ERROR);
    assert!(err.downcast_ref::<RateLimited>().is_none());
}

#[test]
fn not_throwing_surfaces_override_error() {
    let err = not_throwing(
        || "x".parse::<i32>(),
        Override::error(RateLimited { attempts: 1 }),
    )
    .unwrap_err();
    assert_eq!(err.downcast::<RateLimited>().unwrap(), RateLimited { attempts: 1 });
}

#[test]
fn not_panicking_returns_closure_value() {
    assert_eq!(not_panicking(|| 7, None).unwrap(), 7);
}

#[test]
fn not_panicking_replaces_panic() {
    let err = not_panicking(
        || -> u32 { panic!("inner detail") },
        "worker crashed",
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "worker crashed");
    assert_eq!(err.check(), Some(CheckKind::NotPanicking));
}

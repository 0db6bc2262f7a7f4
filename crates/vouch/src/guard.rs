//! Validator checks and failure-normalizing boundaries.

use std::panic::{self, AssertUnwindSafe};

use vouch_core::{CheckKind, Override, Result};

use crate::ensure::{ensure, fail};

/// Returns `value` if `validator` accepts it.
pub fn is_valid<T, F>(value: T, validator: F, message: impl Into<Override>) -> Result<T>
where
    F: FnOnce(&T) -> bool,
{
    ensure(validator(&value), CheckKind::Valid, message.into(), || {
        String::from("Validator did not return true.")
    })?;
    Ok(value)
}

/// Runs `func` and returns its value, replacing any error it returns.
///
/// The inner error is dropped, not chained. The failure is the override error
/// when one was supplied, otherwise a failure built from the override text.
///
/// ```
/// use vouch::not_throwing;
///
/// let port = not_throwing(|| "8080".parse::<u16>(), "port must be numeric").unwrap();
/// assert_eq!(port, 8080);
///
/// let err = not_throwing(|| "http".parse::<u16>(), "port must be numeric").unwrap_err();
/// assert_eq!(err.to_string(), "port must be numeric");
/// ```
pub fn not_throwing<T, X, F>(func: F, message: impl Into<Override>) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, X>,
{
    func().map_err(|_| {
        tracing::debug!(check = %CheckKind::NotThrowing, "suppressed inner error");
        fail(CheckKind::NotThrowing, message.into(), String::new)
    })
}

/// Runs `func` and returns its value, replacing a panic with a failure.
///
/// Same replacement rules as [`not_throwing`]. The panic payload is dropped.
/// The process panic hook still runs for the caught panic.
pub fn not_panicking<T, F>(func: F, message: impl Into<Override>) -> Result<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(func)).map_err(|_| {
        tracing::debug!(check = %CheckKind::NotPanicking, "suppressed panic");
        fail(CheckKind::NotPanicking, message.into(), String::new)
    })
}

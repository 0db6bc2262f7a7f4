//! Equality, boolean and truthiness checks.

use vouch_core::{CheckKind, Override, Result, Value};

use crate::ensure::{ensure, fail};

/// Returns `value` if it equals `expected`.
///
/// Default message: `Value was not equal to expected.`
pub fn is_equal<T, U>(value: T, expected: U, message: impl Into<Override>) -> Result<T>
where
    T: PartialEq<U>,
{
    ensure(value == expected, CheckKind::Equal, message.into(), || {
        String::from("Value was not equal to expected.")
    })?;
    Ok(value)
}

/// Returns the boolean if `value` is a boolean at runtime.
///
/// Strings such as `"true"`, numbers, null and undefined are all rejected.
pub fn is_boolean(value: &Value, message: impl Into<Override>) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        fail(CheckKind::Boolean, message.into(), || {
            format!("Boolean {value} was not a boolean.")
        })
    })
}

/// Succeeds only when the condition is present and exactly `true`.
pub fn is_true(condition: impl Into<Option<bool>>, message: impl Into<Override>) -> Result<()> {
    ensure(
        condition.into() == Some(true),
        CheckKind::True,
        message.into(),
        || String::from("Condition was not true."),
    )
}

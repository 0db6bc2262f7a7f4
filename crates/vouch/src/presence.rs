//! Presence, non-empty and element presence checks.

use vouch_core::{CheckKind, Override, Presence, Result, Value};

use crate::ensure::{fail, is_defined};

const NULL_ELEMENTS: &str = "Value was not array or contained null items.";

/// Narrows a possibly-absent value to its present form.
///
/// ```
/// use vouch::is_not_null;
///
/// let port: Option<u16> = Some(8080);
/// assert_eq!(is_not_null(port, None).unwrap(), 8080);
/// assert!(is_not_null(None::<u16>, None).is_err());
/// ```
pub fn is_not_null<V: Presence>(value: V, message: impl Into<Override>) -> Result<V::Present> {
    value
        .into_present()
        .ok_or_else(|| fail(CheckKind::NotNull, message.into(), || String::from("Value was null.")))
}

/// Returns the string if it is present and not empty.
///
/// Accepts anything with a [`Presence`] whose present form is text: a bare
/// `&str` or `String`, or an `Option` (owned or borrowed) of one.
pub fn is_not_empty<V>(value: V, message: impl Into<Override>) -> Result<V::Present>
where
    V: Presence,
    V::Present: AsRef<str>,
{
    match value.into_present() {
        Some(text) if !text.as_ref().is_empty() => Ok(text),
        _ => Err(fail(CheckKind::NotEmpty, message.into(), || {
            String::from("String was null or empty.")
        })),
    }
}

/// Returns the elements if `value` is an array without null or undefined items.
///
/// Non-array input fails with the same message as an array holding a null.
pub fn no_null_elements<'v>(value: &'v Value, message: impl Into<Override>) -> Result<&'v [Value]> {
    match value {
        Value::Array(items) if items.iter().all(|item| is_defined(item)) => Ok(items.as_slice()),
        _ => Err(fail(CheckKind::NoNullElements, message.into(), || {
            String::from(NULL_ELEMENTS)
        })),
    }
}

/// Narrows every element of a vector of options, failing on the first `None`.
pub fn no_none_elements<T>(values: Vec<Option<T>>, message: impl Into<Override>) -> Result<Vec<T>> {
    values
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| {
            fail(CheckKind::NoNullElements, message.into(), || {
                String::from(NULL_ELEMENTS)
            })
        })
}

//! Pattern, range and list membership checks.

use std::fmt::Display;

use regex::Regex;
use vouch_core::value::join;
use vouch_core::{CheckKind, Override, Presence, Result, Value};

use crate::ensure::{ensure, fail, is_defined, render};

/// Returns the string if it is present and `pattern` finds a match in it.
///
/// The pattern is searched, not anchored; anchor it with `^...$` to match the
/// whole string.
pub fn matches<V>(value: V, pattern: &Regex, message: impl Into<Override>) -> Result<V::Present>
where
    V: Presence,
    V::Present: AsRef<str>,
{
    match value.into_present() {
        Some(text) if pattern.is_match(text.as_ref()) => Ok(text),
        other => Err(fail(CheckKind::Matches, message.into(), || {
            format!(
                "Value [{}] did not match pattern.",
                render(other.as_ref().map(AsRef::<str>::as_ref))
            )
        })),
    }
}

/// Returns the value if it lies within `min..=max`.
///
/// Both bounds are inclusive. Values that compare unordered (NaN) fail.
pub fn is_between<T>(
    value: impl Into<Option<T>>,
    min: T,
    max: T,
    message: impl Into<Override>,
) -> Result<T>
where
    T: PartialOrd + Display,
{
    match value.into() {
        Some(value) if value >= min && value <= max => Ok(value),
        other => Err(fail(CheckKind::Between, message.into(), || {
            format!(
                "Value [{}] was not within limits [{min} - {max}].",
                render(other.as_ref())
            )
        })),
    }
}

/// Returns the value if it is present and strictly equal to an element of `list`.
pub fn is_in<'v>(
    value: &'v Value,
    list: &[Value],
    message: impl Into<Override>,
) -> Result<&'v Value> {
    ensure(
        is_defined(value) && list.contains(value),
        CheckKind::In,
        message.into(),
        || format!("Value [{value}] was not in list [{}].", join(list, ", ")),
    )?;
    Ok(value)
}

/// Returns the element of `list` equal to `value`.
///
/// Runtime behaviour matches [`is_in`]; the return type narrows an arbitrary
/// string to the list's literal type.
///
/// ```
/// use vouch::is_literal;
///
/// const METHODS: [&str; 2] = ["GET", "POST"];
///
/// let method: &'static str = is_literal("POST", &METHODS, None).unwrap();
/// assert_eq!(method, "POST");
/// assert!(is_literal("PATCH", &METHODS, None).is_err());
/// ```
pub fn is_literal<'a, L>(
    value: impl Into<Option<&'a str>>,
    list: &[L],
    message: impl Into<Override>,
) -> Result<L>
where
    L: AsRef<str> + Copy,
{
    let value = value.into();
    value
        .and_then(|text| list.iter().copied().find(|literal| literal.as_ref() == text))
        .ok_or_else(|| {
            fail(CheckKind::Literal, message.into(), || {
                let joined: Vec<&str> = list.iter().map(|literal| literal.as_ref()).collect();
                format!("Value [{}] was not in list [{}].", render(value), joined.join(", "))
            })
        })
}

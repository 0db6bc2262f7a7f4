//! Shared presence and assert-or-fail primitives.

use std::fmt::Display;

use vouch_core::{AssertionError, CheckKind, Override, Presence, Result};

/// Returns true unless the value is null or absent.
pub(crate) fn is_defined<V: Presence + ?Sized>(value: &V) -> bool {
    value.is_present()
}

/// Resolves the override into the error a failed check returns.
pub(crate) fn fail<F>(check: CheckKind, message: Override, default: F) -> AssertionError
where
    F: FnOnce() -> String,
{
    let error = message.into_error(check, default);
    tracing::debug!(check = %check, error = %error, "check failed");
    error
}

/// Fails with the resolved override unless `condition` holds.
pub(crate) fn ensure<F>(
    condition: bool,
    check: CheckKind,
    message: Override,
    default: F,
) -> Result<()>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(fail(check, message, default))
    }
}

/// Renders an optional value for a default message; absent renders as `null`.
///
/// `Option` has a single absent state, so an absent `Option` always renders as
/// `null`, never `undefined`. Only `Value::Undefined` renders as `undefined`.
pub(crate) fn render<T: Display + ?Sized>(value: Option<&T>) -> String {
    value.map_or_else(|| String::from("null"), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn absent_option_renders_as_null() {
        assert_eq!(render::<str>(None), "null");
        assert_eq!(render(Some("undefined")), "undefined");
        assert_eq!(render(Some(&1.5)), "1.5");
    }
}

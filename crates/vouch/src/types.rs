//! Class membership, date and union checks.

use vouch_core::{CheckKind, Class, Date, Instance, Override, Result, Value, DATE};

use crate::ensure::{ensure, fail, is_defined};

fn type_mismatch(class: &Class, value: &Value) -> String {
    format!(
        "Value was not of type [{}] was [{}].",
        class.name(),
        value.kind_name()
    )
}

/// Returns the value if it is an instance of `class` or one of its subclasses.
///
/// ```
/// use vouch::{is_instance_of, Date, Value, DATE, ERROR};
///
/// let value = Value::from(Date::now());
/// assert!(is_instance_of(&value, &DATE, None).is_ok());
///
/// let err = is_instance_of(&Value::from(1), &ERROR, None).unwrap_err();
/// assert_eq!(err.to_string(), "Value was not of type [Error] was [number].");
/// ```
pub fn is_instance_of<'v>(
    value: &'v Value,
    class: &Class,
    message: impl Into<Override>,
) -> Result<&'v Value> {
    ensure(
        is_defined(value) && value.is_instance_of(class),
        CheckKind::InstanceOf,
        message.into(),
        || type_mismatch(class, value),
    )?;
    Ok(value)
}

/// Narrows an instance of `class` to the concrete Rust type `T`.
///
/// Fails with the [`is_instance_of`] message when the class does not match or
/// the instance is backed by a different Rust type.
pub fn downcast_instance<'v, T>(
    value: &'v Value,
    class: &Class,
    message: impl Into<Override>,
) -> Result<&'v T>
where
    T: Instance,
{
    match value.downcast_ref::<T>() {
        Some(instance) if value.is_instance_of(class) => Ok(instance),
        _ => Err(fail(CheckKind::InstanceOf, message.into(), || {
            type_mismatch(class, value)
        })),
    }
}

/// Returns the date held by a `Date` instance with a valid time value.
///
/// The returned reference borrows the checked instance, so a subclass keeps
/// its identity behind `value`. Wrong type and invalid time value share one
/// message.
pub fn is_valid_date<'v>(value: &'v Value, message: impl Into<Override>) -> Result<&'v Date> {
    value
        .as_date()
        .filter(|date| value.is_instance_of(&DATE) && date.is_valid())
        .ok_or_else(|| {
            fail(CheckKind::ValidDate, message.into(), || {
                String::from("Value was not a valid date.")
            })
        })
}

/// Returns the value if it is an instance of at least one class in `union`.
pub fn is_in_union<'v>(
    value: &'v Value,
    union: &[&Class],
    message: impl Into<Override>,
) -> Result<&'v Value> {
    ensure(
        is_defined(value) && union.iter().any(|class| value.is_instance_of(class)),
        CheckKind::InUnion,
        message.into(),
        || {
            let names: Vec<&str> = union.iter().map(|class| class.name()).collect();
            format!(
                "Value was not in union [{}] was [{}].",
                names.join(", "),
                value.kind_name()
            )
        },
    )?;
    Ok(value)
}

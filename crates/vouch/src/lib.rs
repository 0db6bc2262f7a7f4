#![deny(missing_docs)]

//! Runtime assertion and narrowing checks for untrusted values.
//!
//! Every check takes the value, any check parameters, and an override that
//! replaces the default failure: `None` for the default message, text for a
//! custom message, or [`Override::error`] for a caller error that is returned
//! unchanged. On success the check hands back the value, narrowed or coerced.
//!
//! ```
//! use vouch::{is_between, is_not_empty, is_number, Value};
//!
//! fn parse_limit(raw: &Value) -> vouch::Result<f64> {
//!     let limit = is_number(raw, "limit must be numeric")?;
//!     is_between(limit, 1.0, 100.0, None)
//! }
//!
//! assert_eq!(parse_limit(&Value::from("25")).unwrap(), 25.0);
//! assert!(parse_limit(&Value::from("250")).is_err());
//! assert_eq!(is_not_empty("name", None).unwrap(), "name");
//! ```

mod ensure;
mod equality;
mod guard;
mod membership;
mod numeric;
mod presence;
mod types;

pub use equality::{is_boolean, is_equal, is_true};
pub use guard::{is_valid, not_panicking, not_throwing};
pub use membership::{is_between, is_in, is_literal, matches};
pub use numeric::{is_integer, is_number};
pub use presence::{is_not_null, is_not_empty, no_none_elements, no_null_elements};
pub use types::{downcast_instance, is_in_union, is_instance_of, is_valid_date};

/// Re-export of the shared core types.
pub use vouch_core::{
    AssertionError, BoxedError, CheckKind, Class, Date, ErrorObject, Failure, Instance, Override,
    Presence, Result, Value, ARRAY, BOOLEAN, DATE, ERROR, NUMBER, OBJECT, STRING, UNKNOWN_ERROR,
};

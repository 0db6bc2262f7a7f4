//! Structured failure types shared by every vouch check.

use std::error::Error as StdError;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message carried by a failure that was built without any text.
pub const UNKNOWN_ERROR: &str = "Unknown error.";

/// Boxed caller-supplied error carried through a failed check untouched.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// Convenience alias used by every check.
pub type Result<T, E = AssertionError> = std::result::Result<T, E>;

/// Identifies the check that produced a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Strict equality against an expected value.
    Equal,
    /// Runtime boolean type check.
    Boolean,
    /// Present and exactly `true`.
    True,
    /// Presence check.
    NotNull,
    /// Present, non-empty string.
    NotEmpty,
    /// Array without null or undefined elements.
    NoNullElements,
    /// Regular expression match.
    Matches,
    /// Inclusive range check.
    Between,
    /// Loose list membership.
    In,
    /// Literal list membership.
    Literal,
    /// Numeric coercion.
    Number,
    /// Whole number of numeric type.
    Integer,
    /// Caller-supplied validator.
    Valid,
    /// Fallible closure boundary.
    NotThrowing,
    /// Panicking closure boundary.
    NotPanicking,
    /// Class membership including subclasses.
    InstanceOf,
    /// Date instance with a valid time value.
    ValidDate,
    /// Membership in a union of classes.
    InUnion,
}

impl CheckKind {
    /// Stable snake case identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Equal => "equal",
            CheckKind::Boolean => "boolean",
            CheckKind::True => "true",
            CheckKind::NotNull => "not_null",
            CheckKind::NotEmpty => "not_empty",
            CheckKind::NoNullElements => "no_null_elements",
            CheckKind::Matches => "matches",
            CheckKind::Between => "between",
            CheckKind::In => "in",
            CheckKind::Literal => "literal",
            CheckKind::Number => "number",
            CheckKind::Integer => "integer",
            CheckKind::Valid => "valid",
            CheckKind::NotThrowing => "not_throwing",
            CheckKind::NotPanicking => "not_panicking",
            CheckKind::InstanceOf => "instance_of",
            CheckKind::ValidDate => "valid_date",
            CheckKind::InUnion => "in_union",
        }
    }
}

impl Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured payload attached to [`AssertionError::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Check that rejected the value.
    pub check: CheckKind,
    /// Human readable diagnostic message.
    pub message: String,
}

impl Failure {
    /// Creates a failure, substituting [`UNKNOWN_ERROR`] for empty text.
    pub fn new(check: CheckKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = UNKNOWN_ERROR.to_owned();
        }
        Self { check, message }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Canonical error returned by every check.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// Failure built from a default or caller-supplied message.
    #[error("{0}")]
    Failed(Failure),
    /// Caller-supplied error, surfaced exactly as it was handed in.
    #[error(transparent)]
    Custom(BoxedError),
}

impl AssertionError {
    /// Builds a message failure for the given check.
    pub fn failed(check: CheckKind, message: impl Into<String>) -> Self {
        AssertionError::Failed(Failure::new(check, message))
    }

    /// Returns the structured payload unless this wraps a caller error.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            AssertionError::Failed(failure) => Some(failure),
            AssertionError::Custom(_) => None,
        }
    }

    /// Returns the check that failed, when known.
    pub fn check(&self) -> Option<CheckKind> {
        self.failure().map(|failure| failure.check)
    }

    /// Returns true when this carries a caller-supplied error.
    pub fn is_custom(&self) -> bool {
        matches!(self, AssertionError::Custom(_))
    }

    /// Borrows the caller-supplied error as its concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            AssertionError::Custom(inner) => inner.downcast_ref::<E>(),
            AssertionError::Failed(_) => None,
        }
    }

    /// Recovers the caller-supplied error by value, or returns `self` unchanged.
    pub fn downcast<E>(self) -> std::result::Result<E, Self>
    where
        E: StdError + Send + Sync + 'static,
    {
        match self {
            AssertionError::Custom(inner) => inner
                .downcast::<E>()
                .map(|boxed| *boxed)
                .map_err(AssertionError::Custom),
            failed => Err(failed),
        }
    }
}

/// Optional replacement for a check's default failure.
#[derive(Debug, Default)]
pub enum Override {
    /// Use the check's own default message.
    #[default]
    None,
    /// Replace the default message with this text. Empty text counts as absent.
    Message(String),
    /// Return this error instead of building a failure.
    Error(BoxedError),
}

impl Override {
    /// Wraps a caller error so a failed check returns it unchanged.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Override::Error(Box::new(error))
    }

    /// Returns true when no override was supplied.
    pub fn is_none(&self) -> bool {
        match self {
            Override::None => true,
            Override::Message(text) => text.is_empty(),
            Override::Error(_) => false,
        }
    }

    /// Resolves the override into the error a failed check returns.
    ///
    /// `default` is only invoked when no usable text or error was supplied.
    pub fn into_error<F>(self, check: CheckKind, default: F) -> AssertionError
    where
        F: FnOnce() -> String,
    {
        match self {
            Override::Error(error) => AssertionError::Custom(error),
            Override::Message(text) if !text.is_empty() => AssertionError::failed(check, text),
            Override::Message(_) | Override::None => AssertionError::failed(check, default()),
        }
    }
}

impl From<&str> for Override {
    fn from(text: &str) -> Self {
        Override::Message(text.to_owned())
    }
}

impl From<String> for Override {
    fn from(text: String) -> Self {
        Override::Message(text)
    }
}

impl From<Option<&str>> for Override {
    fn from(text: Option<&str>) -> Self {
        text.map_or(Override::None, Override::from)
    }
}

impl From<BoxedError> for Override {
    fn from(error: BoxedError) -> Self {
        Override::Error(error)
    }
}

//! Definedness of possibly-absent values.

use crate::value::Value;

/// A value that may be null or absent.
///
/// Checks that accept an optional value test [`Presence::is_present`] before
/// their own condition and hand back [`Presence::Present`] on success.
pub trait Presence {
    /// Narrowed form of the value once it is known to be present.
    type Present;

    /// Returns true unless the value is null or absent.
    fn is_present(&self) -> bool;

    /// Narrows the value, returning `None` when it is null or absent.
    fn into_present(self) -> Option<Self::Present>;
}

impl<T> Presence for Option<T> {
    type Present = T;

    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn into_present(self) -> Option<T> {
        self
    }
}

impl<'a, T> Presence for &'a Option<T> {
    type Present = &'a T;

    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn into_present(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl Presence for Value {
    type Present = Value;

    fn is_present(&self) -> bool {
        !matches!(self, Value::Null | Value::Undefined)
    }

    fn into_present(self) -> Option<Value> {
        if self.is_present() {
            Some(self)
        } else {
            None
        }
    }
}

impl<'a> Presence for &'a Value {
    type Present = &'a Value;

    fn is_present(&self) -> bool {
        (**self).is_present()
    }

    fn into_present(self) -> Option<&'a Value> {
        if self.is_present() {
            Some(self)
        } else {
            None
        }
    }
}

impl<'a> Presence for &'a str {
    type Present = &'a str;

    fn is_present(&self) -> bool {
        true
    }

    fn into_present(self) -> Option<&'a str> {
        Some(self)
    }
}

impl Presence for String {
    type Present = String;

    fn is_present(&self) -> bool {
        true
    }

    fn into_present(self) -> Option<String> {
        Some(self)
    }
}

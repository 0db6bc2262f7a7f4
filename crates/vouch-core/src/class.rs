//! Runtime class descriptors and the capability trait for checkable instances.
//!
//! A [`Class`] is declared as a `static` and identified by its address, so two
//! classes with the same display name are still distinct. Classes declared with
//! [`Class::new`] implicitly extend [`OBJECT`]; [`Class::extends`] names an
//! explicit parent. Abstract bases need no special treatment: they are classes
//! that no [`Instance`] reports directly.
//!
//! ```
//! use vouch_core::{Class, DATE};
//!
//! static SHAPE: Class = Class::new("Shape");
//! static CIRCLE: Class = Class::extends("Circle", &SHAPE);
//!
//! assert!(CIRCLE.is_subclass_of(&SHAPE));
//! assert!(!SHAPE.is_subclass_of(&CIRCLE));
//! assert!(!CIRCLE.is_subclass_of(&DATE));
//! ```

use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::ptr;

use crate::date::Date;

/// First-class type descriptor with a display name and an optional parent.
pub struct Class {
    name: &'static str,
    parent: Option<&'static Class>,
}

impl Class {
    /// Declares a class extending [`OBJECT`].
    pub const fn new(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Declares a class extending `parent`.
    pub const fn extends(name: &'static str, parent: &'static Class) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// Declared name of the class.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Direct parent, or `None` for [`OBJECT`] itself.
    pub fn parent(&self) -> Option<&'static Class> {
        match self.parent {
            Some(parent) => Some(parent),
            None if ptr::eq(self, &OBJECT) => None,
            None => Some(&OBJECT),
        }
    }

    /// Iterates over this class followed by every ancestor up to [`OBJECT`].
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// Returns true when `self` is `other` or one of its descendants.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestors().any(|class| ptr::eq(class, other))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Class").field(&self.name).finish()
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Root of every class hierarchy.
pub static OBJECT: Class = Class::new("Object");
/// Class of [`Value::Array`](crate::Value::Array).
pub static ARRAY: Class = Class::new("Array");
/// Class of [`Date`].
pub static DATE: Class = Class::new("Date");
/// Class of [`ErrorObject`].
pub static ERROR: Class = Class::new("Error");
/// Boxed string class. Primitive strings are never instances of it.
pub static STRING: Class = Class::new("String");
/// Boxed number class. Primitive numbers are never instances of it.
pub static NUMBER: Class = Class::new("Number");
/// Boxed boolean class. Primitive booleans are never instances of it.
pub static BOOLEAN: Class = Class::new("Boolean");

/// Capability implemented by every value that can be held in
/// [`Value::Instance`](crate::Value::Instance).
pub trait Instance: Any + Debug + Send + Sync {
    /// Most derived class of this instance.
    fn class(&self) -> &'static Class;

    /// Exposes the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Underlying date for instances of [`DATE`] and its subclasses.
    fn as_date(&self) -> Option<&Date> {
        None
    }

    /// String conversion used in failure messages.
    fn describe(&self) -> String {
        String::from("[object Object]")
    }
}

/// Generic error instance, the value-level counterpart of [`ERROR`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorObject {
    /// Message the error was created with.
    pub message: String,
}

impl ErrorObject {
    /// Creates an error instance with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Instance for ErrorObject {
    fn class(&self) -> &'static Class {
        &ERROR
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn describe(&self) -> String {
        if self.message.is_empty() {
            ERROR.name().to_owned()
        } else {
            format!("{}: {}", ERROR.name(), self.message)
        }
    }
}

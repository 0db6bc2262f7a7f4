//! Dynamic model of an untrusted value.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::class::{Class, Instance, ARRAY, OBJECT};
use crate::date::Date;

/// Untrusted value as received at a program boundary.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence sentinel: the value was never supplied.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Number primitive. Every number is a double.
    Number(f64),
    /// String primitive.
    String(String),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Plain keyed object.
    Object(BTreeMap<String, Value>),
    /// Instance of a declared [`Class`].
    Instance(Arc<dyn Instance>),
}

impl Value {
    /// Wraps an instance of a declared class.
    pub fn instance<T: Instance>(instance: T) -> Self {
        Value::Instance(Arc::new(instance))
    }

    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// String payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Instance payload, if this is a class instance.
    pub fn as_instance(&self) -> Option<&dyn Instance> {
        match self {
            Value::Instance(instance) => Some(instance.as_ref()),
            _ => None,
        }
    }

    /// Date payload for instances of `Date` and its subclasses.
    pub fn as_date(&self) -> Option<&Date> {
        self.as_instance().and_then(|instance| instance.as_date())
    }

    /// Borrows the concrete Rust type behind an instance.
    pub fn downcast_ref<T: Instance>(&self) -> Option<&T> {
        self.as_instance()
            .and_then(|instance| instance.as_any().downcast_ref::<T>())
    }

    /// Class of the value. Primitives, null and undefined have none.
    pub fn class(&self) -> Option<&'static Class> {
        match self {
            Value::Array(_) => Some(&ARRAY),
            Value::Object(_) => Some(&OBJECT),
            Value::Instance(instance) => Some(instance.class()),
            _ => None,
        }
    }

    /// Returns true when the value's class is `class` or one of its descendants.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class()
            .is_some_and(|own| own.is_subclass_of(class))
    }

    /// Short description of the runtime kind, used in type failures.
    ///
    /// Primitives report their lowercase kind, objects report their class name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => ARRAY.name(),
            Value::Object(_) => OBJECT.name(),
            Value::Instance(instance) => instance.class().name(),
        }
    }
}

/// Joins values the way arrays render, with null and undefined left empty.
pub fn join(values: &[Value], separator: &str) -> String {
    let mut out = String::new();
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        if !matches!(value, Value::Null | Value::Undefined) {
            out.push_str(&value.to_string());
        }
    }
    out
}

/// Renders a number the way script string conversion does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return String::from("0");
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponent = format!("{value:e}");
    match exponent.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponent,
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Number(value) => f.write_str(&format_number(*value)),
            Value::String(value) => f.write_str(value),
            Value::Array(values) => f.write_str(&join(values, ",")),
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Instance(instance) => f.write_str(&instance.describe()),
        }
    }
}

/// Strict equality. Primitives compare by value (NaN never equals itself),
/// arrays and objects structurally, instances by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => {
                Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Value::instance(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => {
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

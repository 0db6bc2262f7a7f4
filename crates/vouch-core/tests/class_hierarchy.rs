use std::any::Any;

use vouch_core::{
    Class, Date, ErrorObject, Instance, Value, ARRAY, BOOLEAN, DATE, ERROR, NUMBER, OBJECT,
    STRING,
};

static SHAPE: Class = Class::new("Shape");
static POLYGON: Class = Class::extends("Polygon", &SHAPE);
static SQUARE: Class = Class::extends("Square", &POLYGON);
static OTHER_SHAPE: Class = Class::new("Shape");

#[derive(Debug)]
struct Square;

impl Instance for Square {
    fn class(&self) -> &'static Class {
        &SQUARE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn subclass_walk_includes_every_ancestor() {
    assert!(SQUARE.is_subclass_of(&SQUARE));
    assert!(SQUARE.is_subclass_of(&POLYGON));
    assert!(SQUARE.is_subclass_of(&SHAPE));
    assert!(SQUARE.is_subclass_of(&OBJECT));
    assert!(!SHAPE.is_subclass_of(&SQUARE));
}

#[test]
fn classes_are_compared_by_identity() {
    assert_eq!(SHAPE.name(), OTHER_SHAPE.name());
    assert_ne!(SHAPE, OTHER_SHAPE);
    assert!(!SQUARE.is_subclass_of(&OTHER_SHAPE));
}

#[test]
fn ancestors_end_at_object() {
    let names: Vec<&str> = SQUARE.ancestors().map(Class::name).collect();
    assert_eq!(names, ["Square", "Polygon", "Shape", "Object"]);
    assert!(OBJECT.parent().is_none());
    assert_eq!(DATE.parent(), Some(&OBJECT));
}

#[test]
fn builtins_extend_object_only() {
    for class in [&ARRAY, &DATE, &ERROR, &STRING, &NUMBER, &BOOLEAN] {
        assert!(class.is_subclass_of(&OBJECT));
    }
    assert!(!DATE.is_subclass_of(&ERROR));
}

#[test]
fn value_instance_rules() {
    assert!(!Value::Null.is_instance_of(&OBJECT));
    assert!(!Value::Undefined.is_instance_of(&OBJECT));
    assert!(!Value::from("text").is_instance_of(&STRING));
    assert!(!Value::from(1).is_instance_of(&NUMBER));
    assert!(!Value::from(true).is_instance_of(&BOOLEAN));
    assert!(Value::Array(Vec::new()).is_instance_of(&ARRAY));
    assert!(Value::Array(Vec::new()).is_instance_of(&OBJECT));
    assert!(Value::from(serde_json::json!({})).is_instance_of(&OBJECT));
    assert!(!Value::from(serde_json::json!({})).is_instance_of(&ARRAY));
    assert!(Value::instance(Square).is_instance_of(&SHAPE));
    assert!(Value::instance(ErrorObject::new("boom")).is_instance_of(&ERROR));
}

#[test]
fn kind_names_describe_runtime_kind() {
    assert_eq!(Value::Null.kind_name(), "null");
    assert_eq!(Value::Undefined.kind_name(), "undefined");
    assert_eq!(Value::from(false).kind_name(), "boolean");
    assert_eq!(Value::from(2.5).kind_name(), "number");
    assert_eq!(Value::from("a").kind_name(), "string");
    assert_eq!(Value::Array(Vec::new()).kind_name(), "Array");
    assert_eq!(Value::from(Date::now()).kind_name(), "Date");
    assert_eq!(Value::instance(Square).kind_name(), "Square");
}

#[test]
fn downcast_ref_reaches_concrete_type() {
    let value = Value::instance(Square);
    assert!(value.downcast_ref::<Square>().is_some());
    assert!(value.downcast_ref::<Date>().is_none());
    assert!(value.as_date().is_none());
}

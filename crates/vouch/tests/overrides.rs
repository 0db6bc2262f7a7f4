use regex::Regex;
use thiserror::Error;
use vouch::{
    is_between, is_boolean, is_equal, is_in_union, is_instance_of, is_not_empty, is_not_null,
    is_number, is_true, is_valid_date, matches, no_null_elements, AssertionError, Override,
    Value, DATE,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("My error.")]
struct CustomError;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("request rejected with status {status}")]
struct Rejected {
    status: u16,
    field: &'static str,
}

fn custom() -> Override {
    Override::error(CustomError)
}

#[test]
fn custom_error_is_returned_as_is() {
    let err = is_true(false, Override::error(CustomError)).unwrap_err();
    assert!(err.is_custom());
    assert_eq!(err.to_string(), "My error.");
    assert_eq!(err.downcast_ref::<CustomError>(), Some(&CustomError));
    assert_eq!(err.check(), None);
}

#[test]
fn custom_error_keeps_its_fields() {
    let rejected = Rejected {
        status: 422,
        field: "email",
    };
    let err = is_not_empty("", Override::error(rejected)).unwrap_err();
    let recovered = err.downcast::<Rejected>().unwrap();
    assert_eq!(recovered.status, 422);
    assert_eq!(recovered.field, "email");
}

#[test]
fn every_check_surfaces_custom_errors() {
    let pattern = Regex::new("^x$").unwrap();
    let failures: Vec<AssertionError> = vec![
        is_equal(1, 2, custom()).unwrap_err(),
        is_boolean(&Value::Null, custom()).unwrap_err(),
        is_not_null(None::<u8>, custom()).unwrap_err(),
        no_null_elements(&Value::from(1), custom()).unwrap_err(),
        matches("y", &pattern, custom()).unwrap_err(),
        is_between(9, 0, 1, custom()).unwrap_err(),
        is_number(&Value::from("n/a"), custom()).unwrap_err(),
        is_instance_of(&Value::Null, &DATE, custom()).unwrap_err(),
        is_valid_date(&Value::Null, custom()).unwrap_err(),
        is_in_union(&Value::Null, &[&DATE], custom()).unwrap_err(),
    ];
    for err in failures {
        assert!(err.downcast_ref::<CustomError>().is_some(), "{err:?}");
    }
}

#[test]
fn text_override_replaces_default_message() {
    let err = is_not_null(None::<u8>, "port is required").unwrap_err();
    assert_eq!(err.to_string(), "port is required");
    let err = is_true(false, String::from("flag must be set")).unwrap_err();
    assert_eq!(err.to_string(), "flag must be set");
}

#[test]
fn empty_text_override_falls_back_to_default() {
    let err = is_not_null(None::<u8>, "").unwrap_err();
    assert_eq!(err.to_string(), "Value was null.");
    let err = is_not_null(None::<u8>, Override::None).unwrap_err();
    assert_eq!(err.to_string(), "Value was null.");
}

#[test]
fn valid_date_override_covers_both_halves() {
    let wrong_type = is_valid_date(&Value::from(1), "bad date").unwrap_err();
    let invalid = is_valid_date(&Value::from(vouch::Date::invalid()), "bad date").unwrap_err();
    assert_eq!(wrong_type.to_string(), "bad date");
    assert_eq!(invalid.to_string(), "bad date");
}

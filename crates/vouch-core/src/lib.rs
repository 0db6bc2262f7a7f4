#![deny(missing_docs)]
#![doc = "Failure, value and class descriptor types shared by the vouch checks."]

pub mod class;
pub mod date;
pub mod errors;
pub mod presence;
pub mod value;

pub use class::{
    Class, ErrorObject, Instance, ARRAY, BOOLEAN, DATE, ERROR, NUMBER, OBJECT, STRING,
};
pub use date::{Date, MAX_TIME_MS};
pub use errors::{
    AssertionError, BoxedError, CheckKind, Failure, Override, Result, UNKNOWN_ERROR,
};
pub use presence::Presence;
pub use value::Value;

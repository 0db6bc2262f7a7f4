//! Date instances that may carry an invalid time value.

use std::any::Any;

use chrono::{DateTime, Utc};

use crate::class::{Class, Instance, DATE};

/// Largest distance from the epoch, in milliseconds, a valid date may have.
pub const MAX_TIME_MS: f64 = 8.64e15;

/// Point in time, or the invalid date.
///
/// The time value is held as whole milliseconds since the epoch, NaN for the
/// invalid date. `chrono` is only consulted for conversions and rendering, so
/// the full `±MAX_TIME_MS` range stays valid even where `chrono` cannot
/// represent the instant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Date {
    time: f64,
}

impl Date {
    /// Current system time.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// The invalid date.
    pub fn invalid() -> Self {
        Self { time: f64::NAN }
    }

    /// Builds a date from milliseconds since the epoch.
    ///
    /// NaN, infinities and values beyond [`MAX_TIME_MS`] produce the invalid
    /// date. Fractional milliseconds are truncated.
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_TIME_MS {
            return Self::invalid();
        }
        // trunc keeps -0.0 for small negatives; adding zero normalizes it
        Self {
            time: millis.trunc() + 0.0,
        }
    }

    /// Milliseconds since the epoch, or NaN for the invalid date.
    pub fn get_time(&self) -> f64 {
        self.time
    }

    /// Returns true unless this is the invalid date.
    pub fn is_valid(&self) -> bool {
        !self.time.is_nan()
    }

    /// Timestamp for valid dates inside the range `chrono` can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(self.time as i64)
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(time: DateTime<Utc>) -> Self {
        Self {
            time: time.timestamp_millis() as f64,
        }
    }
}

impl Instance for Date {
    fn class(&self) -> &'static Class {
        &DATE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_date(&self) -> Option<&Date> {
        Some(self)
    }

    fn describe(&self) -> String {
        match self.to_datetime() {
            Some(time) => time
                .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
                .to_string(),
            None if self.is_valid() => format!("{} ms since epoch", self.time),
            None => String::from("Invalid Date"),
        }
    }
}

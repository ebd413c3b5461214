//! The database driver boundary.
//!
//! `DriverValue` is the boxed representation of a single column value as it
//! crosses between a database driver and application code. Drivers
//! conventionally accept only this small set of types, so narrower integers
//! are widened to `Int64` on the way out.

use chrono::{DateTime, Utc};
use std::fmt;

pub mod convert;

pub use convert::assign_i8;

/// A column value as produced or consumed by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL.
    Null,
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Time(DateTime<Utc>),
}

impl DriverValue {
    /// Returns `true` for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short name for the variant, used in coercion error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int64(_) => "int64",
            Self::Float64(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Time(_) => "time",
        }
    }
}

impl fmt::Display for DriverValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Float64(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Self::Text(s) => write!(f, "{}", s),
            Self::Time(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for DriverValue {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for DriverValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<String> for DriverValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for DriverValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

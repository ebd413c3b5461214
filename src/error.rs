// In: src/error.rs

//! This module defines the single, unified error type for the tambak null library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every failure is a local, value-level error returned to the caller. Nothing in
//! this crate logs an error and carries on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NullError {
    // =========================================================================
    // === Decode Errors (JSON / text)
    // =========================================================================
    /// The decoded JSON value is of a kind that cannot become an int8
    /// (boolean, array or object).
    #[error("json: cannot unmarshal {0} into value of type NullInt8")]
    UnsupportedKind(String),

    /// The parsed integer is larger than `i8::MAX`.
    #[error("json: {0} overflows max int8 value")]
    Overflow(i64),

    /// A JSON number that cannot be read as a 64-bit signed integer
    /// (fractional, exponent form, or beyond the i64 range).
    #[error("json: cannot unmarshal number {0} into int64")]
    NumberOutOfRange(String),

    /// Malformed decimal text, propagated verbatim from the integer parser.
    #[error("{0}")]
    Parse(#[from] std::num::ParseIntError),

    /// The input was not well-formed JSON.
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // === Driver Errors
    // =========================================================================
    /// A driver value could not be coerced into an int8.
    #[error("converting driver value type {from} ({value:?}) to a int8: {reason}")]
    Convert {
        from: &'static str,
        value: String,
        reason: String,
    },

    /// An error from the I/O subsystem, e.g. opening a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed by someone else.
    #[error("Logger installation failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    // =========================================================================
    // === Configuration Errors
    // =========================================================================
    #[error("Invalid decode configuration: {0}")]
    InvalidConfig(String),
}

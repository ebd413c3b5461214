//! This module defines the nullable scalar types exposed by the crate.
//!
//! It currently contains `NullInt8`, the nullable 8-bit signed integer.

pub mod null_int8;


// Re-export the main type(s) for easier access.
pub use null_int8::NullInt8;

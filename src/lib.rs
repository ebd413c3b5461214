//! This file is the root of the `tambak_null` Rust crate.
//!
//! The crate provides `NullInt8`, a nullable 8-bit signed integer that keeps
//! "null" and "zero" apart across JSON, plain text, and database driver values.
//! Its responsibilities here are limited to declaring the modules and
//! re-exporting the public surface.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod traits;
pub mod types;

mod random;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use codec::NULL_BYTES;
pub use config::DecodeConfig;
pub use driver::DriverValue;
pub use error::NullError;
pub use traits::{Scanner, Valuer};
pub use types::NullInt8;

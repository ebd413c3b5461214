//! This module defines the traits a database layer binds against.

use crate::driver::DriverValue;
use crate::error::NullError;

/// Reads a column value handed over by a database driver.
pub trait Scanner {
    /// Overwrites `self` from `value`. On error the receiver's contents are
    /// unspecified and the caller must discard it.
    fn scan(&mut self, value: &DriverValue) -> Result<(), NullError>;
}

/// Produces the value a database driver should persist.
pub trait Valuer {
    fn value(&self) -> Result<DriverValue, NullError>;
}

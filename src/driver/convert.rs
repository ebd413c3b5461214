//! Coercion of driver values into an `i8` target.
//!
//! Integers and integral floats are range-checked, text and bytes are parsed
//! as base-10 decimal, everything else is rejected. `Null` is rejected too;
//! nullable callers must handle it before coercing.

use num_traits::ToPrimitive;

use crate::driver::DriverValue;
use crate::error::NullError;

/// Coerces `src` into an `i8`, failing with `NullError::Convert` when the
/// value is incompatible or out of range.
pub fn assign_i8(src: &DriverValue) -> Result<i8, NullError> {
    match src {
        DriverValue::Int64(v) => v.to_i8().ok_or_else(|| out_of_range(src)),
        DriverValue::Float64(v) => {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(convert_error(src, "invalid syntax"));
            }
            v.to_i8().ok_or_else(|| out_of_range(src))
        }
        DriverValue::Text(s) => parse_decimal(src, s),
        DriverValue::Bytes(b) => {
            let s = std::str::from_utf8(b).map_err(|e| convert_error(src, &e.to_string()))?;
            parse_decimal(src, s)
        }
        DriverValue::Null => Err(convert_error(src, "unsupported scan of NULL into int8")),
        DriverValue::Bool(_) | DriverValue::Time(_) => Err(convert_error(src, "invalid syntax")),
    }
}

fn parse_decimal(src: &DriverValue, s: &str) -> Result<i8, NullError> {
    s.parse::<i8>().map_err(|e| convert_error(src, &e.to_string()))
}

fn out_of_range(src: &DriverValue) -> NullError {
    convert_error(src, "value out of range")
}

fn convert_error(src: &DriverValue, reason: &str) -> NullError {
    NullError::Convert {
        from: src.type_name(),
        value: src.to_string(),
        reason: reason.to_string(),
    }
}

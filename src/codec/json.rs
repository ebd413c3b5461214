//! JSON encoding and decoding for `NullInt8`.
//!
//! Decoding parses the input into a `serde_json::Value` and matches on its
//! kind. serde_json keeps the literal text of each number
//! (`arbitrary_precision`), so numbers are parsed from that text as `i64` and
//! never pass through `f64`: `-0` is zero, `1e2` and `1.5` are rejected.
//! Only values above `i8::MAX` are reported as overflow; values below
//! `i8::MIN` are narrowed with a wrapping cast.

use serde_json::Value;

use super::NULL_BYTES;
use crate::config::DecodeConfig;
use crate::error::NullError;
use crate::types::NullInt8;

//==================================================================================
// 1. Decoding
//==================================================================================

/// Decodes raw JSON bytes into a fresh `NullInt8`.
pub fn decode(data: &[u8], config: &DecodeConfig) -> Result<NullInt8, NullError> {
    if data == NULL_BYTES {
        return Ok(NullInt8::null());
    }

    let parsed: Value = serde_json::from_slice(data)?;
    decode_value(&parsed, config)
}

/// Decodes an already-parsed JSON value.
pub fn decode_value(value: &Value, config: &DecodeConfig) -> Result<NullInt8, NullError> {
    let r: i64 = match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| NullError::NumberOutOfRange(n.to_string()))?,
        Value::String(s) => {
            if s.is_empty() {
                return Ok(NullInt8::null());
            }
            i64::from(s.parse::<i8>()?)
        }
        Value::Null => return Ok(NullInt8::null()),
        other => return Err(NullError::UnsupportedKind(kind_name(other).to_string())),
    };

    if r > i64::from(i8::MAX) {
        return Err(NullError::Overflow(r));
    }

    let narrowed = r as i8;
    if narrowed == 0 && config.zero_is_null {
        log::debug!("decoded json zero treated as null (zero_is_null = true)");
        return Ok(NullInt8::new(0, false));
    }
    Ok(NullInt8::new(narrowed, true))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//==================================================================================
// 2. Encoding
//==================================================================================

/// Encodes a `NullInt8` as a bare JSON number, or `null` when invalid.
pub fn encode(n: &NullInt8) -> Vec<u8> {
    match n.ptr() {
        Some(v) => v.to_string().into_bytes(),
        None => NULL_BYTES.to_vec(),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quirk() -> DecodeConfig {
        DecodeConfig::default()
    }

    #[test]
    fn test_decode_number_and_string() {
        assert_eq!(decode(b"12", &quirk()).unwrap(), NullInt8::from_value(12));
        assert_eq!(decode(b"\"-12\"", &quirk()).unwrap(), NullInt8::from_value(-12));
        assert_eq!(decode(b" 5 ", &quirk()).unwrap(), NullInt8::from_value(5));
    }

    #[test]
    fn test_decode_null_forms() {
        assert_eq!(decode(b"null", &quirk()).unwrap(), NullInt8::null());
        assert_eq!(decode(b" null ", &quirk()).unwrap(), NullInt8::null());
        assert_eq!(decode(b"\"\"", &quirk()).unwrap(), NullInt8::null());
    }

    #[test]
    fn test_decode_zero_depends_on_config() {
        let n = decode(b"0", &quirk()).unwrap();
        assert!(!n.is_valid());
        assert_eq!(n.raw(), 0);

        let n = decode(b"\"0\"", &quirk()).unwrap();
        assert!(!n.is_valid());

        let n = decode(b"0", &DecodeConfig::strict()).unwrap();
        assert_eq!(n, NullInt8::from_value(0));
    }

    #[test]
    fn test_decode_overflow_and_narrowing() {
        assert!(matches!(decode(b"128", &quirk()), Err(NullError::Overflow(128))));
        assert!(matches!(decode(b"1000", &quirk()), Err(NullError::Overflow(1000))));
        assert_eq!(decode(b"-128", &quirk()).unwrap(), NullInt8::from_value(-128));
        // -200 wraps to 56
        assert_eq!(decode(b"-200", &quirk()).unwrap(), NullInt8::from_value(56));
    }

    #[test]
    fn test_decode_non_integer_numbers() {
        assert!(matches!(decode(b"1.5", &quirk()), Err(NullError::NumberOutOfRange(_))));
        assert!(matches!(
            decode(b"18446744073709551615", &quirk()),
            Err(NullError::NumberOutOfRange(_))
        ));
    }

    #[test]
    fn test_decode_number_error_names_input_literal() {
        match decode(b"1e2", &quirk()) {
            Err(NullError::NumberOutOfRange(literal)) => assert_eq!(literal, "1e2"),
            other => panic!("expected NumberOutOfRange, got {:?}", other),
        }
        let err = decode(b"1.50", &quirk()).unwrap_err();
        assert_eq!(err.to_string(), "json: cannot unmarshal number 1.50 into int64");
    }

    #[test]
    fn test_decode_negative_zero_literal() {
        let n = decode(b"-0", &quirk()).unwrap();
        assert_eq!(n, NullInt8::null());

        let n = decode(b"-0", &DecodeConfig::strict()).unwrap();
        assert_eq!(n, NullInt8::from_value(0));
        assert_eq!(decode(b"\"-0\"", &DecodeConfig::strict()).unwrap(), n);
    }

    #[test]
    fn test_decode_string_parse_errors() {
        assert!(matches!(decode(b"\"abc\"", &quirk()), Err(NullError::Parse(_))));
        assert!(matches!(decode(b"\"128\"", &quirk()), Err(NullError::Parse(_))));
    }

    #[test]
    fn test_decode_unsupported_kinds() {
        for input in [&b"true"[..], &b"false"[..], &b"[1]"[..], &b"{\"a\":1}"[..]] {
            assert!(matches!(
                decode(input, &quirk()),
                Err(NullError::UnsupportedKind(_))
            ));
        }
        let err = decode(b"true", &quirk()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "json: cannot unmarshal bool into value of type NullInt8"
        );
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(matches!(decode(b"{", &quirk()), Err(NullError::Json(_))));
        assert!(matches!(decode(b"", &quirk()), Err(NullError::Json(_))));
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&NullInt8::from_value(-3)), b"-3".to_vec());
        assert_eq!(encode(&NullInt8::new(5, false)), b"null".to_vec());
    }
}

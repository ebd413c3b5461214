//! Generic text encoding and decoding for `NullInt8`.

use crate::error::NullError;
use crate::types::NullInt8;

/// Parses decimal text. Returns `Ok(None)` for empty input (null).
pub fn decode(text: &[u8]) -> Result<Option<i8>, NullError> {
    if text.is_empty() {
        return Ok(None);
    }
    let parsed = String::from_utf8_lossy(text).parse::<i8>()?;
    Ok(Some(parsed))
}

/// Encodes decimal ASCII digits, or an empty sequence when invalid.
pub fn encode(n: &NullInt8) -> Vec<u8> {
    n.ptr()
        .map(|v| v.to_string().into_bytes())
        .unwrap_or_default()
}

// In: src/config.rs

//! Configuration for decoding `NullInt8` values.
//!
//! The JSON decoder historically treats a decoded `0` as null. Rather than
//! silently changing that, the behavior is exposed here as a switch whose
//! default keeps the historical semantics.

use serde::{Deserialize, Serialize};

use crate::error::NullError;

/// Options consulted by the JSON decoder.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecodeConfig {
    /// When true, a JSON number or string that decodes to `0` yields an
    /// invalid (null) result even though no null was present in the input.
    #[serde(default = "default_true")]
    pub zero_is_null: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { zero_is_null: true }
    }
}

impl DecodeConfig {
    /// A config that keeps `0` as a present value.
    pub fn strict() -> Self {
        Self {
            zero_is_null: false,
        }
    }

    /// Loads a config from a JSON document such as `{"zero_is_null": false}`.
    /// Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, NullError> {
        serde_json::from_str(s).map_err(|e| NullError::InvalidConfig(e.to_string()))
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_zero_quirk() {
        assert!(DecodeConfig::default().zero_is_null);
        assert!(!DecodeConfig::strict().zero_is_null);
    }

    #[test]
    fn test_from_json_str() {
        let cfg = DecodeConfig::from_json_str(r#"{"zero_is_null": false}"#).unwrap();
        assert_eq!(cfg, DecodeConfig::strict());

        let cfg = DecodeConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, DecodeConfig::default());
    }

    #[test]
    fn test_from_json_str_rejects_bad_input() {
        let err = DecodeConfig::from_json_str(r#"{"zero_is_null": "yes"}"#).unwrap_err();
        assert!(matches!(err, NullError::InvalidConfig(_)));
    }
}

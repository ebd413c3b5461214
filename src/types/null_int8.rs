//! This module defines `NullInt8`, a nullable 8-bit signed integer that
//! distinguishes "null" from "zero" across JSON, plain text, and database
//! driver values.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::codec;
use crate::config::DecodeConfig;
use crate::driver::{assign_i8, DriverValue};
use crate::error::NullError;
use crate::traits::{Scanner, Valuer};

/// A nullable `i8`.
///
/// `valid == false` means the value is logically null. Transitions to invalid
/// through `scan` or the decoders reset the stored integer to `0`; `new`
/// stores exactly what it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullInt8 {
    value: i8,
    valid: bool,
}

//==================================================================================
// 1. Construction & Accessors
//==================================================================================

impl NullInt8 {
    /// Creates a `NullInt8` with exactly the given fields.
    pub const fn new(value: i8, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a `NullInt8` that is always valid.
    pub const fn from_value(value: i8) -> Self {
        Self::new(value, true)
    }

    /// Creates a `NullInt8` that is null when `value` is `None`.
    pub const fn from_option(value: Option<i8>) -> Self {
        match value {
            Some(v) => Self::new(v, true),
            None => Self::new(0, false),
        }
    }

    /// The null value, `(0, false)`.
    pub const fn null() -> Self {
        Self::new(0, false)
    }

    /// The stored integer. Meaningless when `is_valid()` is false.
    pub const fn raw(&self) -> i8 {
        self.value
    }

    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Changes the value and marks it non-null.
    pub fn set_valid(&mut self, n: i8) {
        self.value = n;
        self.valid = true;
    }

    /// Returns a copy of the value, or `None` if null.
    pub const fn ptr(&self) -> Option<i8> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Returns `true` when null. Usable with
    /// `#[serde(skip_serializing_if = "NullInt8::is_zero")]`.
    pub const fn is_zero(&self) -> bool {
        !self.valid
    }
}

//==================================================================================
// 2. JSON & Text
//==================================================================================

impl NullInt8 {
    /// Decodes JSON bytes with the default configuration.
    pub fn from_json(data: &[u8]) -> Result<Self, NullError> {
        codec::json::decode(data, &DecodeConfig::default())
    }

    /// Decodes JSON bytes with an explicit configuration.
    pub fn from_json_with(data: &[u8], config: &DecodeConfig) -> Result<Self, NullError> {
        codec::json::decode(data, config)
    }

    /// Overwrites `self` from JSON bytes. On error `self` is left untouched
    /// and should be discarded.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), NullError> {
        self.unmarshal_json_with(data, &DecodeConfig::default())
    }

    pub fn unmarshal_json_with(
        &mut self,
        data: &[u8],
        config: &DecodeConfig,
    ) -> Result<(), NullError> {
        *self = codec::json::decode(data, config)?;
        Ok(())
    }

    /// Encodes as a bare JSON number, or `null`.
    pub fn marshal_json(&self) -> Vec<u8> {
        codec::json::encode(self)
    }

    /// Decodes decimal text. Empty input marks `self` null without touching
    /// the stored integer. A parse failure also marks `self` null and returns
    /// the parse error.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), NullError> {
        match codec::text::decode(text) {
            Ok(Some(v)) => {
                self.value = v;
                self.valid = true;
                Ok(())
            }
            Ok(None) => {
                self.valid = false;
                Ok(())
            }
            Err(e) => {
                self.valid = false;
                Err(e)
            }
        }
    }

    /// Encodes as decimal text, or an empty sequence when null.
    pub fn marshal_text(&self) -> Vec<u8> {
        codec::text::encode(self)
    }
}

impl FromStr for NullInt8 {
    type Err = NullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut n = Self::null();
        n.unmarshal_text(s.as_bytes())?;
        Ok(n)
    }
}

impl Serialize for NullInt8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.ptr() {
            Some(v) => serializer.serialize_i8(v),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullInt8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        codec::json::decode_value(&value, &DecodeConfig::default()).map_err(D::Error::custom)
    }
}

//==================================================================================
// 3. Optional Interop
//==================================================================================

impl From<i8> for NullInt8 {
    fn from(value: i8) -> Self {
        Self::from_value(value)
    }
}

impl From<Option<i8>> for NullInt8 {
    fn from(value: Option<i8>) -> Self {
        Self::from_option(value)
    }
}

impl From<NullInt8> for Option<i8> {
    fn from(n: NullInt8) -> Self {
        n.ptr()
    }
}

//==================================================================================
// 4. Database Driver Binding
//==================================================================================

impl Scanner for NullInt8 {
    fn scan(&mut self, value: &DriverValue) -> Result<(), NullError> {
        if value.is_null() {
            self.value = 0;
            self.valid = false;
            return Ok(());
        }
        log::trace!("scanning {} driver value into NullInt8", value.type_name());
        self.valid = true;
        self.value = assign_i8(value)?;
        Ok(())
    }
}

impl Valuer for NullInt8 {
    fn value(&self) -> Result<DriverValue, NullError> {
        Ok(self
            .ptr()
            .map_or(DriverValue::Null, |v| DriverValue::Int64(i64::from(v))))
    }
}

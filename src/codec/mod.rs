//! Pure, stateless encoders and decoders for the wire formats `NullInt8`
//! supports. The type's methods and serde impls delegate here.
//!
//! - `json`: bare JSON number, decimal string, or `null`.
//! - `text`: decimal ASCII digits, or an empty sequence for null.

pub mod json;
pub mod text;

/// The byte representation of the JSON null literal.
pub const NULL_BYTES: &[u8] = b"null";

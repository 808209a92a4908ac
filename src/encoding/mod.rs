// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON encoding and typed decoding.
//!
//! This module provides:
//! - [`ToJson`] / [`JsonWriter`] - the encoder and its type-dispatch rules
//! - [`FromJson`] - structural conversion of parsed values into Rust types
//! - `serde_json::Value` interop

pub mod from_json;
pub mod interop;
pub mod to_json;
pub mod writer;

pub use from_json::{from_value, FromJson};
pub use to_json::ToJson;
pub use writer::{escape, ArrayWriter, JsonWriter, ObjectWriter};

/// Encode any value as JSON text.
///
/// Never fails: every [`ToJson`] implementation produces output.
pub fn encode<T: ToJson + ?Sized>(value: &T) -> String {
    let mut writer = JsonWriter::new();
    value.write_json(&mut writer);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JsonValue;

    #[test]
    fn test_encode_spec_string() {
        assert_eq!(
            encode("He said \"hi\"\n"),
            r#""He said \"hi\"\n""#
        );
    }

    #[test]
    fn test_encode_value_tree() {
        let value = JsonValue::from_iter([
            ("a", JsonValue::from(1)),
            ("b", JsonValue::from(vec![JsonValue::Null, JsonValue::from(true)])),
        ]);
        assert_eq!(encode(&value), r#"{"a":1,"b":[null,true]}"#);
    }
}

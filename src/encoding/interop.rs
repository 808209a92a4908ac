// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversions between [`JsonValue`] and `serde_json::Value`.

use crate::core::{ConvertError, JsonMap, JsonValue, Number};

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            // serde_json always prints numbers in JSON number syntax.
            serde_json::Value::Number(n) => JsonValue::Number(Number::from_literal(n.to_string())),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect::<JsonMap>(),
            ),
        }
    }
}

impl TryFrom<JsonValue> for serde_json::Value {
    type Error = ConvertError;

    /// Raw literals are parsed by serde_json and fail the conversion if they
    /// are not valid JSON. Numbers outside `i64`/`u64` become the nearest
    /// `f64`.
    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Ok(match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Number(n) => serde_json::from_str(n.as_str())
                .map_err(|_| ConvertError::new("serde_json::Value", format!("number {n}")))?,
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::RawLiteral(text) => serde_json::from_str(&text).map_err(|e| {
                ConvertError::new("serde_json::Value", format!("raw literal {text:?} ({e})"))
            })?,
            JsonValue::Array(arr) => serde_json::Value::Array(
                arr.into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| serde_json::Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_serde_json() {
        let value = JsonValue::from(json!({"a": [1, 2.5, null], "b": "x"}));
        assert_eq!(value.get_field("a").and_then(|a| a.get_index(1)).and_then(JsonValue::as_f64), Some(2.5));
        assert_eq!(value.get_field("b").and_then(JsonValue::as_str), Some("x"));
    }

    #[test]
    fn test_to_serde_json() {
        let value = JsonValue::from_iter([
            ("n", JsonValue::from(9_007_199_254_740_993u64)),
            ("lit", JsonValue::raw("[true]")),
        ]);
        let converted = serde_json::Value::try_from(value).unwrap();
        assert_eq!(converted, json!({"n": 9_007_199_254_740_993u64, "lit": [true]}));
    }

    #[test]
    fn test_invalid_raw_literal_fails() {
        let err = serde_json::Value::try_from(JsonValue::raw("new Date()")).unwrap_err();
        assert_eq!(err.expected, "serde_json::Value");
        assert!(err.found.starts_with("raw literal"));
    }
}

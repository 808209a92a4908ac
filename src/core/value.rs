// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON value model.
//!
//! [`JsonValue`] is the dynamic tree produced by the parser and accepted by
//! the encoder. Objects are insertion-ordered; the order drives encoder output
//! but is ignored by equality.

use std::fmt;

use indexmap::IndexMap;

use super::number::Number;

/// Ordered, string-keyed object body.
pub type JsonMap = IndexMap<String, JsonValue>;

/// Dynamic JSON value.
///
/// # Design Principles
///
/// - **Owned tree**: children are owned, so a value graph cannot contain cycles
/// - **Ordered objects**: key order mirrors the source text or insertion order
/// - **Lossless numbers**: see [`Number`]
/// - **Raw literals**: pre-serialized fragments the encoder emits verbatim
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Pre-formatted JSON text, written without quoting or escaping.
    RawLiteral(String),
    Object(JsonMap),
    Array(Vec<JsonValue>),
}

/// Pre-serialized JSON fragment, emitted verbatim by the encoder.
///
/// The content is never re-escaped or re-validated; the producer is
/// responsible for it being well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawLiteral(String);

impl RawLiteral {
    /// Wrap literal text.
    pub fn new(text: impl Into<String>) -> Self {
        RawLiteral(text.into())
    }

    /// The literal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the literal text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RawLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl JsonValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_raw_literal(&self) -> bool {
        matches!(self, JsonValue::RawLiteral(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Check if this value is a container type (object or array).
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            JsonValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Integer value, for numbers whose text is an in-range integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Look up an object member. `None` for missing keys and non-objects.
    pub fn get_field(&self, name: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|map| map.get(name))
    }

    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut JsonValue> {
        self.as_object_mut().and_then(|map| map.get_mut(name))
    }

    /// Look up an array element. `None` when out of bounds or not an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Set an object member, returning the previous value.
    ///
    /// An existing key keeps its position; a new key is appended. Returns
    /// `None` without inserting when `self` is not an object.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Option<JsonValue> {
        self.as_object_mut()
            .and_then(|map| map.insert(name.into(), value.into()))
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::RawLiteral(_) => "raw literal",
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
        }
    }

    /// True if any node in this tree is a raw literal.
    pub fn contains_raw_literal(&self) -> bool {
        match self {
            JsonValue::RawLiteral(_) => true,
            JsonValue::Object(map) => map.values().any(JsonValue::contains_raw_literal),
            JsonValue::Array(arr) => arr.iter().any(JsonValue::contains_raw_literal),
            _ => false,
        }
    }

    // ========================================================================
    // Convenience Constructors
    // ========================================================================

    /// An empty object.
    pub fn object() -> Self {
        JsonValue::Object(JsonMap::new())
    }

    /// A raw literal node.
    pub fn raw(text: impl Into<String>) -> Self {
        JsonValue::RawLiteral(text.into())
    }

    /// A number from a double; NaN and infinities become `Null`.
    pub fn from_f64(value: f64) -> Self {
        Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
    }
}

/// Encoder output of the value.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoding::encode(self))
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<RawLiteral> for JsonValue {
    fn from(value: RawLiteral) -> Self {
        JsonValue::RawLiteral(value.into_inner())
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(value: Vec<T>) -> Self {
        JsonValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::from_f64(value)
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        Number::from_f32(value).map_or(JsonValue::Null, JsonValue::Number)
    }
}

impl From<rust_decimal::Decimal> for JsonValue {
    fn from(value: rust_decimal::Decimal) -> Self {
        JsonValue::Number(value.into())
    }
}

macro_rules! value_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for JsonValue {
                fn from(value: $t) -> Self {
                    JsonValue::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

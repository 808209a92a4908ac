// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Structural conversion from [`JsonValue`] into typed Rust values.
//!
//! Conversions are best-effort: numbers convert between widths when the value
//! fits, numeric strings convert to numbers, scalars convert to `String`,
//! arrays convert element-wise and objects convert value-wise. Anything else
//! is a [`ConvertError`].

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::core::{ConvertError, JsonValue, Number};

/// A type that can be built from a parsed JSON value.
pub trait FromJson: Sized {
    /// Convert a borrowed value.
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError>;

    /// Convert an owned value. Types that can take the value apart without
    /// copying override this.
    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        Self::from_json(&value)
    }
}

fn mismatch<T>(value: &JsonValue) -> ConvertError {
    ConvertError::for_type::<T>(value.type_name())
}

impl FromJson for JsonValue {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        Ok(value.clone())
    }

    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        Ok(value)
    }
}

impl FromJson for Number {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Number(n) => Ok(n.clone()),
            JsonValue::String(s) => s
                .trim()
                .parse()
                .map_err(|_| ConvertError::for_type::<Number>(format!("string {s:?}"))),
            other => Err(mismatch::<Number>(other)),
        }
    }
}

impl FromJson for bool {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Bool(b) => Ok(*b),
            JsonValue::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            JsonValue::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            other => Err(mismatch::<bool>(other)),
        }
    }
}

macro_rules! from_json_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromJson for $t {
                fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
                    let number = match value {
                        JsonValue::Number(n) => n.clone(),
                        JsonValue::String(_) => Number::from_json(value)
                            .map_err(|e| ConvertError::for_type::<$t>(e.found))?,
                        other => return Err(mismatch::<$t>(other)),
                    };
                    number
                        .to_integral_i128()
                        .and_then(|v| <$t>::try_from(v).ok())
                        .ok_or_else(|| ConvertError::for_type::<$t>(format!("number {number}")))
                }
            }
        )*
    };
}

from_json_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromJson for i128 {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Number(n) => n
                .to_integral_i128()
                .ok_or_else(|| ConvertError::for_type::<i128>(format!("number {n}"))),
            JsonValue::String(_) => i128::from_json(&JsonValue::Number(Number::from_json(value)?)),
            other => Err(mismatch::<i128>(other)),
        }
    }
}

impl FromJson for f64 {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        let number = Number::from_json(value).map_err(|e| ConvertError::for_type::<f64>(e.found))?;
        number
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| ConvertError::for_type::<f64>(format!("number {number}")))
    }
}

impl FromJson for f32 {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        let wide = f64::from_json(value).map_err(|e| ConvertError::for_type::<f32>(e.found))?;
        let narrow = wide as f32;
        if narrow.is_finite() {
            Ok(narrow)
        } else {
            Err(ConvertError::for_type::<f32>(format!("number {wide}")))
        }
    }
}

impl FromJson for Decimal {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        let number =
            Number::from_json(value).map_err(|e| ConvertError::for_type::<Decimal>(e.found))?;
        number
            .as_decimal()
            .ok_or_else(|| ConvertError::for_type::<Decimal>(format!("number {number}")))
    }
}

impl FromJson for String {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::String(s) => Ok(s.clone()),
            JsonValue::Number(n) => Ok(n.to_string()),
            JsonValue::Bool(b) => Ok(b.to_string()),
            other => Err(mismatch::<String>(other)),
        }
    }

    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::String(s) => Ok(s),
            other => Self::from_json(&other),
        }
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Null => Ok(None),
            other => T::from_json(other).map(Some),
        }
    }

    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Null => Ok(None),
            other => T::from_json_owned(other).map(Some),
        }
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Array(items) => items.iter().map(T::from_json).collect(),
            other => Err(mismatch::<Vec<T>>(other)),
        }
    }

    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Array(items) => items.into_iter().map(T::from_json_owned).collect(),
            other => Err(mismatch::<Vec<T>>(&other)),
        }
    }
}

impl<T: FromJson, S: BuildHasher + Default> FromJson for IndexMap<String, T, S> {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Object(map) => map
                .iter()
                .map(|(k, v)| T::from_json(v).map(|v| (k.clone(), v)))
                .collect(),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Object(map) => map
                .into_iter()
                .map(|(k, v)| T::from_json_owned(v).map(|v| (k, v)))
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<K, T, S> FromJson for HashMap<K, T, S>
where
    K: From<String> + Eq + Hash,
    T: FromJson,
    S: BuildHasher + Default,
{
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Object(map) => map
                .iter()
                .map(|(k, v)| T::from_json(v).map(|v| (K::from(k.clone()), v)))
                .collect(),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl<K: From<String> + Ord, T: FromJson> FromJson for BTreeMap<K, T> {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::Object(map) => map
                .iter()
                .map(|(k, v)| T::from_json(v).map(|v| (K::from(k.clone()), v)))
                .collect(),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromJson for DateTime<FixedOffset> {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::String(s) => DateTime::parse_from_rfc3339(s.trim())
                .map_err(|_| ConvertError::for_type::<Self>(format!("string {s:?}"))),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromJson for DateTime<Utc> {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        DateTime::<FixedOffset>::from_json(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ConvertError::for_type::<Self>(e.found))
    }
}

impl FromJson for NaiveDateTime {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        match value {
            JsonValue::String(s) => NaiveDateTime::from_str(s.trim())
                .map_err(|_| ConvertError::for_type::<Self>(format!("string {s:?}"))),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromJson for serde_json::Value {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        serde_json::Value::try_from(value.clone())
    }

    fn from_json_owned(value: JsonValue) -> Result<Self, ConvertError> {
        serde_json::Value::try_from(value)
    }
}

/// Convert a value into `T`.
pub fn from_value<T: FromJson>(value: JsonValue) -> Result<T, ConvertError> {
    T::from_json_owned(value)
}

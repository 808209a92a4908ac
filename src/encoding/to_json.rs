// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The [`ToJson`] trait and its implementations for standard types.
//!
//! Every implementation picks exactly one encoder rule:
//!
//! | Rule | Types | Output |
//! |------|-------|--------|
//! | null | `None`, `()` | `null` |
//! | number | integers, `f32`, `f64`, `Decimal`, [`Number`] | unquoted text |
//! | boolean | `bool` | `true` / `false` |
//! | string | `str`, `String`, `Cow<str>` | quoted, escaped |
//! | raw literal | [`RawLiteral`] | verbatim |
//! | date/time | `DateTime<Tz>`, `NaiveDateTime` | quoted round-trip form |
//! | map | `HashMap`, `BTreeMap`, `IndexMap` | object in iteration order |
//! | sequence | `Vec`, slices, arrays, `VecDeque`, sets | array |
//! | structured | user types | object via [`to_json_properties!`](crate::to_json_properties) |
//! | opaque | `char`, user types without properties | quoted `Display` text |

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::writer::JsonWriter;
use crate::core::{JsonValue, Number, RawLiteral};

/// A value that can be written as JSON text.
///
/// Structured types list their properties through
/// [`JsonWriter::object`]; the [`to_json_properties!`](crate::to_json_properties)
/// macro generates that for plain structs. Types that expose nothing but a
/// textual form write it with [`JsonWriter::display`].
pub trait ToJson {
    /// Append this value to `writer`.
    fn write_json(&self, writer: &mut JsonWriter);
}

impl ToJson for JsonValue {
    fn write_json(&self, writer: &mut JsonWriter) {
        match self {
            JsonValue::Null => {
                writer.null();
            }
            JsonValue::Bool(b) => {
                writer.bool(*b);
            }
            JsonValue::Number(n) => {
                writer.number(n);
            }
            JsonValue::String(s) => {
                writer.string(s);
            }
            JsonValue::RawLiteral(text) => {
                writer.raw(text);
            }
            JsonValue::Object(map) => map.write_json(writer),
            JsonValue::Array(arr) => arr.write_json(writer),
        }
    }
}

// ============================================================================
// Null
// ============================================================================

impl<T: ToJson> ToJson for Option<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        match self {
            Some(value) => value.write_json(writer),
            None => {
                writer.null();
            }
        }
    }
}

impl ToJson for () {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.null();
    }
}

// ============================================================================
// Numbers
// ============================================================================

impl ToJson for Number {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.number(self);
    }
}

macro_rules! to_json_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToJson for $t {
                fn write_json(&self, writer: &mut JsonWriter) {
                    writer.number(&Number::from(*self));
                }
            }
        )*
    };
}

to_json_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToJson for f32 {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.float32(*self);
    }
}

impl ToJson for f64 {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.float64(*self);
    }
}

impl ToJson for Decimal {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.number(&Number::from(*self));
    }
}

// ============================================================================
// Boolean, strings, literals, opaque values
// ============================================================================

impl ToJson for bool {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.bool(*self);
    }
}

impl ToJson for str {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.string(self);
    }
}

impl ToJson for String {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.string(self);
    }
}

impl ToJson for Cow<'_, str> {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.string(self);
    }
}

impl ToJson for RawLiteral {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.raw(self.as_str());
    }
}

impl ToJson for char {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.display(self);
    }
}

// ============================================================================
// Date/time
// ============================================================================

impl<Tz: TimeZone> ToJson for DateTime<Tz> {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.datetime(self);
    }
}

impl ToJson for NaiveDateTime {
    fn write_json(&self, writer: &mut JsonWriter) {
        writer.naive_datetime(self);
    }
}

// ============================================================================
// Maps
// ============================================================================

fn write_map<'a, K, V, I>(writer: &mut JsonWriter, entries: I)
where
    K: Display + ?Sized + 'a,
    V: ToJson + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut object = writer.object();
    for (key, value) in entries {
        object.entry(key, value);
    }
    object.finish();
}

impl<K: Display, V: ToJson, S: BuildHasher> ToJson for HashMap<K, V, S> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_map(writer, self);
    }
}

impl<K: Display, V: ToJson> ToJson for BTreeMap<K, V> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_map(writer, self);
    }
}

impl<K: Display, V: ToJson, S: BuildHasher> ToJson for IndexMap<K, V, S> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_map(writer, self);
    }
}

// ============================================================================
// Sequences
// ============================================================================

fn write_sequence<'a, T, I>(writer: &mut JsonWriter, items: I)
where
    T: ToJson + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut array = writer.array();
    for item in items {
        array.element(item);
    }
    array.finish();
}

impl<T: ToJson> ToJson for [T] {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_sequence(writer, self);
    }
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_sequence(writer, self);
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_sequence(writer, self);
    }
}

impl<T: ToJson> ToJson for VecDeque<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_sequence(writer, self);
    }
}

impl<T: ToJson> ToJson for BTreeSet<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_sequence(writer, self);
    }
}

impl<T: ToJson, S: BuildHasher> ToJson for HashSet<T, S> {
    fn write_json(&self, writer: &mut JsonWriter) {
        write_sequence(writer, self);
    }
}

// ============================================================================
// Pointers
// ============================================================================

impl<T: ToJson + ?Sized> ToJson for &T {
    fn write_json(&self, writer: &mut JsonWriter) {
        (**self).write_json(writer);
    }
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        (**self).write_json(writer);
    }
}

impl<T: ToJson + ?Sized> ToJson for Rc<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        (**self).write_json(writer);
    }
}

impl<T: ToJson + ?Sized> ToJson for Arc<T> {
    fn write_json(&self, writer: &mut JsonWriter) {
        (**self).write_json(writer);
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl ToJson for serde_json::Value {
    fn write_json(&self, writer: &mut JsonWriter) {
        match self {
            serde_json::Value::Null => {
                writer.null();
            }
            serde_json::Value::Bool(b) => {
                writer.bool(*b);
            }
            serde_json::Value::Number(n) => {
                writer.raw(&n.to_string());
            }
            serde_json::Value::String(s) => {
                writer.string(s);
            }
            serde_json::Value::Array(arr) => write_sequence(writer, arr),
            serde_json::Value::Object(map) => write_map(writer, map),
        }
    }
}

/// Implement [`ToJson`] for a struct by listing its properties in order.
///
/// Each property is written as a member whose name is the field name,
/// verbatim. Use `"Name" => field` to emit a name that differs from the
/// Rust field.
///
/// ```
/// use replycodec::{encode, to_json_properties};
///
/// struct Card {
///     id: i64,
///     title: String,
///     tags: Vec<String>,
/// }
///
/// to_json_properties!(Card { "Id" => id, "Title" => title, "Tags" => tags });
///
/// let card = Card { id: 7, title: "Fix login".into(), tags: vec!["ui".into()] };
/// assert_eq!(encode(&card), r#"{"Id":7,"Title":"Fix login","Tags":["ui"]}"#);
/// ```
#[macro_export]
macro_rules! to_json_properties {
    ($ty:ty { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::encoding::ToJson for $ty {
            fn write_json(&self, writer: &mut $crate::encoding::JsonWriter) {
                #[allow(unused_mut)]
                let mut object = writer.object();
                $( object.field($name, &self.$field); )*
                object.finish();
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::encoding::ToJson for $ty {
            fn write_json(&self, writer: &mut $crate::encoding::JsonWriter) {
                #[allow(unused_mut)]
                let mut object = writer.object();
                $( object.field(stringify!($field), &self.$field); )*
                object.finish();
            }
        }
    };
}

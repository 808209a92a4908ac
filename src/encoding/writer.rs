// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON text writer.
//!
//! [`JsonWriter`] owns the output buffer and exposes one method per encoder
//! rule. Composite values are written through [`ObjectWriter`] and
//! [`ArrayWriter`], which take care of separators.
//!
//! Strings use a narrow escaping policy: `"`, `'` and `\` are
//! backslash-escaped, tab / CR / LF become `\t` / `\r` / `\n`, and nothing
//! else is touched (other control characters are written raw). Receivers of
//! this output depend on that exact policy.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};

use super::to_json::ToJson;
use crate::core::Number;

/// Default initial capacity for the writer buffer.
const DEFAULT_CAPACITY: usize = 64;

/// Escape `text` with the codec's string policy.
///
/// Borrows when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    escape_into(&mut out, text);
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\'' | '\\' | '\t' | '\r' | '\n')
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
}

/// Adapter that escapes everything written through `fmt::Write`.
struct EscapingWriter<'a>(&'a mut String);

impl fmt::Write for EscapingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        escape_into(self.0, s);
        Ok(())
    }
}

/// Streaming JSON text writer.
pub struct JsonWriter {
    /// Output buffer
    buffer: String,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    /// Create a new writer with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new writer with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonWriter {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the JSON text.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Clear the buffer for reuse, keeping its allocation.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Write any encodable value.
    pub fn value<T: ToJson + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.write_json(self);
        self
    }

    /// Write `null`.
    pub fn null(&mut self) -> &mut Self {
        self.buffer.push_str("null");
        self
    }

    /// Write a number's canonical text, unquoted.
    pub fn number(&mut self, value: &Number) -> &mut Self {
        self.buffer.push_str(value.as_str());
        self
    }

    /// Write a double; NaN and infinities are written as `null`.
    pub fn float64(&mut self, value: f64) -> &mut Self {
        match Number::from_f64(value) {
            Some(n) => self.number(&n),
            None => self.null(),
        }
    }

    /// Write a single-precision float; NaN and infinities are written as `null`.
    pub fn float32(&mut self, value: f32) -> &mut Self {
        match Number::from_f32(value) {
            Some(n) => self.number(&n),
            None => self.null(),
        }
    }

    /// Write `true` or `false`.
    pub fn bool(&mut self, value: bool) -> &mut Self {
        self.buffer.push_str(if value { "true" } else { "false" });
        self
    }

    /// Write a quoted, escaped string.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.buffer.push('"');
        escape_into(&mut self.buffer, value);
        self.buffer.push('"');
        self
    }

    /// Write pre-serialized text verbatim.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Write the `Display` text of a value as a quoted, escaped string.
    ///
    /// This is the representation for values that expose no properties.
    pub fn display<T: fmt::Display + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.buffer.push('"');
        // Writing into a String cannot fail.
        let _ = write!(EscapingWriter(&mut self.buffer), "{value}");
        self.buffer.push('"');
        self
    }

    /// Write a timestamp in round-trip form, e.g.
    /// `"2024-01-02T03:04:05.6789012+00:00"`.
    pub fn datetime<Tz: TimeZone>(&mut self, value: &DateTime<Tz>) -> &mut Self {
        let fixed = value.fixed_offset();
        self.buffer.push('"');
        self.write_naive(&fixed.naive_local());
        let _ = write!(self.buffer, "{}", fixed.format("%:z"));
        self.buffer.push('"');
        self
    }

    /// Write a timestamp without offset, e.g. `"2024-01-02T03:04:05.0000000"`.
    pub fn naive_datetime(&mut self, value: &NaiveDateTime) -> &mut Self {
        self.buffer.push('"');
        self.write_naive(value);
        self.buffer.push('"');
        self
    }

    fn write_naive(&mut self, value: &NaiveDateTime) {
        // Seven fractional digits (100ns ticks); leap-second nanos fold back.
        let ticks = (value.nanosecond() % 1_000_000_000) / 100;
        let _ = write!(
            self.buffer,
            "{}.{ticks:07}",
            value.format("%Y-%m-%dT%H:%M:%S")
        );
    }

    /// Start an object. Call [`ObjectWriter::finish`] to close it.
    pub fn object(&mut self) -> ObjectWriter<'_> {
        self.buffer.push('{');
        ObjectWriter {
            writer: self,
            first: true,
        }
    }

    /// Start an array. Call [`ArrayWriter::finish`] to close it.
    pub fn array(&mut self) -> ArrayWriter<'_> {
        self.buffer.push('[');
        ArrayWriter {
            writer: self,
            first: true,
        }
    }
}

/// Writes the members of one JSON object.
#[must_use = "call finish() to close the object"]
pub struct ObjectWriter<'a> {
    writer: &'a mut JsonWriter,
    first: bool,
}

impl ObjectWriter<'_> {
    /// Write one member. Members appear in call order.
    pub fn field<T: ToJson + ?Sized>(&mut self, name: &str, value: &T) -> &mut Self {
        if !self.first {
            self.writer.buffer.push(',');
        }
        self.first = false;
        self.writer.string(name);
        self.writer.buffer.push(':');
        value.write_json(self.writer);
        self
    }

    /// Write one member whose key is the `Display` text of `key`.
    pub fn entry<K, T>(&mut self, key: &K, value: &T) -> &mut Self
    where
        K: fmt::Display + ?Sized,
        T: ToJson + ?Sized,
    {
        if !self.first {
            self.writer.buffer.push(',');
        }
        self.first = false;
        self.writer.display(key);
        self.writer.buffer.push(':');
        value.write_json(self.writer);
        self
    }

    /// Close the object.
    pub fn finish(self) {
        self.writer.buffer.push('}');
    }
}

/// Writes the elements of one JSON array.
#[must_use = "call finish() to close the array"]
pub struct ArrayWriter<'a> {
    writer: &'a mut JsonWriter,
    first: bool,
}

impl ArrayWriter<'_> {
    /// Write one element.
    pub fn element<T: ToJson + ?Sized>(&mut self, value: &T) -> &mut Self {
        if !self.first {
            self.writer.buffer.push(',');
        }
        self.first = false;
        value.write_json(self.writer);
        self
    }

    /// Close the array.
    pub fn finish(self) {
        self.writer.buffer.push(']');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn test_escape_policy() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(escape(r#"a"b'c\d"#), r#"a\"b\'c\\d"#);
        assert_eq!(escape("t\tr\rn\n"), r"t\tr\rn\n");
        // Other controls, DEL and non-ASCII pass through.
        assert_eq!(escape("\u{8}\u{1}é/\u{7f}"), "\u{8}\u{1}é/\u{7f}");
        assert!(matches!(escape("\u{0}\u{1f}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_scalars() {
        let mut w = JsonWriter::new();
        w.null();
        assert_eq!(w.as_str(), "null");
        w.reset();
        w.bool(true);
        assert_eq!(w.as_str(), "true");
        w.reset();
        w.float64(f64::NAN);
        assert_eq!(w.as_str(), "null");
        w.reset();
        w.float32(2.5);
        assert_eq!(w.as_str(), "2.5");
    }

    #[test]
    fn test_display_is_quoted_and_escaped() {
        let mut w = JsonWriter::new();
        w.display(&'"');
        assert_eq!(w.finish(), r#""\"""#);
    }

    #[test]
    fn test_datetime_round_trip_form() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::nanoseconds(678_901_200);
        let mut w = JsonWriter::new();
        w.datetime(&dt);
        assert_eq!(w.finish(), r#""2024-01-02T03:04:05.6789012+00:00""#);
    }

    #[test]
    fn test_datetime_with_offset() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 6, 30, 23, 59, 0).unwrap();
        let mut w = JsonWriter::new();
        w.datetime(&dt);
        assert_eq!(w.finish(), r#""2024-06-30T23:59:00.0000000-05:00""#);
    }

    #[test]
    fn test_naive_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 250)
            .unwrap();
        let mut w = JsonWriter::new();
        w.naive_datetime(&dt);
        assert_eq!(w.finish(), r#""2024-01-02T03:04:05.2500000""#);
    }

    #[test]
    fn test_object_and_array_separators() {
        let mut w = JsonWriter::new();
        let mut obj = w.object();
        obj.field("a", &1);
        obj.entry(&2, "two");
        obj.finish();
        assert_eq!(w.as_str(), r#"{"a":1,"2":"two"}"#);

        w.reset();
        let mut arr = w.array();
        arr.element(&true).element(&JsonWriterProbe);
        arr.finish();
        assert_eq!(w.as_str(), "[true,null]");

        w.reset();
        w.object().finish();
        w.array().finish();
        assert_eq!(w.as_str(), "{}[]");
    }

    struct JsonWriterProbe;

    impl ToJson for JsonWriterProbe {
        fn write_json(&self, writer: &mut JsonWriter) {
            writer.null();
        }
    }
}

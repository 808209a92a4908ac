// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON text parser using Pest.
//!
//! Accepts standard JSON (RFC 8259) with any value at the top level and
//! produces a [`JsonValue`] tree:
//! - Object members keep source order
//! - Duplicate keys: the last value wins, at the position of the first key
//! - Numbers keep their source text (see [`Number`])
//! - `\'` is accepted as an escape and raw control characters are accepted
//!   inside strings, so encoder output always parses back
//! - `\uXXXX` escapes are decoded, including surrogate pairs; an unpaired
//!   surrogate is a syntax error
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use replycodec::parser::parse;
//!
//! let value = parse(r#"{"ReplyCode": 200, "ReplyData": [1, 2, 3]}"#)?;
//! assert_eq!(value.get_field("ReplyCode").and_then(|c| c.as_i64()), Some(200));
//! # Ok(())
//! # }
//! ```

use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use serde::Deserialize;
use tracing::trace;

use crate::core::{CodecError, JsonMap, JsonValue, Number, SyntaxError};

/// Default maximum nesting depth of objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Pest grammar for JSON text.
#[derive(Parser)]
#[grammar = "parser/json.pest"] // Path relative to src/ directory
struct JsonGrammar;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Deepest allowed nesting of objects and arrays.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// JSON parser.
#[derive(Debug, Clone, Default)]
pub struct JsonParser {
    config: ParserConfig,
}

impl JsonParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given settings.
    pub fn with_config(config: ParserConfig) -> Self {
        JsonParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a complete JSON document.
    pub fn parse(&self, text: &str) -> Result<JsonValue, SyntaxError> {
        trace!(len = text.len(), "parsing JSON text");

        // Pest recurses once per nesting level, so bound the depth up front.
        check_depth(text, self.config.max_depth)?;

        let mut pairs = JsonGrammar::parse(Rule::json, text).map_err(syntax_error)?;
        let value = pairs
            .next()
            .and_then(|json| json.into_inner().next())
            .ok_or_else(|| SyntaxError::new("expected a JSON value", 1, 1))?;
        build_value(value)
    }

    /// Parse JSON bytes, which must be UTF-8.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<JsonValue, SyntaxError> {
        let text = std::str::from_utf8(data).map_err(|e| {
            let (line, column) = line_col_at(&data[..e.valid_up_to()]);
            SyntaxError::new("invalid UTF-8", line, column)
        })?;
        self.parse(text)
    }
}

/// Parse JSON text with default settings.
pub fn parse(text: &str) -> Result<JsonValue, SyntaxError> {
    JsonParser::new().parse(text)
}

/// Parse JSON text with explicit settings.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> Result<JsonValue, SyntaxError> {
    JsonParser::with_config(*config).parse(text)
}

/// Check that `text` is exactly one JSON number.
pub(crate) fn validate_number(text: &str) -> Result<(), CodecError> {
    JsonGrammar::parse(Rule::number_literal, text)
        .map(|_| ())
        .map_err(|e| CodecError::Syntax(syntax_error(e)))
}

fn syntax_error(err: pest::error::Error<Rule>) -> SyntaxError {
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };
    SyntaxError::new(err.variant.message(), line, column)
}

/// 1-based line and column just past `prefix`.
fn line_col_at(prefix: &[u8]) -> (usize, usize) {
    let text = String::from_utf8_lossy(prefix);
    let line = text.matches('\n').count() + 1;
    let column = text.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}

/// Reject input nested deeper than `max_depth` before handing it to Pest.
fn check_depth(text: &str, max_depth: usize) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, b) in text.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    let (line, column) = line_col_at(&text.as_bytes()[..offset]);
                    return Err(SyntaxError::new(
                        format!("nesting exceeds maximum depth of {max_depth}"),
                        line,
                        column,
                    ));
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn build_value(pair: Pair<'_, Rule>) -> Result<JsonValue, SyntaxError> {
    match pair.as_rule() {
        Rule::null => Ok(JsonValue::Null),
        Rule::boolean => Ok(JsonValue::Bool(pair.as_str() == "true")),
        Rule::number => Ok(JsonValue::Number(Number::from_literal(pair.as_str()))),
        Rule::string => unescape(pair).map(JsonValue::String),
        Rule::array => pair
            .into_inner()
            .map(build_value)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Rule::object => {
            let mut map = JsonMap::new();
            for member in pair.into_inner() {
                let (line, column) = member.line_col();
                let mut inner = member.into_inner();
                let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
                    return Err(SyntaxError::new("malformed object member", line, column));
                };
                map.insert(unescape(key)?, build_value(value)?);
            }
            Ok(JsonValue::Object(map))
        }
        other => {
            let (line, column) = pair.line_col();
            Err(SyntaxError::new(
                format!("unexpected {other:?}"),
                line,
                column,
            ))
        }
    }
}

/// Decode the escapes of a `string` pair.
fn unescape(pair: Pair<'_, Rule>) -> Result<String, SyntaxError> {
    let (line, column) = pair.line_col();
    let raw = pair.into_inner().next().map_or("", |chars| chars.as_str());
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let error = |message: &str| SyntaxError::new(message, line, column);
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let unit = read_hex4(&mut chars).ok_or_else(|| error("invalid \\u escape"))?;
                let code = match unit {
                    0xD800..=0xDBFF => {
                        let low = match (chars.next(), chars.next()) {
                            (Some('\\'), Some('u')) => read_hex4(&mut chars),
                            _ => None,
                        }
                        .filter(|low| (0xDC00..=0xDFFF).contains(low))
                        .ok_or_else(|| error("unpaired surrogate in \\u escape"))?;
                        0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                    }
                    0xDC00..=0xDFFF => return Err(error("unpaired surrogate in \\u escape")),
                    _ => unit,
                };
                out.push(char::from_u32(code).ok_or_else(|| error("invalid \\u escape"))?);
            }
            _ => return Err(error("invalid escape sequence")),
        }
    }
    Ok(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let mut code = 0;
    for _ in 0..4 {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}

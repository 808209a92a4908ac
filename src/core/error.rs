// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for replycodec.
//!
//! Provides error types for:
//! - JSON text parsing ([`SyntaxError`])
//! - Structural payload conversion ([`ConvertError`])
//! - Reply envelope validation ([`EnvelopeError`])
//! - The crate-level umbrella ([`CodecError`])

use std::fmt;

use thiserror::Error;

use crate::envelope::ReplyCode;

/// Malformed JSON text.
///
/// Line and column are 1-based and point at the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct SyntaxError {
    /// Human-readable description
    pub message: String,
    /// Line of the error
    pub line: usize,
    /// Column of the error (in characters)
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        SyntaxError {
            message: message.into(),
            line,
            column,
        }
    }
}

/// A JSON value could not be converted into the requested Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ConvertError {
    /// Target type description
    pub expected: String,
    /// JSON type (or offending value) that was seen
    pub found: String,
}

impl ConvertError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ConvertError {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Mismatch for target type `T`.
    pub fn for_type<T: ?Sized>(found: impl Into<String>) -> Self {
        ConvertError::new(std::any::type_name::<T>(), found)
    }
}

/// The reply did not have the `{ReplyCode, ReplyText, ReplyData}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// Top-level value is not a JSON object
    #[error("expected object as response; got {found} instead")]
    NotAnObject {
        /// JSON type that was found
        found: &'static str,
    },

    /// Required member is absent
    #[error("{0} property was not found in the response")]
    MissingField(&'static str),

    /// `ReplyCode` is not numeric or does not fit in `i64`
    #[error("ReplyCode must be an integer; got {found}")]
    InvalidReplyCode {
        /// Offending value, as JSON text
        found: String,
    },

    /// `ReplyData` does not fit the declared payload type on a success reply
    #[error("expected response data type {expected}; got {found} instead")]
    PayloadTypeMismatch {
        /// Declared payload type
        expected: String,
        /// What the payload actually was
        found: String,
    },
}

impl From<ConvertError> for EnvelopeError {
    fn from(err: ConvertError) -> Self {
        EnvelopeError::PayloadTypeMismatch {
            expected: err.expected,
            found: err.found,
        }
    }
}

/// Caller-facing grouping of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Response text was not JSON
    InvalidJson,
    /// JSON was fine but not the expected envelope/payload shape
    UnexpectedResponse,
    /// Server answered with a non-success reply code
    ServerError,
    /// Bad configuration
    Config,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidJson => "invalid JSON in response from server",
            ErrorCategory::UnexpectedResponse => "unexpected response from server",
            ErrorCategory::ServerError => "server reported an error",
            ErrorCategory::Config => "configuration error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during codec operations.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Malformed JSON text
    Syntax(SyntaxError),

    /// Envelope shape violation
    Envelope(EnvelopeError),

    /// Conversion of a value outside an envelope
    Convert(ConvertError),

    /// Non-success reply code
    ServerReported {
        /// Reply code returned by the server
        code: ReplyCode,
        /// `ReplyText`, empty if the server sent none
        text: String,
    },

    /// Invalid configuration
    Config {
        /// Where the configuration came from
        source: String,
        /// Error message
        message: String,
    },
}

impl CodecError {
    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        CodecError::Syntax(SyntaxError::new(message, line, column))
    }

    /// Create a "server reported an error" error.
    pub fn server_reported(code: ReplyCode, text: impl Into<String>) -> Self {
        CodecError::ServerReported {
            code,
            text: text.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(source: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Config {
            source: source.into(),
            message: message.into(),
        }
    }

    /// Caller-facing category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CodecError::Syntax(_) => ErrorCategory::InvalidJson,
            CodecError::Envelope(_) | CodecError::Convert(_) => ErrorCategory::UnexpectedResponse,
            CodecError::ServerReported { .. } => ErrorCategory::ServerError,
            CodecError::Config { .. } => ErrorCategory::Config,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Syntax(err) => vec![
                ("message", err.message.clone()),
                ("line", err.line.to_string()),
                ("column", err.column.to_string()),
            ],
            CodecError::Envelope(err) => match err {
                EnvelopeError::NotAnObject { found } => vec![("found", found.to_string())],
                EnvelopeError::MissingField(field) => vec![("field", field.to_string())],
                EnvelopeError::InvalidReplyCode { found } => vec![("found", found.clone())],
                EnvelopeError::PayloadTypeMismatch { expected, found } => {
                    vec![("expected", expected.clone()), ("found", found.clone())]
                }
            },
            CodecError::Convert(err) => vec![
                ("expected", err.expected.clone()),
                ("found", err.found.clone()),
            ],
            CodecError::ServerReported { code, text } => {
                vec![("code", code.value().to_string()), ("text", text.clone())]
            }
            CodecError::Config { source, message } => {
                vec![("source", source.clone()), ("message", message.clone())]
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Syntax(err) => write!(f, "Invalid JSON: {err}"),
            CodecError::Envelope(err) => write!(f, "Unexpected response: {err}"),
            CodecError::Convert(err) => write!(f, "Conversion error: {err}"),
            CodecError::ServerReported { code, text } => {
                if text.is_empty() {
                    write!(f, "Server responded with error: {}", code.value())
                } else {
                    write!(f, "Server responded with error: {text}")
                }
            }
            CodecError::Config { source, message } => {
                write!(f, "Invalid configuration in {source}: {message}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Syntax(err) => Some(err),
            CodecError::Envelope(err) => Some(err),
            CodecError::Convert(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SyntaxError> for CodecError {
    fn from(err: SyntaxError) -> Self {
        CodecError::Syntax(err)
    }
}

impl From<EnvelopeError> for CodecError {
    fn from(err: EnvelopeError) -> Self {
        CodecError::Envelope(err)
    }
}

impl From<ConvertError> for CodecError {
    fn from(err: ConvertError) -> Self {
        CodecError::Convert(err)
    }
}

/// Result type for replycodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error() {
        let err = CodecError::syntax("expected value", 1, 6);
        assert!(matches!(err, CodecError::Syntax(_)));
        assert_eq!(
            err.to_string(),
            "Invalid JSON: expected value at line 1, column 6"
        );
        assert_eq!(err.category(), ErrorCategory::InvalidJson);
    }

    #[test]
    fn test_envelope_errors() {
        let err: CodecError = EnvelopeError::MissingField("ReplyCode").into();
        assert_eq!(
            err.to_string(),
            "Unexpected response: ReplyCode property was not found in the response"
        );
        assert_eq!(err.category(), ErrorCategory::UnexpectedResponse);

        let err: CodecError = EnvelopeError::NotAnObject { found: "array" }.into();
        assert_eq!(
            err.to_string(),
            "Unexpected response: expected object as response; got array instead"
        );
    }

    #[test]
    fn test_convert_into_payload_mismatch() {
        let err: EnvelopeError = ConvertError::new("Vec<i64>", "string").into();
        assert_eq!(
            err,
            EnvelopeError::PayloadTypeMismatch {
                expected: "Vec<i64>".to_string(),
                found: "string".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "expected response data type Vec<i64>; got string instead"
        );
    }

    #[test]
    fn test_server_reported_prefers_text() {
        let err = CodecError::server_reported(ReplyCode::UserException, "bad");
        assert_eq!(err.to_string(), "Server responded with error: bad");
        assert_eq!(err.category(), ErrorCategory::ServerError);

        let err = CodecError::server_reported(ReplyCode::UserException, "");
        assert_eq!(err.to_string(), "Server responded with error: 502");
    }

    #[test]
    fn test_config_error() {
        let err = CodecError::config("replycodec.toml", "unknown field");
        assert_eq!(
            err.to_string(),
            "Invalid configuration in replycodec.toml: unknown field"
        );
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_log_fields_syntax() {
        let fields = CodecError::syntax("bad", 2, 3).log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("message", "bad".to_string()));
        assert_eq!(fields[1], ("line", "2".to_string()));
        assert_eq!(fields[2], ("column", "3".to_string()));
    }

    #[test]
    fn test_log_fields_server_reported() {
        let fields = CodecError::server_reported(ReplyCode::Unknown(42), "x").log_fields();
        assert_eq!(fields[0], ("code", "42".to_string()));
        assert_eq!(fields[1], ("text", "x".to_string()));
    }

    #[test]
    fn test_log_fields_payload_mismatch() {
        let err: CodecError = EnvelopeError::PayloadTypeMismatch {
            expected: "bool".to_string(),
            found: "number".to_string(),
        }
        .into();
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "expected");
        assert_eq!(fields[1].1, "number");
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;
        let err = CodecError::syntax("bad", 1, 1);
        assert!(err.source().is_some());
        assert!(CodecError::server_reported(ReplyCode::NoData, "x")
            .source()
            .is_none());
    }

    #[test]
    fn test_error_clone() {
        let err1 = CodecError::syntax("bad", 1, 1);
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed decoding of `{ReplyCode, ReplyText, ReplyData}` replies.

use std::any::type_name;

use tracing::{debug, warn};

use super::reply_code::{ReplyBucket, ReplyCode};
use crate::core::{CodecError, EnvelopeError, JsonValue, Number, Result};
use crate::encoding::{encode, FromJson};
use crate::parser::{JsonParser, ParserConfig};

/// Member holding the status code.
pub const REPLY_CODE: &str = "ReplyCode";
/// Member holding the server message.
pub const REPLY_TEXT: &str = "ReplyText";
/// Member holding the payload.
pub const REPLY_DATA: &str = "ReplyData";

/// A decoded server reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T> {
    /// Status code
    pub code: ReplyCode,
    /// `ReplyText`, empty when absent
    pub message: String,
    /// Payload, present only when `ReplyData` was non-null and convertible
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn bucket(&self) -> ReplyBucket {
        self.code.bucket()
    }

    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Payload of a success reply, or the server's error.
    ///
    /// A non-success reply becomes [`CodecError::ServerReported`] carrying
    /// the reply text.
    pub fn into_result(self) -> Result<Option<T>> {
        self.ensure_success().map(|reply| reply.data)
    }

    fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CodecError::server_reported(self.code, self.message))
        }
    }
}

impl<T: FromJson> ResponseEnvelope<T> {
    /// Parse `text` and decode it as a reply, whatever its status.
    pub fn from_text(text: &str, config: &ParserConfig) -> Result<Self> {
        let value = JsonParser::with_config(*config).parse(text)?;
        Ok(decode_envelope(value)?)
    }
}

/// Decode a parsed reply.
///
/// On a success code, a `ReplyData` that does not convert to `T` fails with
/// [`EnvelopeError::PayloadTypeMismatch`]. On any other code the payload is
/// dropped instead.
pub fn decode_envelope<T: FromJson>(
    value: JsonValue,
) -> std::result::Result<ResponseEnvelope<T>, EnvelopeError> {
    let mut map = match value {
        JsonValue::Object(map) => map,
        other => {
            return Err(EnvelopeError::NotAnObject {
                found: other.type_name(),
            })
        }
    };

    let code = map
        .get(REPLY_CODE)
        .ok_or(EnvelopeError::MissingField(REPLY_CODE))
        .and_then(read_code)?;
    if !code.is_known() {
        warn!(code = code.value(), "unknown reply code");
    }

    let message = match map.get(REPLY_TEXT) {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(text)) => text.clone(),
        Some(other) => encode(other),
    };

    let data = match map.swap_remove(REPLY_DATA) {
        None | Some(JsonValue::Null) => None,
        Some(payload) => match T::from_json_owned(payload) {
            Ok(data) => Some(data),
            Err(err) if code.is_success() => return Err(err.into()),
            Err(err) => {
                debug!(
                    code = code.value(),
                    expected = %err.expected,
                    found = %err.found,
                    "dropping payload of non-success reply"
                );
                None
            }
        },
    };

    debug!(
        code = code.value(),
        bucket = %code.bucket(),
        has_data = data.is_some(),
        payload = type_name::<T>(),
        "decoded reply envelope"
    );

    Ok(ResponseEnvelope {
        code,
        message,
        data,
    })
}

/// Parse and decode a reply, failing on a non-success code.
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use replycodec::envelope::decode_reply;
///
/// let reply = decode_reply::<Vec<i64>>(r#"{"ReplyCode":200,"ReplyData":[1,2,3]}"#)?;
/// assert_eq!(reply.data, Some(vec![1, 2, 3]));
///
/// let err = decode_reply::<Vec<i64>>(r#"{"ReplyCode":502,"ReplyText":"bad"}"#).unwrap_err();
/// assert_eq!(err.to_string(), "Server responded with error: bad");
/// # Ok(())
/// # }
/// ```
pub fn decode_reply<T: FromJson>(text: &str) -> Result<ResponseEnvelope<T>> {
    decode_reply_with_config(text, &ParserConfig::default())
}

/// [`decode_reply`] with explicit parser settings.
pub fn decode_reply_with_config<T: FromJson>(
    text: &str,
    config: &ParserConfig,
) -> Result<ResponseEnvelope<T>> {
    ResponseEnvelope::<T>::from_text(text, config)?.ensure_success()
}

/// Read `ReplyCode` the way the service converts it: null is 0, booleans
/// are 0 / 1, fractions round half to even and strings are read as numbers.
fn read_code(value: &JsonValue) -> std::result::Result<ReplyCode, EnvelopeError> {
    let code = match value {
        JsonValue::Null => Some(0),
        JsonValue::Bool(b) => Some(i64::from(*b)),
        JsonValue::Number(n) => n.round_to_i64(),
        JsonValue::String(s) => s
            .trim()
            .parse::<Number>()
            .ok()
            .and_then(|n| n.round_to_i64()),
        _ => None,
    };
    code.map(ReplyCode::from)
        .ok_or_else(|| EnvelopeError::InvalidReplyCode {
            found: encode(value),
        })
}

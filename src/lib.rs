// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Replycodec
//!
//! JSON codec for a work-management service's reply protocol.
//!
//! This library provides:
//! - **Encoding** of Rust values into compact JSON text in [`encoding`]
//! - **Parsing** of JSON text into a [`JsonValue`] tree in [`parser`]
//! - **Envelope decoding** of `{ReplyCode, ReplyText, ReplyData}` replies
//!   into a typed [`ResponseEnvelope`] in [`envelope`]
//!
//! ## Architecture
//!
//! - `core/` - Value model ([`JsonValue`], [`Number`]) and error types
//! - `encoding/` - [`ToJson`] encoder and [`FromJson`] structural conversion
//! - `parser/` - Pest grammar and tree builder
//! - `envelope/` - [`ReplyCode`] set and reply decoding
//!
//! ## Example: Encoding a record
//!
//! ```rust
//! use replycodec::{encode, to_json_properties};
//!
//! #[allow(non_snake_case)]
//! struct Card {
//!     Id: i64,
//!     Title: String,
//!     Tags: Vec<String>,
//! }
//!
//! to_json_properties!(Card { Id, Title, Tags });
//!
//! let card = Card { Id: 7, Title: "Fix login".into(), Tags: vec!["ui".into()] };
//! assert_eq!(encode(&card), r#"{"Id":7,"Title":"Fix login","Tags":["ui"]}"#);
//! ```
//!
//! ## Example: Decoding a reply
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use replycodec::{decode_envelope, parse, ReplyCode};
//!
//! let value = parse(r#"{"ReplyCode":502,"ReplyText":"bad","ReplyData":"oops"}"#)?;
//! let reply = decode_envelope::<Vec<i64>>(value)?;
//! assert_eq!(reply.code, ReplyCode::UserException);
//! assert_eq!(reply.message, "bad");
//! assert!(reply.data.is_none());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{
    CodecError, ConvertError, EnvelopeError, ErrorCategory, JsonMap, JsonValue, Number,
    RawLiteral, Result, SyntaxError,
};

// Encoding and structural conversion
pub mod encoding;

pub use encoding::{encode, from_value, FromJson, JsonWriter, ToJson};

// JSON text parsing
pub mod parser;

pub use parser::{parse, parse_with_config, JsonParser, ParserConfig};

// Reply envelopes
pub mod envelope;

pub use envelope::{
    decode_envelope, decode_reply, ReplyBucket, ReplyCode, ResponseEnvelope,
};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Server reply envelopes.
//!
//! Every reply is an object `{ "ReplyCode": <int>, "ReplyText": <string?>,
//! "ReplyData": <any?> }`. The code decides whether the reply succeeded and,
//! with it, whether a payload that does not fit the requested type is an
//! error or is silently dropped.

pub mod reply_code;
pub mod response;

pub use reply_code::{ReplyBucket, ReplyCode};
pub use response::{
    decode_envelope, decode_reply, decode_reply_with_config, ResponseEnvelope, REPLY_CODE,
    REPLY_DATA, REPLY_TEXT,
};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Envelope decoding integration tests.
//!
//! Payload types mirror what the domain-mapping layer asks for: lists of
//! summaries, keyed maps, timestamps and raw values.

mod common;

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use common::{BOARDS_REPLY, THROTTLE_REPLY, USER_EXCEPTION_REPLY};
use replycodec::envelope::decode_reply_with_config;
use replycodec::{
    decode_envelope, decode_reply, parse, CodecError, ConvertError, EnvelopeError, ErrorCategory,
    FromJson, JsonValue, ParserConfig, ReplyBucket, ReplyCode,
};

// ============================================================================
// Payload Types
// ============================================================================

#[derive(Debug, PartialEq)]
struct BoardSummary {
    id: i64,
    title: String,
    archived: bool,
}

impl FromJson for BoardSummary {
    fn from_json(value: &JsonValue) -> Result<Self, ConvertError> {
        let field = |name: &str| {
            value
                .get_field(name)
                .ok_or_else(|| ConvertError::for_type::<Self>(format!("object without {name}")))
        };
        Ok(BoardSummary {
            id: i64::from_json(field("Id")?)?,
            title: String::from_json(field("Title")?)?,
            archived: bool::from_json(field("IsArchived")?)?,
        })
    }
}

// ============================================================================
// Success Replies
// ============================================================================

#[test]
fn test_success_list_payload() {
    let reply = decode_envelope::<Vec<i64>>(parse(r#"{"ReplyCode":200,"ReplyData":[1,2,3]}"#).unwrap())
        .unwrap();
    assert_eq!(reply.bucket(), ReplyBucket::Success);
    assert_eq!(reply.data, Some(vec![1, 2, 3]));
}

#[test]
fn test_success_record_payload() {
    let reply = decode_reply::<Vec<BoardSummary>>(BOARDS_REPLY).unwrap();
    assert_eq!(reply.code, ReplyCode::DataRetrievalSuccess);
    assert_eq!(reply.message, "Boards retrieved");
    let boards = reply.data.unwrap();
    assert_eq!(
        boards[1],
        BoardSummary {
            id: 102,
            title: "Mobile \"v2\"".into(),
            archived: true,
        }
    );
}

#[test]
fn test_success_map_and_date_payloads() {
    let reply = decode_reply::<HashMap<String, f64>>(
        r#"{"ReplyCode":202,"ReplyData":{"cycle":2.5,"lead":"7"}}"#,
    )
    .unwrap();
    let data = reply.data.unwrap();
    assert_eq!(data["cycle"], 2.5);
    assert_eq!(data["lead"], 7.0);

    let reply = decode_reply::<DateTime<FixedOffset>>(
        r#"{"ReplyCode":201,"ReplyData":"2024-01-02T03:04:05.6789012+00:00"}"#,
    )
    .unwrap();
    assert_eq!(reply.data.unwrap().timestamp(), 1_704_164_645);
}

#[test]
fn test_success_payload_mismatch_is_fatal() {
    let value = parse(r#"{"ReplyCode":200,"ReplyData":"not-a-list"}"#).unwrap();
    let err = decode_envelope::<Vec<i64>>(value).unwrap_err();
    assert!(matches!(err, EnvelopeError::PayloadTypeMismatch { .. }));

    let err = decode_reply::<Vec<BoardSummary>>(
        r#"{"ReplyCode":200,"ReplyData":[{"Id":"x","Title":"t","IsArchived":false}]}"#,
    )
    .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::UnexpectedResponse);
}

#[test]
fn test_out_of_range_number_is_mismatch() {
    let err = decode_reply::<u8>(r#"{"ReplyCode":200,"ReplyData":300}"#).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Envelope(EnvelopeError::PayloadTypeMismatch { .. })
    ));
}

// ============================================================================
// Non-success Replies
// ============================================================================

#[test]
fn test_tolerated_mismatch() {
    let reply = decode_envelope::<Vec<i64>>(parse(USER_EXCEPTION_REPLY).unwrap()).unwrap();
    assert_eq!(reply.bucket(), ReplyBucket::NonSuccess);
    assert_eq!(reply.message, "bad");
    assert_eq!(reply.data, None);
}

#[test]
fn test_non_success_becomes_server_error() {
    let err = decode_reply::<Vec<i64>>(USER_EXCEPTION_REPLY).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ServerError);
    assert_eq!(err.to_string(), "Server responded with error: bad");

    let err = decode_reply::<JsonValue>(THROTTLE_REPLY).unwrap_err();
    assert_eq!(err.to_string(), "Server responded with error: 800");
    assert_eq!(err.log_fields()[0], ("code", "800".to_string()));
}

#[test]
fn test_unknown_code_is_non_success() {
    let reply = decode_envelope::<JsonValue>(parse(r#"{"ReplyCode":299,"ReplyData":1}"#).unwrap())
        .unwrap();
    assert_eq!(reply.code, ReplyCode::Unknown(299));
    assert!(!reply.is_success());
    assert!(reply.into_result().is_err());
}

#[test]
fn test_loose_codes_are_converted() {
    let reply = decode_envelope::<JsonValue>(parse(r#"{"ReplyCode":2e-1}"#).unwrap()).unwrap();
    assert_eq!(reply.code, ReplyCode::Unknown(0));
    assert!(!reply.is_success());

    let reply = decode_envelope::<JsonValue>(parse(r#"{"ReplyCode":null}"#).unwrap()).unwrap();
    assert_eq!(reply.code, ReplyCode::Unknown(0));

    let reply = decode_reply::<Vec<i64>>(r#"{"ReplyCode":200.5,"ReplyData":[1]}"#).unwrap();
    assert_eq!(reply.code, ReplyCode::DataRetrievalSuccess);
    assert_eq!(reply.data, Some(vec![1]));

    let err = decode_reply::<JsonValue>(r#"{"ReplyCode":"ok"}"#).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Envelope(EnvelopeError::InvalidReplyCode { .. })
    ));
}

// ============================================================================
// Shape Violations
// ============================================================================

#[test]
fn test_shape_violations() {
    let err = decode_reply::<JsonValue>("\"ok\"").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected response: expected object as response; got string instead"
    );

    let err = decode_reply::<JsonValue>(r#"{"ReplyData":[]}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected response: ReplyCode property was not found in the response"
    );

    let err = decode_reply::<JsonValue>(r#"{"a":}"#).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidJson);
}

#[test]
fn test_reply_respects_parser_config() {
    let config = ParserConfig { max_depth: 2 };
    let text = r#"{"ReplyCode":200,"ReplyData":[[1]]}"#;
    assert!(matches!(
        decode_reply_with_config::<JsonValue>(text, &config),
        Err(CodecError::Syntax(_))
    ));
    assert!(decode_reply::<JsonValue>(text).is_ok());
}

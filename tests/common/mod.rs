// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use proptest::prelude::*;

use replycodec::{JsonMap, JsonValue, Number};

// ============================================================================
// Sample Replies
// ============================================================================

/// Success reply carrying a list of board summaries.
pub const BOARDS_REPLY: &str = r#"{
    "ReplyCode": 200,
    "ReplyText": "Boards retrieved",
    "ReplyData": [
        {"Id": 101, "Title": "Platform", "IsArchived": false},
        {"Id": 102, "Title": "Mobile \"v2\"", "IsArchived": true}
    ]
}"#;

/// Non-success reply whose payload is a plain string.
pub const USER_EXCEPTION_REPLY: &str =
    r#"{"ReplyCode":502,"ReplyText":"bad","ReplyData":"oops"}"#;

/// Throttling reply without text or payload.
pub const THROTTLE_REPLY: &str = r#"{"ReplyCode":800}"#;

// ============================================================================
// Value Strategies
// ============================================================================

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::from),
        any::<u128>().prop_map(Number::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_filter_map("representable", Number::from_f64),
    ]
}

fn arb_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        arb_number().prop_map(JsonValue::Number),
        any::<String>().prop_map(JsonValue::String),
        "[\"'\\\\\t\r\n a-z]{0,12}".prop_map(JsonValue::String),
    ]
}

/// Arbitrary value trees without raw literals.
pub fn arb_json_value() -> impl Strategy<Value = JsonValue> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
            prop::collection::vec((any::<String>(), inner), 0..8)
                .prop_map(|members| JsonValue::Object(members.into_iter().collect::<JsonMap>())),
        ]
    })
}

// ============================================================================
// Assertions
// ============================================================================

/// Keys of an object value, in order.
pub fn object_keys(value: &JsonValue) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout replycodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy and the crate [`Result`]
//! - [`JsonValue`] - Dynamic JSON value tree
//! - [`Number`] - Lossless JSON number

pub mod error;
pub mod number;
pub mod value;

pub use error::{CodecError, ConvertError, EnvelopeError, ErrorCategory, Result, SyntaxError};
pub use number::Number;
pub use value::{JsonMap, JsonValue, RawLiteral};

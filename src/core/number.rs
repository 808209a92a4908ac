// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decimal-capable JSON number.
//!
//! A [`Number`] keeps the canonical decimal text of the value instead of a
//! binary float, so 64-bit integers above 2^53 and scaled decimals such as
//! `1.10` survive an encode/parse cycle digit for digit.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::CodecError;

/// A JSON number stored as its canonical text.
///
/// Two numbers are equal when their text is equal: `1.10` and `1.1` are
/// distinct values, which keeps the decimal scale observable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    repr: String,
}

impl Number {
    /// Wrap text that the grammar has already validated.
    pub(crate) fn from_literal(repr: impl Into<String>) -> Self {
        Number { repr: repr.into() }
    }

    /// Create a number from a double. Returns `None` for NaN and infinities,
    /// which have no JSON representation.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Number::from_literal(format_float(value, value.abs())))
    }

    /// Create a number from a single-precision float.
    ///
    /// Uses the shortest digits that round-trip through `f32`, so `0.1f32`
    /// is written as `0.1` rather than its widened `f64` expansion.
    pub fn from_f32(value: f32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Number::from_literal(format_float(
            value,
            f64::from(value.abs()),
        )))
    }

    /// The canonical text of this number.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// True when the text has neither a fraction nor an exponent.
    pub fn is_integer(&self) -> bool {
        !self.repr.contains(['.', 'e', 'E'])
    }

    /// Value as `i64` if the text is an integer in range.
    pub fn as_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.repr.parse().ok()
        } else {
            None
        }
    }

    /// Value as `u64` if the text is a non-negative integer in range.
    pub fn as_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.repr.parse().ok()
        } else {
            None
        }
    }

    /// Value as `i128` if the text is an integer in range.
    pub fn as_i128(&self) -> Option<i128> {
        if self.is_integer() {
            self.repr.parse().ok()
        } else {
            None
        }
    }

    /// Value as the nearest `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.repr.parse().ok()
    }

    /// Value as an exact [`Decimal`], if it fits in 96 bits of mantissa.
    pub fn as_decimal(&self) -> Option<Decimal> {
        if self.repr.contains(['e', 'E']) {
            Decimal::from_scientific(&self.repr).ok()
        } else {
            Decimal::from_str(&self.repr).ok()
        }
    }

    /// Integral value of this number, accepting forms such as `2.0` or `1e3`
    /// whose value has no fractional part.
    pub fn to_integral_i128(&self) -> Option<i128> {
        if let Some(v) = self.as_i128() {
            return Some(v);
        }
        if let Some(d) = self.as_decimal() {
            return if d.fract().is_zero() { d.to_i128() } else { None };
        }
        // Past Decimal's range only large magnitudes can still be integral;
        // tiny values such as 1e-400 round to zero and must not count.
        let f = self.as_f64()?;
        if f.fract() == 0.0 && (1.0..1.7e38).contains(&f.abs()) {
            Some(f as i128)
        } else {
            None
        }
    }

    /// Nearest `i64`, with halves rounded to the even neighbour (`2.5` is 2,
    /// `3.5` is 4). `None` when the rounded value is outside `i64`.
    pub fn round_to_i64(&self) -> Option<i64> {
        if let Some(v) = self.as_i64() {
            return Some(v);
        }
        if let Some(d) = self.as_decimal() {
            return d
                .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
                .to_i64();
        }
        // Past Decimal's range a value is either below one in magnitude or
        // far outside i64.
        let f = self.as_f64()?;
        (f.abs() < 0.5).then_some(0)
    }
}

/// Shortest round-trip digits; exponent form outside `[1e-7, 1e21)`.
fn format_float<F: fmt::Display + fmt::LowerExp>(value: F, magnitude: f64) -> String {
    if magnitude != 0.0 && !(1e-7..1e21).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl FromStr for Number {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::validate_number(s)?;
        Ok(Number::from_literal(s))
    }
}

macro_rules! number_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::from_literal(value.to_string())
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::from_literal(value.to_string())
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Server reply status codes.

use std::fmt;

/// Whether a reply code reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyBucket {
    /// 200..=203
    Success,
    /// Everything else, including unknown codes
    NonSuccess,
}

impl ReplyBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyBucket::Success => "success",
            ReplyBucket::NonSuccess => "non-success",
        }
    }
}

impl fmt::Display for ReplyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status code carried in the `ReplyCode` member of a reply.
///
/// The set is closed; any other integer maps to [`ReplyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCode {
    NoData,
    DataRetrievalSuccess,
    DataInsertSuccess,
    DataUpdateSuccess,
    DataDeleteSuccess,
    SystemException,
    MinorException,
    UserException,
    FatalException,
    ThrottleWaitResponse,
    WipOverrideCommentRequired,
    ResendingEmailRequired,
    UnauthorizedAccess,
    /// Code outside the known set
    Unknown(i64),
}

impl ReplyCode {
    /// All known codes, in ascending order of value.
    pub const KNOWN: [ReplyCode; 13] = [
        ReplyCode::NoData,
        ReplyCode::DataRetrievalSuccess,
        ReplyCode::DataInsertSuccess,
        ReplyCode::DataUpdateSuccess,
        ReplyCode::DataDeleteSuccess,
        ReplyCode::SystemException,
        ReplyCode::MinorException,
        ReplyCode::UserException,
        ReplyCode::FatalException,
        ReplyCode::ThrottleWaitResponse,
        ReplyCode::WipOverrideCommentRequired,
        ReplyCode::ResendingEmailRequired,
        ReplyCode::UnauthorizedAccess,
    ];

    /// Numeric wire value.
    pub fn value(&self) -> i64 {
        match self {
            ReplyCode::NoData => 100,
            ReplyCode::DataRetrievalSuccess => 200,
            ReplyCode::DataInsertSuccess => 201,
            ReplyCode::DataUpdateSuccess => 202,
            ReplyCode::DataDeleteSuccess => 203,
            ReplyCode::SystemException => 500,
            ReplyCode::MinorException => 501,
            ReplyCode::UserException => 502,
            ReplyCode::FatalException => 503,
            ReplyCode::ThrottleWaitResponse => 800,
            ReplyCode::WipOverrideCommentRequired => 900,
            ReplyCode::ResendingEmailRequired => 902,
            ReplyCode::UnauthorizedAccess => 1000,
            ReplyCode::Unknown(n) => *n,
        }
    }

    /// Variant name, `"Unknown"` for codes outside the set.
    pub fn name(&self) -> &'static str {
        match self {
            ReplyCode::NoData => "NoData",
            ReplyCode::DataRetrievalSuccess => "DataRetrievalSuccess",
            ReplyCode::DataInsertSuccess => "DataInsertSuccess",
            ReplyCode::DataUpdateSuccess => "DataUpdateSuccess",
            ReplyCode::DataDeleteSuccess => "DataDeleteSuccess",
            ReplyCode::SystemException => "SystemException",
            ReplyCode::MinorException => "MinorException",
            ReplyCode::UserException => "UserException",
            ReplyCode::FatalException => "FatalException",
            ReplyCode::ThrottleWaitResponse => "ThrottleWaitResponse",
            ReplyCode::WipOverrideCommentRequired => "WipOverrideCommentRequired",
            ReplyCode::ResendingEmailRequired => "ResendingEmailRequired",
            ReplyCode::UnauthorizedAccess => "UnauthorizedAccess",
            ReplyCode::Unknown(_) => "Unknown",
        }
    }

    pub fn bucket(&self) -> ReplyBucket {
        match self {
            ReplyCode::DataRetrievalSuccess
            | ReplyCode::DataInsertSuccess
            | ReplyCode::DataUpdateSuccess
            | ReplyCode::DataDeleteSuccess => ReplyBucket::Success,
            _ => ReplyBucket::NonSuccess,
        }
    }

    pub fn is_success(&self) -> bool {
        self.bucket() == ReplyBucket::Success
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ReplyCode::Unknown(_))
    }
}

impl From<i64> for ReplyCode {
    fn from(value: i64) -> Self {
        ReplyCode::KNOWN
            .into_iter()
            .find(|code| code.value() == value)
            .unwrap_or(ReplyCode::Unknown(value))
    }
}

impl From<ReplyCode> for i64 {
    fn from(code: ReplyCode) -> Self {
        code.value()
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for code in ReplyCode::KNOWN {
            assert_eq!(ReplyCode::from(code.value()), code);
            assert!(code.is_known());
        }
    }

    #[test]
    fn test_unknown_code() {
        let code = ReplyCode::from(204);
        assert_eq!(code, ReplyCode::Unknown(204));
        assert_eq!(code.name(), "Unknown");
        assert_eq!(code.bucket(), ReplyBucket::NonSuccess);
        assert_eq!(i64::from(code), 204);
    }

    #[test]
    fn test_buckets() {
        let successes: Vec<i64> = ReplyCode::KNOWN
            .iter()
            .filter(|c| c.is_success())
            .map(ReplyCode::value)
            .collect();
        assert_eq!(successes, [200, 201, 202, 203]);
        assert!(!ReplyCode::NoData.is_success());
        assert!(!ReplyCode::UnauthorizedAccess.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReplyCode::UserException.to_string(), "UserException (502)");
        assert_eq!(ReplyCode::Unknown(-1).to_string(), "Unknown (-1)");
        assert_eq!(ReplyBucket::NonSuccess.to_string(), "non-success");
    }
}

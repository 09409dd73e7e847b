use std::borrow::Cow;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("error codes must be non-zero")]
pub struct ZeroCodeError;

/// An error group, naming the category an error was raised under. Saves repeating the category in
/// every error code.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{semantic_code}({code})")]
#[serde(rename_all = "camelCase", try_from = "RawEGrp")]
pub struct EGrp {
    code: i32,
    semantic_code: Cow<'static, str>,
}

impl EGrp {
    pub const INTERNAL: EGrp = EGrp::new(-1, "INTERNAL");

    /// Declares a catalog entry.
    ///
    /// # Panics
    /// Panics if `code` is zero. In a `const` this is a compile error instead.
    pub const fn new(code: i32, semantic_code: &'static str) -> EGrp {
        assert!(code != 0, "error group codes must be non-zero");
        EGrp {
            code,
            semantic_code: Cow::Borrowed(semantic_code),
        }
    }

    pub fn try_new(
        code: i32,
        semantic_code: impl Into<Cow<'static, str>>,
    ) -> Result<EGrp, ZeroCodeError> {
        match code {
            0 => Err(ZeroCodeError),
            code => Ok(EGrp {
                code,
                semantic_code: semantic_code.into(),
            }),
        }
    }

    pub const fn code(&self) -> i32 {
        self.code
    }

    pub fn semantic_code(&self) -> &str {
        &self.semantic_code
    }
}

/// A single entry in the error catalog: a numeric code, a stable semantic tag and a default
/// human-readable message.
///
/// Entries are meant to be declared as associated constants and copied out when raised. Use
/// [`ErrCode::with_msg`] to attach a more specific message to the copy, the catalog itself is never
/// modified.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{semantic_code}({code}): {msg}")]
#[serde(rename_all = "camelCase", try_from = "RawErrCode")]
pub struct ErrCode {
    code: i32,
    semantic_code: Cow<'static, str>,
    msg: Cow<'static, str>,
}

impl ErrCode {
    pub const SYS_ERR: ErrCode = ErrCode::new(
        -1,
        "SYS_ERR",
        "system encounter some not know exception, plese retry later",
    );

    pub const UNREACHABLE: ErrCode = ErrCode::new(-2, "UNREACHABLE", "it should have not happen!");

    pub const FORMAT_ERR: ErrCode = ErrCode::new(
        1,
        "FORMAT_ERR",
        "format wrong, please check input information",
    );

    pub const QUEUE_FULL: ErrCode = ErrCode::new(2, "QUEUE_FULL", "queue is full, please try later");

    /// Declares a catalog entry.
    ///
    /// # Panics
    /// Panics if `code` is zero. In a `const` this is a compile error instead.
    pub const fn new(code: i32, semantic_code: &'static str, default_msg: &'static str) -> ErrCode {
        assert!(code != 0, "error codes must be non-zero");
        ErrCode {
            code,
            semantic_code: Cow::Borrowed(semantic_code),
            msg: Cow::Borrowed(default_msg),
        }
    }

    pub fn try_new(
        code: i32,
        semantic_code: impl Into<Cow<'static, str>>,
        default_msg: impl Into<Cow<'static, str>>,
    ) -> Result<ErrCode, ZeroCodeError> {
        match code {
            0 => Err(ZeroCodeError),
            code => Ok(ErrCode {
                code,
                semantic_code: semantic_code.into(),
                msg: default_msg.into(),
            }),
        }
    }

    /// Returns a copy of this entry carrying `msg` instead of the default message.
    pub fn with_msg(&self, msg: impl Into<Cow<'static, str>>) -> ErrCode {
        ErrCode {
            msg: msg.into(),
            ..self.clone()
        }
    }

    pub const fn code(&self) -> i32 {
        self.code
    }

    pub fn semantic_code(&self) -> &str {
        &self.semantic_code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

// Deserialization goes through these so that a zero code can't sneak in from the wire.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEGrp {
    code: i32,
    semantic_code: String,
}

impl TryFrom<RawEGrp> for EGrp {
    type Error = ZeroCodeError;

    fn try_from(raw: RawEGrp) -> Result<Self, Self::Error> {
        EGrp::try_new(raw.code, raw.semantic_code)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawErrCode {
    code: i32,
    semantic_code: String,
    msg: String,
}

impl TryFrom<RawErrCode> for ErrCode {
    type Error = ZeroCodeError;

    fn try_from(raw: RawErrCode) -> Result<Self, Self::Error> {
        ErrCode::try_new(raw.code, raw.semantic_code, raw.msg)
    }
}

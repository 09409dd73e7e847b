use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use super::{EGrp, ErrCode};

/// The failing half of a [`Ret`]: the group and catalog entry that were raised, and whether the
/// failure came from the system rather than from business logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    sys_err: bool,
    group: EGrp,
    err: ErrCode,
}

impl Failure {
    pub const fn sys(group: EGrp, err: ErrCode) -> Failure {
        Failure {
            sys_err: true,
            group,
            err,
        }
    }

    pub const fn biz(group: EGrp, err: ErrCode) -> Failure {
        Failure {
            sys_err: false,
            group,
            err,
        }
    }

    pub const fn is_sys_err(&self) -> bool {
        self.sys_err
    }

    pub const fn group(&self) -> &EGrp {
        &self.group
    }

    pub const fn err(&self) -> &ErrCode {
        &self.err
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let origin = if self.sys_err { "system" } else { "business" };
        write!(f, "{} error in {}: {}", origin, self.group, self.err)
    }
}

impl Error for Failure {}

/// A result wrapper for returning tagged failures instead of throwing.
///
/// Unlike [`Result`], the failing side is always a [`Failure`] drawn from the error catalog, which
/// keeps the error vocabulary of an API closed and serializable. Use [`Ret::into_result`] to get
/// back to a [`Result`] when `?` is more convenient.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Ret<T> {
    Success(T),
    Failure(Failure),
}

impl Ret<()> {
    /// A successful [`Ret`] with no payload.
    pub const SUCCESS: Ret<()> = Ret::Success(());
}

impl<T> Ret<T> {
    pub const fn success_with(data: T) -> Ret<T> {
        Ret::Success(data)
    }

    pub const fn sys_err(group: EGrp, err: ErrCode) -> Ret<T> {
        Ret::Failure(Failure::sys(group, err))
    }

    pub fn sys_err_msg(group: EGrp, err: ErrCode, msg: impl Into<Cow<'static, str>>) -> Ret<T> {
        Ret::Failure(Failure::sys(group, err.with_msg(msg)))
    }

    pub const fn biz_err(group: EGrp, err: ErrCode) -> Ret<T> {
        Ret::Failure(Failure::biz(group, err))
    }

    pub fn biz_err_msg(group: EGrp, err: ErrCode, msg: impl Into<Cow<'static, str>>) -> Ret<T> {
        Ret::Failure(Failure::biz(group, err.with_msg(msg)))
    }

    /// Shorthand for [`Ret::biz_err_msg`].
    pub fn with(group: EGrp, err: ErrCode, msg: impl Into<Cow<'static, str>>) -> Ret<T> {
        Ret::biz_err_msg(group, err, msg)
    }

    pub fn succeed(&self) -> bool {
        self.is_success()
    }

    pub fn failed(&self) -> bool {
        self.is_failure()
    }

    pub const fn is_sys_err(&self) -> bool {
        match self {
            Ret::Success(_) => false,
            Ret::Failure(failure) => failure.sys_err,
        }
    }

    pub const fn data(&self) -> Option<&T> {
        match self {
            Ret::Success(data) => Some(data),
            Ret::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Ret::Success(data) => Some(data),
            Ret::Failure(_) => None,
        }
    }

    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Ret::Success(_) => None,
            Ret::Failure(failure) => Some(failure),
        }
    }

    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Ret::Success(_) => None,
            Ret::Failure(failure) => Some(failure),
        }
    }

    pub const fn group(&self) -> Option<&EGrp> {
        match self {
            Ret::Success(_) => None,
            Ret::Failure(failure) => Some(&failure.group),
        }
    }

    pub const fn err(&self) -> Option<&ErrCode> {
        match self {
            Ret::Success(_) => None,
            Ret::Failure(failure) => Some(&failure.err),
        }
    }

    /// Re-types a failure so it can be passed up through a function with a different payload.
    /// If `self` was a success there is nothing to transfer and the payload is handed back.
    pub fn failure_transfer<U>(self) -> Result<Ret<U>, T> {
        match self {
            Ret::Success(data) => Err(data),
            Ret::Failure(failure) => Ok(Ret::Failure(failure)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Ret<U> {
        match self {
            Ret::Success(data) => Ret::Success(f(data)),
            Ret::Failure(failure) => Ret::Failure(failure),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Ret<U>>(self, f: F) -> Ret<U> {
        match self {
            Ret::Success(data) => f(data),
            Ret::Failure(failure) => Ret::Failure(failure),
        }
    }

    pub fn into_result(self) -> Result<T, Failure> {
        self.into()
    }
}

impl<T> From<Failure> for Ret<T> {
    fn from(failure: Failure) -> Self {
        Ret::Failure(failure)
    }
}

impl<T> From<Result<T, Failure>> for Ret<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(data) => Ret::Success(data),
            Err(failure) => Ret::Failure(failure),
        }
    }
}

impl<T> From<Ret<T>> for Result<T, Failure> {
    fn from(ret: Ret<T>) -> Self {
        match ret {
            Ret::Success(data) => Ok(data),
            Ret::Failure(failure) => Err(failure),
        }
    }
}

// The wire shape is flat: `{success, data, sysErr, eGrp, err}`, with whichever half is unused left
// as null.

impl<T: Serialize> Serialize for Ret<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Ret", 5)?;
        state.serialize_field("success", &self.succeed())?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("sysErr", &self.is_sys_err())?;
        state.serialize_field("eGrp", &self.group())?;
        state.serialize_field("err", &self.err())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRet {
    success: bool,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    sys_err: bool,
    e_grp: Option<EGrp>,
    err: Option<ErrCode>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Ret<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRet::deserialize(deserializer)?;

        if raw.success {
            // A unit payload is written as null, so the data is parsed even when it is null.
            return T::deserialize(raw.data)
                .map(Ret::Success)
                .map_err(de::Error::custom);
        }

        match (raw.e_grp, raw.err) {
            (Some(group), Some(err)) => Ok(Ret::Failure(Failure {
                sys_err: raw.sys_err,
                group,
                err,
            })),
            _ => Err(de::Error::custom("failed Ret must carry both eGrp and err")),
        }
    }
}

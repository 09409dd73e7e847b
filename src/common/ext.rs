use std::error::Error;

use log::debug;

use super::{EGrp, ErrCode, Ret};

pub trait ResultExt<T> {
    /// Turns an `Err` into a system failure, replacing the catalog message with the error's own
    /// display text.
    fn or_sys_err(self, group: EGrp, err: ErrCode) -> Ret<T>;

    /// Like [`ResultExt::or_sys_err`], but raised as a business failure.
    fn or_biz_err(self, group: EGrp, err: ErrCode) -> Ret<T>;
}

impl<T, E: Error> ResultExt<T> for Result<T, E> {
    fn or_sys_err(self, group: EGrp, err: ErrCode) -> Ret<T> {
        match self {
            Ok(val) => Ret::success_with(val),
            Err(error) => {
                debug!("{} raised as system error {}: {}", group, err.semantic_code(), error);
                Ret::sys_err_msg(group, err, error.to_string())
            }
        }
    }

    fn or_biz_err(self, group: EGrp, err: ErrCode) -> Ret<T> {
        match self {
            Ok(val) => Ret::success_with(val),
            Err(error) => {
                debug!("{} raised as business error {}: {}", group, err.semantic_code(), error);
                Ret::biz_err_msg(group, err, error.to_string())
            }
        }
    }
}

pub trait OptionExt<T> {
    /// Turns a `None` into a business failure carrying the catalog's default message.
    fn or_biz_err(self, group: EGrp, err: ErrCode) -> Ret<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_biz_err(self, group: EGrp, err: ErrCode) -> Ret<T> {
        match self {
            Some(val) => Ret::success_with(val),
            None => Ret::biz_err(group, err),
        }
    }
}

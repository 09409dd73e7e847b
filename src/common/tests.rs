#![cfg(test)]

use std::hint::black_box;
use std::io;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_zero_codes_rejected() {
    assert_eq!(ErrCode::try_new(0, "ZERO", "zero"), Err(ZeroCodeError));
    assert_eq!(EGrp::try_new(0, "ZERO"), Err(ZeroCodeError));
    assert!(ErrCode::try_new(7, "SEVEN", "seven").is_ok());

    assert_panics!(ErrCode::new(black_box(0), "ZERO", "zero"));
    assert_panics!(EGrp::new(black_box(0), "ZERO"));

    let err = serde_json::from_str::<ErrCode>(r#"{"code":0,"semanticCode":"ZERO","msg":"zero"}"#);
    assert!(err.is_err(), "A zero code should not survive deserialization.");

    let grp = serde_json::from_str::<EGrp>(r#"{"code":0,"semanticCode":"ZERO"}"#);
    assert!(grp.is_err(), "A zero group code should not survive deserialization either.");
    let grp = serde_json::from_str::<EGrp>(r#"{"code":3,"semanticCode":"ORDER"}"#).unwrap();
    assert_eq!(grp.to_string(), "ORDER(3)");
}

#[test]
fn test_catalog_is_not_mutated_by_messages() {
    let ret = Ret::<()>::with(EGrp::INTERNAL, ErrCode::FORMAT_ERR, "bad date");

    assert_eq!(ret.err().map(ErrCode::msg), Some("bad date"));
    assert_eq!(
        ErrCode::FORMAT_ERR.msg(),
        "format wrong, please check input information",
        "Overriding the message must only affect the raised copy."
    );
    assert_eq!(ret.err().map(ErrCode::code), Some(1));
}

#[test]
fn test_failure_flags_follow_constructor() {
    let ok = Ret::success_with(42);
    assert!(ok.succeed() && !ok.failed() && !ok.is_sys_err());
    assert_eq!(ok.data(), Some(&42));
    assert_eq!(ok.group(), None);

    let biz = Ret::<i32>::biz_err(EGrp::INTERNAL, ErrCode::QUEUE_FULL);
    assert!(biz.failed() && !biz.is_sys_err());
    assert_eq!(biz.data(), None);
    assert_eq!(biz.err(), Some(&ErrCode::QUEUE_FULL));

    let sys = Ret::<i32>::sys_err_msg(EGrp::INTERNAL, ErrCode::SYS_ERR, "disk on fire");
    assert!(sys.failed() && sys.is_sys_err());
    assert_eq!(sys.group(), Some(&EGrp::INTERNAL));

    let with = Ret::<()>::with(EGrp::INTERNAL, ErrCode::FORMAT_ERR, "format");
    assert!(with.failed() && !with.is_sys_err());

    assert!(Ret::SUCCESS.succeed());
}

#[test]
fn test_failure_transfer() {
    let failed = Ret::<String>::sys_err(EGrp::INTERNAL, ErrCode::UNREACHABLE);
    let transferred: Ret<u64> = failed.clone().failure_transfer().unwrap_or_else(|_| panic!());

    assert_eq!(transferred.failure(), failed.failure());
    assert!(transferred.is_sys_err());

    let succeeded = Ret::success_with(String::from("payload"));
    assert_eq!(succeeded.failure_transfer::<u64>(), Err(String::from("payload")));
}

#[test]
fn test_result_interop() {
    let doubled = Ret::success_with(21).map(|v| v * 2);
    assert_eq!(doubled.into_result(), Ok(42));

    let chained = Ret::success_with(1).and_then(|_| Ret::<u8>::biz_err(EGrp::INTERNAL, ErrCode::QUEUE_FULL));
    let failure = chained.into_result().unwrap_err();
    assert_eq!(failure.err(), &ErrCode::QUEUE_FULL);
    assert_eq!(
        failure.to_string(),
        "business error in INTERNAL(-1): QUEUE_FULL(2): queue is full, please try later"
    );

    let parsed: Ret<i32> = "12x".parse::<i32>().or_biz_err(EGrp::INTERNAL, ErrCode::FORMAT_ERR);
    assert!(parsed.failed());
    assert_eq!(parsed.err().map(ErrCode::msg), Some("invalid digit found in string"));

    let io: Result<(), io::Error> = Err(io::Error::other("pipe closed"));
    assert!(io.or_sys_err(EGrp::INTERNAL, ErrCode::SYS_ERR).is_sys_err());

    assert!(None::<u8>.or_biz_err(EGrp::INTERNAL, ErrCode::FORMAT_ERR).failed());
    assert_eq!(Some(3).or_biz_err(EGrp::INTERNAL, ErrCode::FORMAT_ERR).into_data(), Some(3));
}

#[test]
fn test_wire_shape() {
    let json = serde_json::to_value(Ret::<()>::with(EGrp::INTERNAL, ErrCode::FORMAT_ERR, "oops"))
        .unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "success": false,
            "data": null,
            "sysErr": false,
            "eGrp": { "code": -1, "semanticCode": "INTERNAL" },
            "err": { "code": 1, "semanticCode": "FORMAT_ERR", "msg": "oops" },
        })
    );

    let back: Ret<()> = serde_json::from_value(json).unwrap();
    assert_eq!(back.err().map(ErrCode::msg), Some("oops"));

    let unit: Ret<()> = serde_json::from_str(&serde_json::to_string(&Ret::SUCCESS).unwrap()).unwrap();
    assert_eq!(unit, Ret::SUCCESS, "A unit payload is written as null and must read back.");

    let missing = serde_json::from_str::<Ret<u8>>(r#"{"success":false,"sysErr":true}"#);
    assert!(missing.is_err(), "A failure without its error code is malformed.");
}

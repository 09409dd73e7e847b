//! This crate is my grab bag of small utilities that I keep reaching for across projects.
//!
//! # Purpose
//! None of this is a system. Each module is a self-contained helper that grew out of a scratch
//! file: an error catalog and a result wrapper, field validation, JSON helpers, a mutex wrapper,
//! TSC based timing, some SIMD-assisted byte helpers and a synchronous file writer. Modules don't
//! depend on each other much, so it's fine to read any one of them in isolation.
//!
//! # Error Handling
//! There are two layers here. Business-level failures are values: an [`ErrCode`](common::ErrCode)
//! from a static catalog, tagged with an [`EGrp`](common::EGrp), and carried in a
//! [`Ret`](common::Ret). Nothing in that path throws or panics.
//!
//! Lower-level failures (syscalls, parsing, config) use strongly typed errors instead, with enums
//! for static dispatch and small structs that implement [`Error`](std::error::Error). The
//! [`common::ResultExt`] trait bridges the two when a low-level error needs to become a `Ret`.
//!
//! # Dependencies
//! - `serde`, `serde_json` and `toml` for anything that gets serialized.
//! - `log` for diagnostics. Nothing in the library installs a logger, the binary does.
//! - `parking_lot` backs [`Locked`](sync::Locked).
//! - `libc` for the thin syscall wrappers in [`fs`] (feature `fs`, Linux only).
//! - `chrono` for [`time`] (feature `time`).
//! - Some derive macros from `derive_more`, because they remove a lot of repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod common;
pub mod config;
pub mod fast;
#[cfg(feature = "fs")]
pub mod fs;
pub mod json;
pub mod measure;
pub mod sync;
pub mod text;
#[cfg(feature = "time")]
pub mod time;
pub mod validation;

pub(crate) mod util;

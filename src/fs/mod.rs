//! Durable, synchronous file writing on top of raw Linux syscalls.
//!
//! A [`SyncWriter`] owns a file descriptor opened for writing and applies one [`SyncStrategy`] to
//! every write, from fully synchronous `O_SYNC` writes down to plain buffered ones. Each operation
//! has its own error enum listing only the failures it can actually produce, so callers can match
//! exhaustively instead of digging through an [`io::Error`](std::io::Error).
#![cfg(target_os = "linux")]

mod error;
mod fd;
mod strategy;
mod union_errors;
mod writer;

pub use error::*;
pub(crate) use fd::*;
pub use strategy::*;
pub use union_errors::*;
pub use writer::*;

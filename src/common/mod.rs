//! The error catalog and the result wrapper that carries it.
//!
//! Errors here are values, not types. An [`ErrCode`] is an immutable catalog entry (code, semantic
//! tag, default message), an [`EGrp`] names the category it was raised under, and a [`Ret`] carries
//! either a payload or a [`Failure`] built from the two.

mod errs;
mod ext;
mod ret;
mod tests;
mod version;

pub use errs::*;
pub use ext::*;
pub use ret::*;
pub use version::*;

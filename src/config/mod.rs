//! Typed configuration entries loaded from TOML.
//!
//! A config file is described by an ordinary serde struct whose fields are [`Cfg`] entries, each
//! carrying a human description next to its value. After parsing, the struct's [`PostProcess`] hook
//! runs, which is the place to derive values or reject bad ones with
//! [`validation`](crate::validation) rules.

mod cfg;
mod error;
mod load;
mod tests;

pub use cfg::*;
pub use error::*;
pub use load::*;

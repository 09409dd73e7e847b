//! Setter-side validation for entity fields.
//!
//! A [`Field`] is a named slot with an ordered list of [`Rule`]s. Every [`Field::set`] runs the
//! rules in declaration order and stores the value only if all of them hold, reporting the first
//! violation as a [`ValidationError`].
//!
//! ```
//! use rhino::validation::{Field, Rule};
//!
//! let mut score = Field::builder("score")
//!     .rule(Rule::positive("Score must be positive"))
//!     .rule(Rule::less_than(100, "Score must be < 100"))
//!     .build();
//!
//! assert!(score.set(100).is_err());
//! assert!(score.set(99).is_ok());
//! assert_eq!(score.get(), Some(&99));
//! ```

mod error;
mod field;
mod len;
mod rule;
mod tests;

pub use error::*;
pub use field::*;
pub use len::*;
pub use rule::*;

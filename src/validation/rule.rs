use std::borrow::Cow;
use std::fmt::{self, Debug, Formatter};

use derive_more::Display;

use super::HasLen;
use crate::text;
use crate::util::fmt::DebugRaw;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Positive,
    PositiveOrZero,
    Negative,
    NegativeOrZero,
    NonZero,
    NotBlank,
    NotEmpty,
    LessThan,
    LessOrEqualThan,
    GreaterThan,
    GreaterOrEqualThan,
    NotEqual,
    SizeLessThan,
    SizeLessOrEqualThan,
    SizeGreaterThan,
    SizeGreaterOrEqualThan,
    SizeEqual,
    SizeNotEqual,
    Custom,
}

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A single constraint on a field value, along with the message reported when it fails.
///
/// Constructors are only available for value types the rule makes sense for: the sign rules need
/// an ordered type whose [`Default`] is its zero, `not_blank` needs text and the `size_*` rules need
/// [`HasLen`].
pub struct Rule<T> {
    kind: RuleKind,
    msg: Cow<'static, str>,
    check: Check<T>,
}

impl<T: 'static> Rule<T> {
    fn new<F>(kind: RuleKind, msg: impl Into<Cow<'static, str>>, check: F) -> Rule<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule {
            kind,
            msg: msg.into(),
            check: Box::new(check),
        }
    }

    /// A rule backed by an arbitrary predicate, which must return true for valid values.
    pub fn custom<F>(msg: impl Into<Cow<'static, str>>, check: F) -> Rule<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule::new(RuleKind::Custom, msg, check)
    }
}

impl<T> Rule<T> {
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Returns true if `value` satisfies this rule.
    pub fn test(&self, value: &T) -> bool {
        (self.check)(value)
    }
}

impl<T: PartialOrd + Default + 'static> Rule<T> {
    pub fn positive(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::Positive, msg, |v: &T| v > &T::default())
    }

    pub fn positive_or_zero(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::PositiveOrZero, msg, |v: &T| v >= &T::default())
    }

    pub fn negative(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::Negative, msg, |v: &T| v < &T::default())
    }

    pub fn negative_or_zero(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::NegativeOrZero, msg, |v: &T| v <= &T::default())
    }

    pub fn non_zero(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::NonZero, msg, |v: &T| v != &T::default())
    }
}

impl<T: PartialOrd + Send + Sync + 'static> Rule<T> {
    pub fn less_than(limit: T, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::LessThan, msg, move |v: &T| v < &limit)
    }

    pub fn less_or_equal_than(limit: T, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::LessOrEqualThan, msg, move |v: &T| v <= &limit)
    }

    pub fn greater_than(limit: T, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::GreaterThan, msg, move |v: &T| v > &limit)
    }

    pub fn greater_or_equal_than(limit: T, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::GreaterOrEqualThan, msg, move |v: &T| v >= &limit)
    }

    pub fn not_equal(limit: T, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::NotEqual, msg, move |v: &T| v != &limit)
    }
}

impl<T: AsRef<str> + 'static> Rule<T> {
    /// Fails for empty strings and for strings made up only of whitespace.
    pub fn not_blank(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::NotBlank, msg, |v: &T| !text::is_blank(v.as_ref()))
    }
}

impl<T: HasLen + 'static> Rule<T> {
    pub fn not_empty(msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::NotEmpty, msg, |v: &T| !v.is_empty())
    }

    pub fn size_less_than(limit: usize, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::SizeLessThan, msg, move |v: &T| v.len() < limit)
    }

    pub fn size_less_or_equal_than(limit: usize, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::SizeLessOrEqualThan, msg, move |v: &T| v.len() <= limit)
    }

    pub fn size_greater_than(limit: usize, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::SizeGreaterThan, msg, move |v: &T| v.len() > limit)
    }

    pub fn size_greater_or_equal_than(limit: usize, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::SizeGreaterOrEqualThan, msg, move |v: &T| v.len() >= limit)
    }

    pub fn size_equal(limit: usize, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::SizeEqual, msg, move |v: &T| v.len() == limit)
    }

    pub fn size_not_equal(limit: usize, msg: impl Into<Cow<'static, str>>) -> Rule<T> {
        Rule::new(RuleKind::SizeNotEqual, msg, move |v: &T| v.len() != limit)
    }
}

impl<T> Debug for Rule<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("msg", &self.msg)
            .field("check", &DebugRaw(String::from("<fn>")))
            .finish()
    }
}

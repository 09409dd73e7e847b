use std::borrow::Cow;

use derive_more::{Display, Error};

use super::RuleKind;

/// The first rule a value broke while being assigned to a field.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("invalid {field}: {msg}")]
pub struct ValidationError {
    pub(crate) field: Cow<'static, str>,
    pub(crate) kind: RuleKind,
    pub(crate) msg: Cow<'static, str>,
}

impl ValidationError {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

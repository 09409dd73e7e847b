use std::borrow::Cow;

use super::{Rule, ValidationError};

/// A named value slot that only accepts values satisfying all of its rules.
#[derive(Debug)]
pub struct Field<T> {
    name: Cow<'static, str>,
    rules: Vec<Rule<T>>,
    value: Option<T>,
}

impl<T> Field<T> {
    pub fn builder(name: impl Into<Cow<'static, str>>) -> FieldBuilder<T> {
        FieldBuilder {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Checks `value` against every rule in declaration order, without storing it.
    pub fn validate(&self, value: &T) -> Result<(), ValidationError> {
        match self.rules.iter().find(|rule| !rule.test(value)) {
            Some(rule) => Err(ValidationError {
                field: self.name.clone(),
                kind: rule.kind(),
                msg: Cow::Owned(rule.msg().to_owned()),
            }),
            None => Ok(()),
        }
    }

    /// Validates `value` and stores it. On failure the previous value is left in place.
    pub fn set(&mut self, value: T) -> Result<(), ValidationError> {
        self.validate(&value)?;
        self.value = Some(value);
        Ok(())
    }

    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

#[derive(Debug)]
pub struct FieldBuilder<T> {
    name: Cow<'static, str>,
    rules: Vec<Rule<T>>,
}

impl<T> FieldBuilder<T> {
    pub fn rule(mut self, rule: Rule<T>) -> FieldBuilder<T> {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Field<T> {
        Field {
            name: self.name,
            rules: self.rules,
            value: None,
        }
    }

    /// Builds the field with an initial value, which has to pass the same rules as any later one.
    pub fn with_value(self, value: T) -> Result<Field<T>, ValidationError> {
        let mut field = self.build();
        field.set(value)?;
        Ok(field)
    }
}

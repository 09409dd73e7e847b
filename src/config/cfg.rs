use serde::{Deserialize, Serialize};

use super::ConfigError;

/// A value type that can appear in a config entry, tagged with the name used to describe it.
pub trait CfgValue {
    const KIND: &'static str;
}

impl CfgValue for String {
    const KIND: &'static str = "string";
}

impl CfgValue for i32 {
    const KIND: &'static str = "int32";
}

impl CfgValue for bool {
    const KIND: &'static str = "bool";
}

/// A single config entry: the value and what it is for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cfg<T> {
    #[serde(default)]
    pub desc: String,
    pub val: T,
}

impl<T: CfgValue> Cfg<T> {
    pub fn new(desc: impl Into<String>, val: T) -> Cfg<T> {
        Cfg {
            desc: desc.into(),
            val,
        }
    }

    pub const fn kind(&self) -> &'static str {
        T::KIND
    }
}

pub type StringCfg = Cfg<String>;
pub type Int32Cfg = Cfg<i32>;
pub type BoolCfg = Cfg<bool>;

/// A hook that runs once a config has been parsed. The default does nothing.
pub trait PostProcess {
    fn post_process(&mut self) -> Result<(), ConfigError> {
        Ok(())
    }
}

//! Thin wrappers around `serde_json` so call sites don't repeat the same pretty/compact plumbing.
//!
//! Optional fields need nothing special: `Option<T>` is written as `null` and a `null` or missing
//! value reads back as `None`.

use derive_more::{Display, Error, From};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};


const INDENT: &[u8] = b"    ";

#[derive(Debug, Display, From, Error)]
#[display("json error: {_0}")]
pub struct JsonError(serde_json::Error);

impl JsonError {
    pub fn line(&self) -> usize {
        self.0.line()
    }

    pub fn column(&self) -> usize {
        self.0.column()
    }
}

/// Serializes `obj`, indenting with four spaces when `pretty` is set.
pub fn to_json<T: Serialize + ?Sized>(obj: &T, pretty: bool) -> Result<String, JsonError> {
    if !pretty {
        return Ok(serde_json::to_string(obj)?);
    }

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    obj.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn from_json<T: DeserializeOwned>(value: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(value)?)
}

/// Converts `obj` into an untyped JSON tree.
pub fn to_json_tree<T: Serialize + ?Sized>(obj: &T) -> Result<Value, JsonError> {
    Ok(serde_json::to_value(obj)?)
}

/// Parses text into an untyped JSON tree.
pub fn parse_tree(value: &str) -> Result<Value, JsonError> {
    Ok(serde_json::from_str(value)?)
}

pub fn from_json_tree<T: DeserializeOwned>(tree: Value) -> Result<T, JsonError> {
    Ok(serde_json::from_value(tree)?)
}

pub fn tree_to_string(tree: &Value, pretty: bool) -> Result<String, JsonError> {
    to_json(tree, pretty)
}

#![cfg(test)]

use std::fs;

use serde::Deserialize;

use super::*;
use crate::validation::{Field, Rule, RuleKind};

#[derive(Debug, Deserialize)]
struct ServerConfig {
    name: StringCfg,
    port: Int32Cfg,
    verbose: BoolCfg,
}

impl PostProcess for ServerConfig {
    fn post_process(&mut self) -> Result<(), ConfigError> {
        let port = Field::builder("port")
            .rule(Rule::greater_than(0, "port must be positive"))
            .rule(Rule::less_or_equal_than(65_535, "port must fit in 16 bits"))
            .build();
        port.validate(&self.port.val)?;

        self.name.val = self.name.val.trim().to_owned();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct Plain {
    flag: BoolCfg,
}

impl PostProcess for Plain {}

const SERVER: &str = r#"
[name]
desc = "display name"
val = "  rhino  "

[port]
desc = "listen port"
val = 8080

[verbose]
val = true
"#;

#[test]
fn test_parse_and_post_process() {
    let config: ServerConfig = from_toml_str(SERVER).unwrap();

    assert_eq!(config.name.val, "rhino", "post_process should have trimmed the name.");
    assert_eq!(config.port.desc, "listen port");
    assert_eq!(config.port.val, 8080);
    assert!(config.verbose.val);
    assert_eq!(config.verbose.desc, "", "A missing description defaults to empty.");

    assert_eq!(config.name.kind(), "string");
    assert_eq!(config.port.kind(), "int32");
    assert_eq!(config.verbose.kind(), "bool");
}

#[test]
fn test_post_process_rejects() {
    let err = from_toml_str::<ServerConfig>(&SERVER.replace("8080", "70000")).unwrap_err();

    match err {
        ConfigError::Invalid(e) => assert_eq!(e.kind(), RuleKind::LessOrEqualThan),
        other => panic!("expected a validation error, got {other}"),
    }
}

#[test]
fn test_parse_errors() {
    let err = from_toml_str::<Plain>("[flag]\nval = \"yes\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "A string isn't a bool: {err}");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.toml");
    fs::write(&path, "[flag]\ndesc = \"a flag\"\nval = false\n").unwrap();

    let plain: Plain = load(&path).unwrap();
    assert_eq!(plain.flag, BoolCfg::new("a flag", false));

    let missing = load::<Plain, _>(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));
}

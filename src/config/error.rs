use derive_more::{Display, Error, From};

use crate::validation::ValidationError;

#[derive(Debug, Display, From, Error)]
pub enum ConfigError {
    #[display("couldn't read config: {_0}")]
    Io(std::io::Error),
    #[display("couldn't parse config: {_0}")]
    Parse(toml::de::Error),
    #[display("invalid config: {_0}")]
    Invalid(ValidationError),
}

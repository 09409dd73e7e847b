use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;

use super::{ConfigError, PostProcess};

/// Parses a TOML document into `T` and runs its [`PostProcess`] hook.
pub fn from_toml_str<T: DeserializeOwned + PostProcess>(text: &str) -> Result<T, ConfigError> {
    let mut config: T = toml::from_str(text)?;
    config.post_process()?;
    Ok(config)
}

/// Reads and parses the TOML file at `path`. See [`from_toml_str`].
pub fn load<T: DeserializeOwned + PostProcess, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let path = path.as_ref();
    debug!("loading config from {}", path.display());

    let config = from_toml_str(&fs::read_to_string(path)?)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

//! Loading the engine configuration from a TOML file.
//!
//! ```toml
//! [engine]
//! magic_trigger_count = 2
//! medium_tier_min_len = 7
//! small_tier_min_len = 10
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::{fs, io, path::Path, path::PathBuf};

use calc_core::{EngineConfig, EngineConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] EngineConfigError),
}

/// Top-level layout of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub engine: EngineConfig,
}

/// Parses and validates settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = toml::from_str(text)?;
    settings.engine.validate()?;
    Ok(settings)
}

/// Loads the engine configuration from `path`, or returns the defaults when
/// no path is given.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig, SettingsError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text)?;
    debug!(path = %path.display(), config = ?settings.engine, "loaded engine config");
    Ok(settings.engine)
}

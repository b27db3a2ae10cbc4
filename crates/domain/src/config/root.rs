use super::{CacheConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration.
///
/// This component only owns the `[cache]` section; the embedding proxy
/// contributes its own sections to the same file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// no path is given. The result is always validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.enabled && self.cache.max_entries > 0 && self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.sweep_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

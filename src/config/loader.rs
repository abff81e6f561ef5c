use std::{collections::HashMap, env, fs, path::PathBuf};

use super::{AppConfig, PartialAppConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_CONFIG_PATH, ENV_LOG_LEVEL};
use crate::errors::ConfigError;

/// Configuration loader responsible for loading config from files and environment
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default paths
    pub fn new() -> Self {
        Self { explicit_path: None }
    }

    /// Create a config loader for a specific file, which must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit_path: Some(path.into()),
        }
    }

    /// Load complete application configuration
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let partial = match self.resolve_path() {
            Some((path, required)) => self.load_partial_config(&path, required)?,
            None => None,
        };
        AppConfig::from_partial_and_env(partial, self.collect_env_vars())
    }

    /// File to load and whether it must exist
    ///
    /// Explicit path, then `$GRAPHSTATS_CONFIG`, then the user config directory.
    pub fn resolve_path(&self) -> Option<(PathBuf, bool)> {
        if let Some(path) = &self.explicit_path {
            return Some((path.clone(), true));
        }
        if let Some(path) = env::var_os(ENV_CONFIG_PATH).filter(|p| !p.is_empty()) {
            return Some((PathBuf::from(path), true));
        }
        dirs::config_dir().map(|dir| (dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME), false))
    }

    /// Load partial configuration from TOML file
    fn load_partial_config(
        &self,
        config_path: &PathBuf,
        required: bool,
    ) -> Result<Option<PartialAppConfig>, ConfigError> {
        let path_display = config_path.to_string_lossy().to_string();
        if !config_path.exists() {
            if required {
                return Err(ConfigError::NotFound(path_display));
            }
            tracing::debug!("no configuration file at {}, using defaults", path_display);
            return Ok(None);
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::FileRead(path_display.clone(), e))?;
        let partial_config: PartialAppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::TomlParse(path_display.clone(), e))?;

        tracing::debug!("loaded configuration from {}", path_display);
        Ok(Some(partial_config))
    }

    /// Collect relevant environment variables
    fn collect_env_vars(&self) -> HashMap<String, String> {
        let mut env_map = HashMap::new();
        for key in [ENV_LOG_LEVEL] {
            if let Ok(value) = env::var(key) {
                env_map.insert(key.to_string(), value);
            }
        }
        env_map
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

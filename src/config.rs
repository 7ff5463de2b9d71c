use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, StampError};
use crate::scm;

/// Represents the complete configuration for version-stamp.
///
/// Contains default tool paths and the placeholder strings substituted when
/// source-control metadata is unavailable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub placeholders: PlaceholdersConfig,
}

/// Default collaborator paths used when the command line omits them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    /// Source-control executable used when `-g` is not given.
    #[serde(default)]
    pub git: Option<String>,
}

/// Returns the default branch placeholder.
fn default_branch_placeholder() -> String {
    scm::BRANCH_FALLBACK.to_string()
}

/// Returns the default commit placeholder.
fn default_commit_placeholder() -> String {
    scm::COMMIT_FALLBACK.to_string()
}

/// Placeholder strings substituted when a lookup is unavailable or fails.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlaceholdersConfig {
    #[serde(default = "default_branch_placeholder")]
    pub branch: String,

    #[serde(default = "default_commit_placeholder")]
    pub commit: String,
}

impl Default for PlaceholdersConfig {
    fn default() -> Self {
        PlaceholdersConfig {
            branch: default_branch_placeholder(),
            commit: default_commit_placeholder(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `stampver.toml` in current directory
/// 3. `stampver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./stampver.toml").exists() {
        fs::read_to_string("./stampver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("stampver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| StampError::config(e.to_string()))
}

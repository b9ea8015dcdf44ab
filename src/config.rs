use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::changelog::{DEFAULT_CHANGELOG_FILE, DEFAULT_UNRELEASED_LABEL};
use crate::error::{JobsError, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "releasejobs.toml";

/// Represents the complete configuration for release-jobs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

fn default_changelog_path() -> String {
    DEFAULT_CHANGELOG_FILE.to_string()
}

fn default_unreleased_label() -> String {
    DEFAULT_UNRELEASED_LABEL.to_string()
}

/// Where the changelog lives and how its reserved section is labelled.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: String,

    #[serde(default = "default_unreleased_label")]
    pub unreleased_label: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
            unreleased_label: default_unreleased_label(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasejobs.toml` in current directory
/// 3. `.releasejobs.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(JobsError::Config)` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if local.exists() {
        read_config_file(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            read_config_file(&user_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from a TOML string.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| JobsError::config(e.to_string()))
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| JobsError::config(format!("cannot read {}: {}", path.display(), e)))
}

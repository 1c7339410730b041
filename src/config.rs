use crate::error::{PrereleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working and user config directories
pub const CONFIG_FILE_NAME: &str = "prerelease.toml";

/// Represents the complete configuration for configure-prerelease.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

fn default_major_minor_constant() -> String {
    "versionMajorMinor".to_string()
}

fn default_version_constant() -> String {
    "version".to_string()
}

fn default_dev_marker() -> String {
    "-dev".to_string()
}

/// Names of the declarations expected in the source file.
///
/// The source file must contain `export const <major_minor_constant> = "M.N"` and
/// ``export const <version_constant> = `${<major_minor_constant>}.P<dev_marker>`;``
/// where the dev marker is optional.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_major_minor_constant")]
    pub major_minor_constant: String,

    #[serde(default = "default_version_constant")]
    pub version_constant: String,

    #[serde(default = "default_dev_marker")]
    pub dev_marker: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            major_minor_constant: default_major_minor_constant(),
            version_constant: default_version_constant(),
            dev_marker: default_dev_marker(),
        }
    }
}

impl SourceConfig {
    fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("major_minor_constant", &self.major_minor_constant),
            ("version_constant", &self.version_constant),
        ] {
            let is_identifier = !name.is_empty()
                && !name.starts_with(|c: char| c.is_ascii_digit())
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
            if !is_identifier {
                return Err(PrereleaseError::config(format!(
                    "source.{} must be an identifier, got '{}'",
                    key, name
                )));
            }
        }
        if self.major_minor_constant == self.version_constant {
            return Err(PrereleaseError::config(
                "source.major_minor_constant and source.version_constant must differ",
            ));
        }
        Ok(())
    }
}

/// Parses configuration from TOML text and validates it.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| PrereleaseError::config(e.to_string()))?;
    config.source.validate()?;
    Ok(config)
}

/// Locates the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `prerelease.toml` in current directory
/// 3. `prerelease.toml` in user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = find_config_file(config_path) else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        PrereleaseError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

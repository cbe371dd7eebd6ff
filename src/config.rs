//! Configuration loading from dewhite.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "dewhite.toml";

/// Root configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory whose PNG files get processed, relative to the working directory
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from default path (dewhite.toml in current directory).
    /// A missing file yields the built-in defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            return Ok(Self::default());
        }
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Resolve the config: an explicit file must exist, otherwise fall back
    /// to [`Config::load_default`].
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(path)
            }
            None => Self::load_default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assets_dir() {
        assert_eq!(Config::default().assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_assets_dir() {
        let config = Config::parse("assets_dir = \"art/uniforms\"").unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("art/uniforms"));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = Config::parse("threshold = 180").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dewhite.toml");
        std::fs::write(&path, "assets_dir = \"sprites\"\n").unwrap();

        let config = Config::resolve(Some(path.as_path())).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("sprites"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::resolve(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }
}

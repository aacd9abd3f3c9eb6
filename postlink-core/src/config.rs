//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Main configuration struct matching the postlink.yml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub permalink: PermalinkConfig,
}

/// How generated permalinks are shaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermalinkConfig {
    /// Path every generated permalink lives under
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Suffix appended to the second item that wants a slug
    #[serde(default = "default_first_suffix")]
    pub first_suffix: u32,
}

fn default_prefix() -> String {
    String::from("/blog/")
}

fn default_first_suffix() -> u32 {
    2
}

impl Default for PermalinkConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            first_suffix: default_first_suffix(),
        }
    }
}

impl PermalinkConfig {
    /// Prefix with a leading and trailing slash ("/blog/" or "/")
    pub fn normalized_prefix(&self) -> String {
        normalize_prefix(&self.prefix)
    }

    /// Build the permalink for an assigned slug
    pub fn path_for(&self, slug: &str) -> String {
        format!("{}{}/", self.normalized_prefix(), slug)
    }
}

impl Config {
    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults config
        let config: Config = if contents.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}; using defaults", path);
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.permalink.first_suffix < 2 {
            return Err(ConfigError::Invalid(format!(
                "permalink.first_suffix must be at least 2, got {}",
                self.permalink.first_suffix
            )));
        }
        Ok(())
    }
}

/// Ensure prefixes have a leading and trailing slash, and no doubled slashes
pub fn normalize_prefix(raw: &str) -> String {
    let segments: Vec<&str> = raw
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.permalink.prefix, "/blog/");
        assert_eq!(config.permalink.first_suffix, 2);
        assert_eq!(config.permalink.path_for("hello-world"), "/blog/hello-world/");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_yaml("permalink:\n  prefix: posts\n").unwrap();
        assert_eq!(config.permalink.prefix, "posts");
        assert_eq!(config.permalink.first_suffix, 2);
        assert_eq!(config.permalink.path_for("a"), "/posts/a/");
    }

    #[test]
    fn test_first_suffix_validation() {
        assert!(matches!(
            Config::from_yaml("permalink:\n  first_suffix: 1\n"),
            Err(ConfigError::Invalid(_))
        ));
        let config = Config::from_yaml("permalink:\n  first_suffix: 10\n").unwrap();
        assert_eq!(config.permalink.first_suffix, 10);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::from_yaml("permalink: [unclosed"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix(""), "/");
        assert_eq!(normalize_prefix("/"), "/");
        assert_eq!(normalize_prefix("blog"), "/blog/");
        assert_eq!(normalize_prefix("//blog//posts/"), "/blog/posts/");
        assert_eq!(normalize_prefix(" /notes "), "/notes/");
    }

    #[test]
    fn test_root_prefix() {
        let permalink = PermalinkConfig {
            prefix: "/".into(),
            ..Default::default()
        };
        assert_eq!(permalink.path_for("about"), "/about/");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/postlink.yml").unwrap();
        assert_eq!(config, Config::default());
    }
}

//! Codec configuration with builder pattern
//!
//! Loaded from TOML or built in code; every field has a default so an
//! empty file is a valid configuration.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Emit indented JSON instead of the compact form
    #[serde(default)]
    pub pretty: bool,
    /// Include full payload text in debug logs
    #[serde(default)]
    pub log_payloads: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            log_payloads: false,
        }
    }
}

impl CodecConfig {
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse codec config")
    }

    /// Load a configuration file, falling back to defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading codec config from: {:?}", path);

        if !path.exists() {
            info!("Codec config {:?} doesn't exist, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read codec config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid codec config: {:?}", path))
    }
}

/// Builder for CodecConfig
#[derive(Debug)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CodecConfig::default(),
        }
    }

    /// Enable/disable pretty printing
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.config.pretty = enabled;
        self
    }

    /// Enable/disable payload logging
    pub fn log_payloads(mut self, enabled: bool) -> Self {
        self.config.log_payloads = enabled;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}

impl Default for CodecConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();

        assert!(!config.pretty);
        assert!(!config.log_payloads);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CodecConfig::builder()
            .pretty(true)
            .log_payloads(true)
            .build();

        assert!(config.pretty);
        assert!(config.log_payloads);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CodecConfig::from_toml_str("pretty = true").unwrap();

        assert!(config.pretty);
        assert!(!config.log_payloads);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(CodecConfig::from_toml_str("").unwrap(), CodecConfig::default());
    }

    #[test]
    fn test_from_toml_wrong_type() {
        let err = CodecConfig::from_toml_str("pretty = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse codec config"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("optionkit-missing-config-does-not-exist.toml");
        let config = CodecConfig::load(&path).unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("optionkit-config-{}.toml", std::process::id()));
        fs::write(&path, "pretty = true\nlog_payloads = true\n").unwrap();

        let config = CodecConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(config.pretty);
        assert!(config.log_payloads);
    }
}

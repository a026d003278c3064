use serde::Deserialize;
use thiserror::Error;

use crate::domain::{LookupConfig, LookupError};
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: LookupConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified lookup config.
    #[must_use]
    pub fn with_config(mut self, config: LookupConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_lookup_config(&self) -> LookupConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Embedded TOML configuration
// ============================================================================

/// Configuration document structure.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    lookup: LookupConfig,
}

/// TOML-based configuration provider.
///
/// Parses lookup parameters from a TOML document supplied by the host.
/// Missing keys fall back to [`LookupConfig::default`].
///
/// # Config Format
///
/// ```toml
/// [lookup]
/// ksize = 20
/// alpha = 3
/// max_rounds = 20
/// ```
#[derive(Debug, Clone)]
pub struct TomlConfigProvider {
    config: LookupConfig,
}

impl TomlConfigProvider {
    /// Parse and validate configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.lookup.validate()?;
        Ok(Self {
            config: file.lookup,
        })
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn get_lookup_config(&self) -> LookupConfig {
        self.config.clone()
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed values violate lookup constraints.
    #[error("Invalid config: {0}")]
    Invalid(#[from] LookupError),
}

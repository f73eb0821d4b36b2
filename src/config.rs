//! Fetch configuration
//!
//! Built-in defaults, optionally overlaid by a TOML file with a `[fetch]`
//! table, then by CLI flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound for `timeout_seconds` (one hour).
pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Settings for fetching remote asset sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds (default: 30, 0 = no timeout)
    pub timeout_seconds: u64,

    /// User-Agent header sent with remote fetches
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("chia-nft/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    fetch: FetchConfig,
}

impl FetchConfig {
    /// Parse from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
        file.fetch.validate()?;
        Ok(file.fetch)
    }

    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Load from a file when one is given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply a CLI timeout override
    pub fn with_timeout(mut self, timeout_seconds: Option<u64>) -> Result<Self, ConfigError> {
        if let Some(secs) = timeout_seconds {
            self.timeout_seconds = secs;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ConfigError::ValidationError(format!(
                "timeout_seconds must be in [0, {}]",
                MAX_TIMEOUT_SECONDS
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "user_agent must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

use crate::core::records::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_min, validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientConfig,
    pub logging: Option<LoggingConfig>,
}

/// Connection settings; absent keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// Load a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordsError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config document, substituting `${VAR}` placeholders first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecordsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecordsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        self.client.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.endpoint", self.endpoint())?;
        validate_min("client.timeout_seconds", self.timeout_seconds(), 1)?;
        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}

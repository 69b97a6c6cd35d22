//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Remote user source endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Scheme, host and port of the server (e.g., "http://localhost:3000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the users collection
    #[serde(default = "default_users_path")]
    pub users_path: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
        }
    }
}

impl RemoteConfig {
    /// Point at a different server, keeping the default path
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the users endpoint
    ///
    /// Joins base and path with exactly one slash between them.
    pub fn users_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.users_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check that the users URL parses
    #[cfg(feature = "remote")]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.users_url();
        reqwest::Url::parse(&url)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidUrl {
                url,
                message: e.to_string(),
            })
    }
}

/// Complete configuration for the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Remote user source settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl RegistryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        tracing::debug!(users_url = %config.remote.users_url(), "Loaded registry config");
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }
}

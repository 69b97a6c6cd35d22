//! Typed error handling for the user registry
//!
//! Ranking never fails: a missing user is reported as a value (`None` or
//! `-1`). Errors only come from the fallible edges of the crate.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: Errors related to configuration loading
//! - [`RemoteError`]: Errors raised while fetching users from a remote source
//!
//! # Example
//!
//! ```rust,ignore
//! use user_rank::prelude::*;
//!
//! match source.fetch_all_users().await {
//!     Ok(response) => println!("Fetched {} users", response.data.len()),
//!     Err(RegistryError::Remote(RemoteError::Status { status, .. })) => {
//!         println!("Server answered {}", status);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use std::fmt;

/// The main error type for the registry
#[derive(Debug)]
pub enum RegistryError {
    /// Configuration errors
    Config(ConfigError),

    /// Remote source errors
    Remote(RemoteError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Config(e) => write!(f, "{}", e),
            RegistryError::Remote(e) => write!(f, "{}", e),
            RegistryError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Config(e) => Some(e),
            RegistryError::Remote(e) => Some(e),
            RegistryError::Internal(_) => None,
        }
    }
}

impl RegistryError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::Config(e) => e.error_code(),
            RegistryError::Remote(e) => e.error_code(),
            RegistryError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    Io { path: String, message: String },

    /// Configuration content is not valid YAML for the expected shape
    Parse { message: String },

    /// Configured endpoint is not a valid URL
    InvalidUrl { url: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::Parse { message } => {
                write!(f, "Failed to parse config: {}", message)
            }
            ConfigError::InvalidUrl { url, message } => {
                write!(f, "Invalid endpoint URL '{}': {}", url, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidUrl { .. } => "CONFIG_INVALID_URL",
        }
    }
}

impl From<ConfigError> for RegistryError {
    fn from(err: ConfigError) -> Self {
        RegistryError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Remote Errors
// =============================================================================

/// Errors raised by remote user sources.
///
/// Transport failures are carried as messages; they are not classified.
#[derive(Debug)]
pub enum RemoteError {
    /// Request could not be sent or the response could not be read
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    Status { url: String, status: u16 },

    /// Response body is not a JSON array
    Decode { url: String, message: String },
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport { url, message } => {
                write!(f, "Request to '{}' failed: {}", url, message)
            }
            RemoteError::Status { url, status } => {
                write!(f, "Request to '{}' returned status {}", url, status)
            }
            RemoteError::Decode { url, message } => {
                write!(f, "Failed to decode response from '{}': {}", url, message)
            }
        }
    }
}

impl std::error::Error for RemoteError {}

impl RemoteError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RemoteError::Transport { .. } => "REMOTE_TRANSPORT_ERROR",
            RemoteError::Status { .. } => "REMOTE_STATUS_ERROR",
            RemoteError::Decode { .. } => "REMOTE_DECODE_ERROR",
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<RemoteError> for RegistryError {
    fn from(err: RemoteError) -> Self {
        RegistryError::Remote(err)
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

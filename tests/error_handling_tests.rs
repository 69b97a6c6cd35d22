//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Error codes are stable per variant
//! - Display messages carry the relevant context
//! - Error conversions work correctly
//! - Error matching allows clients to handle specific cases

use std::error::Error;
use user_rank::prelude::*;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        assert_eq!(
            ConfigError::Io {
                path: "registry.yaml".to_string(),
                message: "missing".to_string()
            }
            .error_code(),
            "CONFIG_IO_ERROR"
        );

        assert_eq!(
            ConfigError::Parse {
                message: "bad".to_string()
            }
            .error_code(),
            "CONFIG_PARSE_ERROR"
        );

        assert_eq!(
            ConfigError::InvalidUrl {
                url: "nope".to_string(),
                message: "relative".to_string()
            }
            .error_code(),
            "CONFIG_INVALID_URL"
        );
    }

    #[test]
    fn test_remote_error_codes() {
        assert_eq!(
            RemoteError::Transport {
                url: "http://localhost:3000/users".to_string(),
                message: "refused".to_string()
            }
            .error_code(),
            "REMOTE_TRANSPORT_ERROR"
        );

        assert_eq!(
            RemoteError::Status {
                url: "http://localhost:3000/users".to_string(),
                status: 503
            }
            .error_code(),
            "REMOTE_STATUS_ERROR"
        );

        assert_eq!(
            RemoteError::Decode {
                url: "http://localhost:3000/users".to_string(),
                message: "expected array".to_string()
            }
            .error_code(),
            "REMOTE_DECODE_ERROR"
        );
    }

    #[test]
    fn test_top_level_delegates_error_code() {
        let err = RegistryError::Remote(RemoteError::Status {
            url: "http://localhost:3000/users".to_string(),
            status: 404,
        });
        assert_eq!(err.error_code(), "REMOTE_STATUS_ERROR");

        let err = RegistryError::Internal("boom".to_string());
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}

// =============================================================================
// Display Tests
// =============================================================================

mod display_tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = RemoteError::Status {
            url: "http://localhost:3000/users".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "Request to 'http://localhost:3000/users' returned status 500"
        );
    }

    #[test]
    fn test_top_level_message_is_inner_message() {
        let inner = ConfigError::Parse {
            message: "unexpected end".to_string(),
        };
        let expected = inner.to_string();
        let err: RegistryError = inner.into();

        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_internal_message() {
        let err = RegistryError::Internal("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Internal error: lock poisoned");
    }
}

// =============================================================================
// Conversion & Matching Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_source_is_exposed() {
        let err: RegistryError = RemoteError::Decode {
            url: "u".to_string(),
            message: "m".to_string(),
        }
        .into();

        assert!(err.source().is_some());
        assert!(RegistryError::Internal("x".to_string()).source().is_none());
    }

    #[test]
    fn test_match_on_status() {
        let err: RegistryError = RemoteError::Status {
            url: "u".to_string(),
            status: 502,
        }
        .into();

        match err {
            RegistryError::Remote(remote) => assert_eq!(remote.status(), Some(502)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_errors_convert_into_anyhow() {
        fn load() -> anyhow::Result<RegistryConfig> {
            Ok(RegistryConfig::from_yaml_str("remote: [")?)
        }

        let err = load().unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}

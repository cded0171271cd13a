//! Error types for museum-tours-core
//!
//! API failures keep their own type ([`ApiError`]) so callers can render
//! them uniformly; everything local (config, session file) is a [`CoreError`].

use museum_tours_types::{ApiError, StoreError};
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for museum-tours operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid API base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("No configuration directory available on this platform")]
    ConfigDirNotFound,

    // ===================
    // Session File Errors
    // ===================
    #[error("Failed to read session file: {path}")]
    SessionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session file: {path}")]
    SessionWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file {path}: {message}")]
    SessionParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // HTTP Errors
    // ===================
    #[error("Failed to build HTTP client")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::SessionWrite { .. } => StoreError::Write(error.to_string()),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err: CoreError = ApiError::network("connection refused").into();
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_session_write_maps_to_store_write() {
        let err = CoreError::SessionWrite {
            path: PathBuf::from("/tmp/session.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let store_err: StoreError = err.into();
        assert!(matches!(store_err, StoreError::Write(_)));
    }
}

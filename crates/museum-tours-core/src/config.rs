//! Configuration for the native client
//!
//! Layered: built-in defaults, then `config.toml`, then the
//! `MUSEUM_TOURS_API_URL` environment variable. CLI flags are applied last
//! by the binary.

use crate::error::CoreError;
use museum_tours_types::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "MUSEUM_TOURS_API_URL";

/// Settings shared by the CLI commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL, including the `/api/v1` prefix
    pub api_base_url: String,

    /// Where the bearer token is persisted (default: data dir)
    pub session_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_path: None,
        }
    }
}

impl Config {
    /// `<config dir>/museum-tours/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("museum-tours").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. The default path is optional: when it
    /// is missing, defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;

        debug!(path = %path.display(), api = %config.api_base_url, "Loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override the API base URL when `url` is set (env var or CLI flag)
    pub fn with_api_url(mut self, url: Option<String>) -> Result<Self, CoreError> {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), CoreError> {
        let url = self.api_base_url.as_str();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(CoreError::InvalidBaseUrl {
                url: url.to_string(),
            })
        }
    }

    /// Session file location: configured path, else `<data dir>/museum-tours/session.json`
    pub fn session_file(&self) -> Result<PathBuf, CoreError> {
        match &self.session_path {
            Some(path) => Ok(path.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join("museum-tours").join("session.json"))
                .ok_or(CoreError::ConfigDirNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.session_path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(r#"session_path = "/tmp/museum.json""#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.session_path, Some(PathBuf::from("/tmp/museum.json")));
    }

    #[test]
    fn test_api_url_override() {
        let config = Config::default()
            .with_api_url(Some("http://localhost:3333/api/v1".to_string()))
            .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3333/api/v1");

        let unchanged = Config::default().with_api_url(Some("  ".to_string())).unwrap();
        assert_eq!(unchanged.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = Config::default()
            .with_api_url(Some("ftp://museum".to_string()))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, r#"api_base_url = "http://127.0.0.1:9000/api/v1""#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/api/v1");
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = [").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_session_file_prefers_configured_path() {
        let config = Config {
            session_path: Some(PathBuf::from("/tmp/s.json")),
            ..Config::default()
        };
        assert_eq!(config.session_file().unwrap(), PathBuf::from("/tmp/s.json"));
    }
}

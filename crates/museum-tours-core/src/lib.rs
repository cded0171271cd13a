//! museum-tours-core - Core library for museum-tours
//!
//! Provides the native API client, the data source abstraction over remote
//! backend and fixtures, the session file and configuration loading.

pub mod client;
pub mod config;
pub mod error;
pub mod session_file;
pub mod source;

pub use client::ApiClient;
pub use config::{Config, API_URL_ENV};
pub use error::CoreError;
pub use session_file::FileSessionStore;
pub use source::DataSource;

// Shared types, re-exported so the binary needs a single dependency
pub use museum_tours_types as types;

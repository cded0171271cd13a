//! museum-tours-types - Shared data types for museum-tours
//!
//! This crate contains pure data structures and lookups without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - museum-tours-core (native API client, config)
//! - museum-tours-web (frontend WASM + fixture dev server)
//! - museum-tours (CLI)

pub mod api;
pub mod fetch;
pub mod fixtures;
pub mod models;
pub mod network;
pub mod session;

pub use api::{ApiError, Credentials, Endpoint, DEFAULT_API_BASE_URL};
pub use fetch::FetchState;
pub use fixtures::FixtureCatalog;
pub use models::{
    AuthToken, MapPosition, MuseumObject, ParseTourSizeError, Theme, Tour, TourSize, UserProfile,
};
pub use network::NetworkStatus;
pub use session::{
    complete_login, logout, probe_session, should_show_welcome, MemorySessionStore, SessionGeneration,
    SessionState, SessionStore, StoreError, ACCESS_TOKEN_KEY, HAS_VISITED_KEY,
};

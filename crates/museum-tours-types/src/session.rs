//! Session persistence and the logged-in flag
//!
//! Persisted client state is two keys: the opaque bearer token and the
//! first-visit flag. Components receive a [`SessionStore`] instead of
//! touching browser storage or files directly.

use crate::api::ApiError;
use crate::models::{AuthToken, UserProfile};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use thiserror::Error;
use tracing::warn;

/// Storage key of the bearer token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key of the first-visit flag
pub const HAS_VISITED_KEY: &str = "hasVisitedMuseumApp";

/// Session storage failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write session storage: {0}")]
    Write(String),
}

/// Persistent key/value store for session state
pub trait SessionStore {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str) -> Result<(), StoreError>;

    fn clear_token(&self) -> Result<(), StoreError>;

    fn has_visited(&self) -> bool;

    fn mark_visited(&self) -> Result<(), StoreError>;
}

/// In-memory store for tests and callers without persistent storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<&'static str, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(ACCESS_TOKEN_KEY, token.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.values.borrow().get(ACCESS_TOKEN_KEY).cloned()
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(ACCESS_TOKEN_KEY, token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(ACCESS_TOKEN_KEY);
        Ok(())
    }

    fn has_visited(&self) -> bool {
        self.values.borrow().contains_key(HAS_VISITED_KEY)
    }

    fn mark_visited(&self) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(HAS_VISITED_KEY, "true".to_string());
        Ok(())
    }
}

/// Who the header shows as signed in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn { email: String },
}

impl SessionState {
    pub fn email(&self) -> Option<&str> {
        match self {
            SessionState::LoggedIn { email } => Some(email),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }
}

/// Check the stored token against the whoami endpoint.
///
/// Without a token no request is made. Any failure, network errors
/// included, drops the token and reports `LoggedOut`.
///
/// The verdict only covers the token that was sent. If the stored token
/// changed while the request was in flight, a failure leaves the new token
/// in place and a success reports `LoggedOut` for the replaced token.
pub async fn probe_session<S, F, Fut>(store: &S, whoami: F) -> SessionState
where
    S: SessionStore + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<UserProfile, ApiError>>,
{
    let Some(token) = store.token() else {
        return SessionState::LoggedOut;
    };

    let verdict = whoami(token.clone()).await;
    let still_stored = store.token().as_deref() == Some(token.as_str());

    match verdict {
        Ok(profile) if still_stored => SessionState::LoggedIn {
            email: profile.email,
        },
        Ok(_) => SessionState::LoggedOut,
        Err(e) => {
            if still_stored {
                if let Err(store_err) = store.clear_token() {
                    warn!(error = %store_err, probe_error = %e, "Failed to clear rejected token");
                }
            }
            SessionState::LoggedOut
        }
    }
}

/// Orders session changes that may overlap with an in-flight probe.
///
/// Each probe, login and logout advances the generation. A probe result is
/// applied only while its ticket is still current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionGeneration(u64);

impl SessionGeneration {
    /// Advance and return the ticket of the new generation
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Forget the token. Purely local, no request is made.
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> Result<SessionState, StoreError> {
    store.clear_token()?;
    Ok(SessionState::LoggedOut)
}

/// Persist the token returned by a successful login
pub fn complete_login<S: SessionStore + ?Sized>(
    store: &S,
    token: &AuthToken,
) -> Result<(), StoreError> {
    store.set_token(&token.access_token)
}

/// The welcome modal is shown until the visitor dismisses it once
pub fn should_show_welcome<S: SessionStore + ?Sized>(store: &S) -> bool {
    !store.has_visited()
}

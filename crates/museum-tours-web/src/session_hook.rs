//! Signed-in visitor state shared across the app

use crate::api;
use crate::storage::LocalStorageSessionStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use museum_tours_types::{
    complete_login, logout, probe_session, AuthToken, SessionGeneration, SessionState, StoreError,
};

/// Session context, provided once at the app root
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    generation: StoredValue<SessionGeneration>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::LoggedOut),
            generation: StoredValue::new(SessionGeneration::default()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Validate the stored token against the backend, in the background.
    ///
    /// No token means no request. A rejected token is cleared. The result is
    /// dropped if a login, logout or newer probe happened meanwhile.
    pub fn probe(&self) {
        let state = self.state;
        let generation = self.generation;
        let ticket = self.advance();
        spawn_local(async move {
            let next = probe_session(&LocalStorageSessionStore, |token| async move {
                api::whoami(&token).await
            })
            .await;

            if !generation.with_value(|g| g.is_current(ticket)) {
                return;
            }
            if let SessionState::LoggedIn { email } = &next {
                leptos::logging::log!("Signed in as {}", email);
            }
            state.set(next);
        });
    }

    /// Store a fresh token and show the visitor as signed in
    pub fn sign_in(&self, email: String, token: &AuthToken) -> Result<(), StoreError> {
        complete_login(&LocalStorageSessionStore, token)?;
        self.advance();
        self.state.set(SessionState::LoggedIn { email });
        Ok(())
    }

    /// Forget the token. The displayed email is cleared even when storage
    /// refuses the write.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        let result = logout(&LocalStorageSessionStore).map(|_| ());
        self.advance();
        self.state.set(SessionState::LoggedOut);
        result
    }

    fn advance(&self) -> u64 {
        self.generation
            .try_update_value(|g| g.advance())
            .unwrap_or_default()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Session provider component (wraps app root)
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    children()
}

/// Hook to access session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

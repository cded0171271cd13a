//! Browser localStorage session store

use museum_tours_types::{SessionStore, StoreError, ACCESS_TOKEN_KEY, HAS_VISITED_KEY};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`SessionStore`] over `window.localStorage`
///
/// Reads degrade to "absent" when storage is unavailable (private mode,
/// disabled storage); writes report the failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    fn storage(&self) -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;

        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(describe(e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(describe(e)))
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.set(ACCESS_TOKEN_KEY, token)
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(ACCESS_TOKEN_KEY)
            .map_err(|e| StoreError::Write(describe(e)))
    }

    fn has_visited(&self) -> bool {
        self.get(HAS_VISITED_KEY).is_some()
    }

    fn mark_visited(&self) -> Result<(), StoreError> {
        self.set(HAS_VISITED_KEY, "true")
    }
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

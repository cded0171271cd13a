//! Session persistence for the CLI
//!
//! Stores the same two keys as the browser (`access_token`,
//! `hasVisitedMuseumApp`) in a small JSON object on disk.

use crate::error::CoreError;
use museum_tours_types::{SessionStore, StoreError, ACCESS_TOKEN_KEY, HAS_VISITED_KEY};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// JSON-file backed [`SessionStore`]
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current entries. A missing file is an empty session.
    fn load(&self) -> Result<Entries, CoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(CoreError::SessionRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| CoreError::SessionParse {
            path: self.path.clone(),
            message: source.to_string(),
            source,
        })
    }

    fn save(&self, entries: &Entries) -> Result<(), CoreError> {
        let write_err = |source| CoreError::SessionWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        // Serializing a string map cannot fail
        let content = serde_json::to_string_pretty(entries).unwrap_or_default();
        std::fs::write(&self.path, content).map_err(write_err)?;

        debug!(path = %self.path.display(), keys = entries.len(), "Session file saved");
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Entries)) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking logout/login
        let mut entries = self.load().unwrap_or_else(|e| {
            warn!(error = %e, "Discarding unreadable session file");
            Entries::new()
        });
        f(&mut entries);
        self.save(&entries).map_err(StoreError::from)
    }

    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                warn!(error = %e, "Failed to read session file");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(ACCESS_TOKEN_KEY.to_string(), token.to_string());
        })
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.remove(ACCESS_TOKEN_KEY);
        })
    }

    fn has_visited(&self) -> bool {
        self.get(HAS_VISITED_KEY).is_some()
    }

    fn mark_visited(&self) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(HAS_VISITED_KEY.to_string(), "true".to_string());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_tours_types::logout;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert!(store.token().is_none());
        assert!(!store.has_visited());
    }

    #[test]
    fn test_token_roundtrip_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        store.set_token("abc").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc"));

        let reopened = FileSessionStore::new(store.path());
        assert_eq!(reopened.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_logout_keeps_visited_flag() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.mark_visited().unwrap();
        store.set_token("abc").unwrap();

        logout(&store).unwrap();

        assert!(store.token().is_none());
        assert!(store.has_visited());
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.token().is_none());

        store.set_token("fresh").unwrap();
        assert_eq!(store.token().as_deref(), Some("fresh"));
    }
}

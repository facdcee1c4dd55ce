//! The library aggregate root.
//!
//! Holds every remote definition and key-set layout plus the currently
//! active selections. Invariant: the active ids are either `None` or
//! reference an existing entity; deleting an entity clears a dangling
//! active reference in the same operation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::layout::KeySetLayout;
use crate::remote::RemoteDefinition;

/// All remotes, all key-set layouts, and the active selections.
///
/// Persisted wholesale on every mutation (see `irblast-store`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub remotes: Vec<RemoteDefinition>,
    pub key_sets: Vec<KeySetLayout>,
    pub active_remote: Option<String>,
    pub active_key_set: Option<String>,
}

impl Library {
    /// Look up a remote by id.
    pub fn remote(&self, id: &str) -> Option<&RemoteDefinition> {
        self.remotes.iter().find(|r| r.id == id)
    }

    /// Look up a key-set layout by id.
    pub fn key_set(&self, id: &str) -> Option<&KeySetLayout> {
        self.key_sets.iter().find(|k| k.id == id)
    }

    /// The active remote, if one is selected.
    pub fn active_remote_definition(&self) -> Option<&RemoteDefinition> {
        self.active_remote.as_deref().and_then(|id| self.remote(id))
    }

    /// Add a remote, or replace the existing one with the same id.
    pub fn upsert_remote(&mut self, remote: RemoteDefinition) {
        match self.remotes.iter_mut().find(|r| r.id == remote.id) {
            Some(existing) => *existing = remote,
            None => self.remotes.push(remote),
        }
    }

    /// Delete a remote by id. Returns `false` if no such remote existed.
    ///
    /// Clears `active_remote` when it referenced the deleted id.
    pub fn delete_remote(&mut self, id: &str) -> bool {
        let before = self.remotes.len();
        self.remotes.retain(|r| r.id != id);
        let deleted = self.remotes.len() != before;
        if deleted && self.active_remote.as_deref() == Some(id) {
            self.active_remote = None;
        }
        deleted
    }

    /// Delete a key-set layout by id. Returns `false` if it did not exist.
    ///
    /// Clears `active_key_set` when it referenced the deleted id.
    pub fn delete_key_set(&mut self, id: &str) -> bool {
        let before = self.key_sets.len();
        self.key_sets.retain(|k| k.id != id);
        let deleted = self.key_sets.len() != before;
        if deleted && self.active_key_set.as_deref() == Some(id) {
            self.active_key_set = None;
        }
        deleted
    }

    /// Select the active remote. `None` clears the selection.
    pub fn set_active_remote(&mut self, id: Option<String>) -> Result<(), CoreError> {
        if let Some(ref id) = id {
            if self.remote(id).is_none() {
                return Err(CoreError::NotFound {
                    entity: "remote",
                    id: id.clone(),
                });
            }
        }
        self.active_remote = id;
        Ok(())
    }

    /// Select the active key set. `None` clears the selection.
    pub fn set_active_key_set(&mut self, id: Option<String>) -> Result<(), CoreError> {
        if let Some(ref id) = id {
            if self.key_set(id).is_none() {
                return Err(CoreError::NotFound {
                    entity: "key set",
                    id: id.clone(),
                });
            }
        }
        self.active_key_set = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::LogicalKey;
    use crate::remote::KeyDefinition;
    use crate::signal::SignalEncoding;

    fn make_remote(id: &str) -> RemoteDefinition {
        RemoteDefinition {
            id: id.to_string(),
            manufacturer: "Acme".to_string(),
            model: "TV-1".to_string(),
            preferred_key_set: None,
            keys: vec![KeyDefinition::taught(
                LogicalKey::PowerToggle,
                SignalEncoding::nec("0x01,0x02"),
            )],
        }
    }

    #[test]
    fn upsert_appends_then_replaces() {
        let mut library = Library::default();
        library.upsert_remote(make_remote("a"));
        library.upsert_remote(make_remote("b"));
        assert_eq!(library.remotes.len(), 2);

        let mut updated = make_remote("a");
        updated.model = "TV-2".to_string();
        library.upsert_remote(updated);
        assert_eq!(library.remotes.len(), 2);
        assert_eq!(library.remote("a").unwrap().model, "TV-2");
    }

    #[test]
    fn deleting_active_remote_clears_selection() {
        let mut library = Library::default();
        library.upsert_remote(make_remote("a"));
        library.set_active_remote(Some("a".to_string())).unwrap();

        assert!(library.delete_remote("a"));
        assert_eq!(library.active_remote, None);
    }

    #[test]
    fn deleting_inactive_remote_keeps_selection() {
        let mut library = Library::default();
        library.upsert_remote(make_remote("a"));
        library.upsert_remote(make_remote("b"));
        library.set_active_remote(Some("a".to_string())).unwrap();

        assert!(library.delete_remote("b"));
        assert_eq!(library.active_remote.as_deref(), Some("a"));
    }

    #[test]
    fn delete_missing_remote_returns_false() {
        let mut library = Library::default();
        assert!(!library.delete_remote("ghost"));
    }

    #[test]
    fn set_active_remote_rejects_unknown_id() {
        let mut library = Library::default();
        let err = library.set_active_remote(Some("ghost".to_string()));
        assert!(matches!(err, Err(CoreError::NotFound { .. })));
        assert_eq!(library.active_remote, None);
    }

    #[test]
    fn set_active_remote_accepts_none() {
        let mut library = Library::default();
        library.upsert_remote(make_remote("a"));
        library.set_active_remote(Some("a".to_string())).unwrap();
        library.set_active_remote(None).unwrap();
        assert_eq!(library.active_remote, None);
    }

    #[test]
    fn deleting_active_key_set_clears_selection() {
        let mut library = Library::default();
        library.key_sets.push(KeySetLayout {
            id: "grid".to_string(),
            placements: Vec::new(),
        });
        library.set_active_key_set(Some("grid".to_string())).unwrap();

        assert!(library.delete_key_set("grid"));
        assert_eq!(library.active_key_set, None);
    }
}

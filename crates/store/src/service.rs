//! Library service: in-memory document plus persist-on-mutation.

use irblast_core::defaults::seed_library;
use irblast_core::{CoreError, Library, RemoteDefinition};
use tokio::sync::RwLock;

use crate::tiered::TieredStore;
use crate::StoreError;

/// Errors from library mutations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the live library document and persists it wholesale after every
/// mutation.
///
/// Reads take a cheap clone via [`snapshot`](Self::snapshot) so callers
/// never hold the lock across transport I/O.
pub struct LibraryService {
    library: RwLock<Library>,
    store: TieredStore,
}

impl LibraryService {
    /// Open the service, loading the persisted document or seeding defaults
    /// on first run.
    ///
    /// A failed seed persist is logged but does not prevent startup; the
    /// system stays usable with the in-memory seed.
    pub async fn open(store: TieredStore) -> Self {
        let library = match store.load().await {
            Some(library) => library,
            None => {
                let seeded = seed_library();
                tracing::info!(
                    remotes = seeded.remotes.len(),
                    key_sets = seeded.key_sets.len(),
                    "No library document found, seeding defaults",
                );
                if let Err(e) = store.save(&seeded).await {
                    tracing::warn!(error = %e, "Failed to persist seeded library");
                }
                seeded
            }
        };
        Self {
            library: RwLock::new(library),
            store,
        }
    }

    /// Clone of the current document.
    pub async fn snapshot(&self) -> Library {
        self.library.read().await.clone()
    }

    /// Add or replace a remote, then persist.
    pub async fn upsert_remote(&self, remote: RemoteDefinition) -> Result<(), ServiceError> {
        let mut library = self.library.write().await;
        library.upsert_remote(remote);
        self.store.save(&library).await?;
        Ok(())
    }

    /// Delete a remote, clearing a dangling active selection, then persist.
    ///
    /// Returns `false` when no such remote existed (nothing is persisted).
    pub async fn delete_remote(&self, id: &str) -> Result<bool, ServiceError> {
        let mut library = self.library.write().await;
        if !library.delete_remote(id) {
            return Ok(false);
        }
        self.store.save(&library).await?;
        Ok(true)
    }

    /// Delete a key-set layout, clearing a dangling active selection.
    pub async fn delete_key_set(&self, id: &str) -> Result<bool, ServiceError> {
        let mut library = self.library.write().await;
        if !library.delete_key_set(id) {
            return Ok(false);
        }
        self.store.save(&library).await?;
        Ok(true)
    }

    /// Select the active remote (`None` clears it), then persist.
    pub async fn set_active_remote(&self, id: Option<String>) -> Result<(), ServiceError> {
        let mut library = self.library.write().await;
        library.set_active_remote(id)?;
        self.store.save(&library).await?;
        Ok(())
    }

    /// Select the active key set (`None` clears it), then persist.
    pub async fn set_active_key_set(&self, id: Option<String>) -> Result<(), ServiceError> {
        let mut library = self.library.write().await;
        library.set_active_key_set(id)?;
        self.store.save(&library).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irblast_core::defaults::TCL_ROKU_REMOTE_ID;
    use irblast_core::remote::KeyDefinition;
    use irblast_core::{LogicalKey, SignalEncoding};

    use crate::backend::{FileBackend, MemoryBackend};

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

    #[tokio::test]
    async fn seeds_on_first_run_and_persists_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ir-library.json");

        let service = LibraryService::open(TieredStore::single(FileBackend::new(&path))).await;
        let library = service.snapshot().await;
        assert_eq!(library.active_remote.as_deref(), Some(TCL_ROKU_REMOTE_ID));

        // A second open must read the persisted seed, not reseed.
        let reopened = LibraryService::open(TieredStore::single(FileBackend::new(&path))).await;
        assert_eq!(reopened.snapshot().await, library);
    }

    #[tokio::test]
    async fn mutations_are_persisted_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ir-library.json");

        let service = LibraryService::open(TieredStore::single(FileBackend::new(&path))).await;
        service.upsert_remote(make_remote("acme.v1")).await.unwrap();

        let reopened = LibraryService::open(TieredStore::single(FileBackend::new(&path))).await;
        assert!(reopened.snapshot().await.remote("acme.v1").is_some());
    }

    #[tokio::test]
    async fn deleting_active_remote_clears_selection() {
        let service = LibraryService::open(TieredStore::single(MemoryBackend::new())).await;
        assert!(service.delete_remote(TCL_ROKU_REMOTE_ID).await.unwrap());

        let library = service.snapshot().await;
        assert_eq!(library.active_remote, None);
        assert!(library.remotes.is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_remote_is_a_noop() {
        let service = LibraryService::open(TieredStore::single(MemoryBackend::new())).await;
        assert!(!service.delete_remote("ghost").await.unwrap());
    }

    #[tokio::test]
    async fn set_active_remote_rejects_unknown_id() {
        let service = LibraryService::open(TieredStore::single(MemoryBackend::new())).await;
        let err = service
            .set_active_remote(Some("ghost".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Core(CoreError::NotFound { .. })));
    }
}

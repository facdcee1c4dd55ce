//! Ordered multi-tier storage.

use irblast_core::Library;

use crate::backend::LibraryBackend;
use crate::StoreError;

/// An ordered list of storage tiers tried in sequence.
///
/// Tier order is the contract: earlier tiers are preferred, later tiers are
/// fallbacks. A tier failure is logged and the next tier is tried.
pub struct TieredStore {
    backends: Vec<Box<dyn LibraryBackend>>,
}

impl TieredStore {
    pub fn new(backends: Vec<Box<dyn LibraryBackend>>) -> Self {
        Self { backends }
    }

    /// Single-tier convenience constructor.
    pub fn single(backend: impl LibraryBackend + 'static) -> Self {
        Self::new(vec![Box::new(backend)])
    }

    /// Load the library from the first tier that holds a document.
    ///
    /// Tiers that error (unreadable, corrupt) are skipped with a warning;
    /// `None` means no tier has a document yet.
    pub async fn load(&self) -> Option<Library> {
        for backend in &self.backends {
            match backend.load().await {
                Ok(Some(library)) => {
                    tracing::debug!(tier = backend.describe(), "Loaded library document");
                    return Some(library);
                }
                Ok(None) => {
                    tracing::debug!(tier = backend.describe(), "Tier holds no document");
                }
                Err(e) => {
                    tracing::warn!(
                        tier = backend.describe(),
                        error = %e,
                        "Failed to load library from tier, trying next",
                    );
                }
            }
        }
        None
    }

    /// Write the library to the first tier that accepts it.
    ///
    /// A failed preferred tier is logged and skipped. Errors only when
    /// every tier rejects the write.
    pub async fn save(&self, library: &Library) -> Result<(), StoreError> {
        for (index, backend) in self.backends.iter().enumerate() {
            match backend.save(library).await {
                Ok(()) => {
                    if index > 0 {
                        tracing::warn!(
                            tier = backend.describe(),
                            skipped = index,
                            "Library saved to fallback tier",
                        );
                    } else {
                        tracing::debug!(tier = backend.describe(), "Library saved");
                    }
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        tier = backend.describe(),
                        error = %e,
                        "Failed to save library to tier, trying next",
                    );
                }
            }
        }
        Err(StoreError::Exhausted {
            tiers: self.backends.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use irblast_core::defaults::seed_library;

    use crate::backend::MemoryBackend;

    /// Tier that rejects every operation.
    struct FailingBackend;

    #[async_trait]
    impl LibraryBackend for FailingBackend {
        fn describe(&self) -> &str {
            "failing"
        }

        async fn load(&self) -> Result<Option<Library>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("tier offline")))
        }

        async fn save(&self, _library: &Library) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("tier offline")))
        }
    }

    #[tokio::test]
    async fn save_falls_back_past_failing_tier() {
        let fallback = MemoryBackend::new();
        let library = seed_library();

        let store = TieredStore::new(vec![Box::new(FailingBackend), Box::new(fallback)]);
        store.save(&library).await.unwrap();

        assert_eq!(store.load().await.unwrap(), library);
    }

    #[tokio::test]
    async fn load_skips_failing_tier() {
        let primary = MemoryBackend::new();
        primary.save(&seed_library()).await.unwrap();

        let store = TieredStore::new(vec![Box::new(FailingBackend), Box::new(primary)]);
        assert!(store.load().await.is_some());
    }

    #[tokio::test]
    async fn load_prefers_earlier_tier() {
        let first = MemoryBackend::new();
        let mut marked = seed_library();
        marked.active_remote = None;
        first.save(&marked).await.unwrap();

        let second = MemoryBackend::new();
        second.save(&seed_library()).await.unwrap();

        let store = TieredStore::new(vec![Box::new(first), Box::new(second)]);
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.active_remote, None);
    }

    #[tokio::test]
    async fn save_errors_when_all_tiers_fail() {
        let store = TieredStore::new(vec![Box::new(FailingBackend), Box::new(FailingBackend)]);
        let err = store.save(&seed_library()).await.unwrap_err();
        assert!(matches!(err, StoreError::Exhausted { tiers: 2 }));
    }

    #[tokio::test]
    async fn empty_store_loads_nothing() {
        let store = TieredStore::new(vec![Box::new(MemoryBackend::new())]);
        assert!(store.load().await.is_none());
    }
}

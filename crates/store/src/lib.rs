//! Persistence for the IR library document.
//!
//! The library is a single JSON document written wholesale on every
//! mutation. Storage is tiered: an ordered list of backends is tried in
//! sequence, so the fallback order is an explicit contract rather than
//! incidental control flow. A failed tier is logged and skipped, never
//! thrown across the mutation.

pub mod backend;
pub mod service;
pub mod tiered;

pub use backend::{FileBackend, LibraryBackend, MemoryBackend};
pub use service::{LibraryService, ServiceError};
pub use tiered::TieredStore;

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Library document is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("No storage tier accepted the write ({tiers} tried)")]
    Exhausted { tiers: usize },
}

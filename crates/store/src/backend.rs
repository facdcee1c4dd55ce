//! Storage backends for the library document.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use irblast_core::Library;

use crate::StoreError;

/// One storage tier for the library document.
///
/// Backends report failure through `Result` instead of panicking so the
/// tiered store can fall through to the next tier.
#[async_trait]
pub trait LibraryBackend: Send + Sync {
    /// Human-readable tier name for logging.
    fn describe(&self) -> &str;

    /// Load the document. `Ok(None)` means the tier is healthy but holds
    /// no document yet (first run).
    async fn load(&self) -> Result<Option<Library>, StoreError>;

    /// Write the whole document.
    async fn save(&self, library: &Library) -> Result<(), StoreError>;
}

/// JSON file on the local filesystem, the preferred tier.
///
/// Writes go through a `.tmp` sibling followed by a rename so a crashed
/// write never leaves a truncated document behind.
pub struct FileBackend {
    path: PathBuf,
    description: String,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let description = format!("file:{}", path.display());
        Self { path, description }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl LibraryBackend for FileBackend {
    fn describe(&self) -> &str {
        &self.description
    }

    async fn load(&self) -> Result<Option<Library>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let library = serde_json::from_str(&contents)?;
        Ok(Some(library))
    }

    async fn save(&self, library: &Library) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(library)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, contents.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// In-process tier: last resort in production, primary double in tests.
#[derive(Default)]
pub struct MemoryBackend {
    document: Mutex<Option<Library>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LibraryBackend for MemoryBackend {
    fn describe(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> Result<Option<Library>, StoreError> {
        let guard = self.document.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    async fn save(&self, library: &Library) -> Result<(), StoreError> {
        let mut guard = self.document.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(library.clone());
        Ok(())
    }
}

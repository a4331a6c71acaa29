//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── 0f3a9c21bd44.json
//! ├── 5d1e07ac2b98.json
//! └── ...
//! ```
//!
//! Flat namespace, one JSON file per code. Writes go through a temp file
//! and a rename so a crashed write never leaves a half-written record
//! behind.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::PageRecord;
use crate::storage::PageStore;

/// Flat-file storage backend.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the storage root if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// File path for a code.
    fn path_for(&self, code: &str) -> PathBuf {
        self.root.join(format!("{code}.json"))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, code: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(code);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl PageStore for LocalStore {
    async fn save(&self, code: &str, record: &PageRecord) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(record)?;
        self.write_bytes(code, &bytes).await
    }

    async fn load(&self, code: &str) -> Option<PageRecord> {
        let bytes = tokio::fs::read(self.path_for(code)).await.ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

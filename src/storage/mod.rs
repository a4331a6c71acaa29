// src/storage/mod.rs

//! Storage abstractions for mirrored pages.
//!
//! One record per code in a single flat namespace. There is no eviction,
//! size limit, or TTL; external housekeeping owns deletion. Saving an
//! existing code overwrites the older record silently.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::PageRecord;

// Re-export for convenience
pub use local::LocalStore;

/// Trait for page storage backends.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Persist a record under its code. I/O failures are errors; an
    /// existing record for the same code is replaced.
    async fn save(&self, code: &str, record: &PageRecord) -> Result<()>;

    /// Load the record for a code.
    ///
    /// `None` covers both "no such record" and "record unreadable";
    /// callers must not distinguish the two.
    async fn load(&self, code: &str) -> Option<PageRecord>;
}

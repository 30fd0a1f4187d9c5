//! Durable single-slot persistence for the gallery snapshot.
//!
//! The store holds exactly one JSON-encoded snapshot under a well-known
//! key. A corrupt payload is reported as absent, never as an error; the
//! caller reseeds rather than crashes.

pub mod file;
pub mod memory;

use crate::record::Snapshot;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cache encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Returns the stored snapshot, or `None` when absent or unreadable.
    async fn load(&self) -> Result<Option<Snapshot>, CacheError>;

    /// Overwrites the slot entirely; no merge at this layer.
    async fn save(&self, snapshot: &Snapshot) -> Result<(), CacheError>;

    /// Removes the slot. Idempotent.
    async fn clear(&self) -> Result<(), CacheError>;
}

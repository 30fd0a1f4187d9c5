//! Write-back capability for gallery mutations.
//!
//! The published-CSV endpoint is read-only, so the default implementation
//! does nothing; the trait keeps the seam open for a real sheet API
//! client to be substituted without touching the service.

use crate::record::ImageRecord;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait RemoteWriter: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Pushes a created or edited record to the remote source.
    async fn push(&self, record: &ImageRecord) -> anyhow::Result<()>;

    /// Removes a record from the remote source.
    async fn remove(&self, id: &str) -> anyhow::Result<()>;
}

pub struct NoopWriter;

#[async_trait]
impl RemoteWriter for NoopWriter {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn push(&self, record: &ImageRecord) -> anyhow::Result<()> {
        debug!("no write-back channel, dropping update for {}", record.id);
        Ok(())
    }

    async fn remove(&self, id: &str) -> anyhow::Result<()> {
        debug!("no write-back channel, dropping delete for {}", id);
        Ok(())
    }
}

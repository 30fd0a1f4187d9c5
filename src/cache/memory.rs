//! In-process cache slot, used by tests and as a fake boundary.

use super::{CacheError, CacheStore};
use crate::record::Snapshot;
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::warn;

/// Holds the serialized blob rather than decoded records, so corrupt
/// payloads behave the same way they do on disk.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with a raw payload, bypassing encoding.
    pub fn set_raw(&self, payload: impl Into<String>) {
        *self.slot.lock().unwrap() = Some(payload.into());
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<Option<Snapshot>, CacheError> {
        let guard = self.slot.lock().unwrap();
        let Some(data) = guard.as_ref() else {
            return Ok(None);
        };
        match serde_json::from_str(data) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!("discarding corrupt in-memory cache: {}", e);
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), CacheError> {
        let data = serde_json::to_string(snapshot)?;
        *self.slot.lock().unwrap() = Some(data);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ImageRecord;

    #[tokio::test]
    async fn round_trip_preserves_order() {
        let store = MemoryStore::new();
        let snapshot = vec![
            ImageRecord::new("b", "https://x/b.jpg", "B"),
            ImageRecord::new("a", "https://x/a.jpg", "A"),
        ];
        store.save(&snapshot).await.unwrap();
        assert_eq!(store.load().await.unwrap().unwrap(), snapshot);
    }

    #[tokio::test]
    async fn corrupt_payload_recovered_as_absent() {
        let store = MemoryStore::new();
        store.set_raw("][ definitely not json");
        assert!(store.load().await.unwrap().is_none());
    }
}

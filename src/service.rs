//! The gallery data service: single source of truth for the image list.
//!
//! Owns the canonical snapshot and the source configuration, consults the
//! remote source, and mirrors every mutation into the cache slot. The
//! presentation layer never mutates records directly; it requests
//! mutations here and reflects the confirmed state.

use crate::cache::CacheStore;
use crate::config::{normalize_sheet_url, Configuration, SourceMode};
use crate::demo;
use crate::error::{GalleryError, GalleryResult};
use crate::record::{ImageRecord, Snapshot, DEFAULT_LABEL};
use crate::remote::writer::RemoteWriter;
use crate::remote::RemoteSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Simulated round trip when serving demo data, for parity with a real
/// fetch.
const DEMO_LATENCY: Duration = Duration::from_millis(300);

pub struct GalleryService {
    cache: Arc<dyn CacheStore>,
    remote: RemoteSource,
    writer: Arc<dyn RemoteWriter>,
    // Serializes every read-modify-write so back-to-back edits both land.
    state: Mutex<ServiceState>,
    demo_latency: Duration,
}

struct ServiceState {
    snapshot: Snapshot,
    config: Configuration,
}

impl GalleryService {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        remote: RemoteSource,
        writer: Arc<dyn RemoteWriter>,
    ) -> Self {
        Self {
            cache,
            remote,
            writer,
            state: Mutex::new(ServiceState {
                snapshot: Vec::new(),
                config: Configuration::default(),
            }),
            demo_latency: DEMO_LATENCY,
        }
    }

    /// Starts in the given configuration instead of demo mode.
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.state = Mutex::new(ServiceState {
            snapshot: Vec::new(),
            config,
        });
        self
    }

    pub fn with_demo_latency(mut self, latency: Duration) -> Self {
        self.demo_latency = latency;
        self
    }

    /// Adopts the cached snapshot, or seeds and persists the demo set.
    /// Idempotent: a second call without intervening mutation returns the
    /// same snapshot and does not re-seed.
    pub async fn initialize(&self) -> GalleryResult<Snapshot> {
        let mut state = self.state.lock().await;
        self.initialize_locked(&mut state).await
    }

    async fn initialize_locked(&self, state: &mut ServiceState) -> GalleryResult<Snapshot> {
        if let Some(snapshot) = self.cache.load().await? {
            state.snapshot = snapshot.clone();
            return Ok(snapshot);
        }
        let snapshot = demo::demo_snapshot();
        self.cache.save(&snapshot).await?;
        info!(
            "seeded {} cache with the {}-record demo set",
            self.cache.name(),
            snapshot.len()
        );
        state.snapshot = snapshot.clone();
        Ok(snapshot)
    }

    /// Returns a snapshot from the configured source.
    ///
    /// Remote mode treats the fetched list as authoritative: it replaces
    /// the current snapshot and the cache slot. Any remote failure falls
    /// back to cache/demo; this operation never surfaces a hard failure.
    pub async fn fetch_images(&self) -> GalleryResult<Snapshot> {
        let mut state = self.state.lock().await;
        let endpoint = match &state.config.mode {
            SourceMode::Demo => {
                tokio::time::sleep(self.demo_latency).await;
                return self.initialize_locked(&mut state).await;
            }
            SourceMode::Remote(url) => url.clone(),
        };

        match self.remote.fetch(&endpoint).await {
            Ok(snapshot) => {
                self.cache.save(&snapshot).await?;
                state.snapshot = snapshot.clone();
                info!("replaced snapshot with {} remote records", snapshot.len());
                Ok(snapshot)
            }
            Err(e) => {
                warn!("remote fetch degraded, falling back to cache: {}", e);
                self.initialize_locked(&mut state).await
            }
        }
    }

    pub async fn update_label(&self, id: &str, label: &str) -> GalleryResult<()> {
        let record = self
            .update_record(id, |r| r.label = label.to_string())
            .await?;
        self.push_remote(&record).await;
        Ok(())
    }

    pub async fn update_comments(&self, id: &str, comments: &str) -> GalleryResult<()> {
        let record = self
            .update_record(id, |r| r.comments = comments.to_string())
            .await?;
        self.push_remote(&record).await;
        Ok(())
    }

    /// Read-modify-write against the persisted snapshot, so the edit
    /// lands even if the in-memory copy is stale.
    async fn update_record(
        &self,
        id: &str,
        apply: impl FnOnce(&mut ImageRecord),
    ) -> GalleryResult<ImageRecord> {
        let mut state = self.state.lock().await;
        let mut snapshot = match self.cache.load().await? {
            Some(snapshot) => snapshot,
            None => state.snapshot.clone(),
        };
        let record = snapshot
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;
        apply(record);
        let updated = record.clone();
        self.cache.save(&snapshot).await?;
        state.snapshot = snapshot;
        Ok(updated)
    }

    /// Appends a new record with a fresh unique id and returns it.
    pub async fn add_image(&self, url: &str, label: &str) -> GalleryResult<ImageRecord> {
        let record = {
            let mut state = self.state.lock().await;
            let mut snapshot = match self.cache.load().await? {
                Some(snapshot) => snapshot,
                None => state.snapshot.clone(),
            };
            let mut record = ImageRecord::new(fresh_id(&snapshot), url, label);
            if record.label.is_empty() {
                record.label = DEFAULT_LABEL.to_string();
            }
            snapshot.push(record.clone());
            self.cache.save(&snapshot).await?;
            state.snapshot = snapshot;
            record
        };
        self.push_remote(&record).await;
        Ok(record)
    }

    /// Removes the record if present; deleting a missing id is a no-op.
    pub async fn delete_image(&self, id: &str) -> GalleryResult<()> {
        {
            let mut state = self.state.lock().await;
            let mut snapshot = match self.cache.load().await? {
                Some(snapshot) => snapshot,
                None => state.snapshot.clone(),
            };
            snapshot.retain(|r| r.id != id);
            self.cache.save(&snapshot).await?;
            state.snapshot = snapshot;
        }
        if let Err(e) = self.writer.remove(id).await {
            warn!("remote delete via {} failed for {}: {}", self.writer.name(), id, e);
        }
        Ok(())
    }

    /// Normalizes the pasted spreadsheet URL and switches to remote mode.
    /// Does not fetch; callers follow up with [`fetch_images`].
    ///
    /// [`fetch_images`]: GalleryService::fetch_images
    pub async fn configure_remote(&self, text: &str) -> GalleryResult<()> {
        let endpoint = normalize_sheet_url(text)?;
        let mut state = self.state.lock().await;
        info!("remote source configured: {}", endpoint);
        state.config.mode = SourceMode::Remote(endpoint);
        Ok(())
    }

    /// Returns to demo mode and clears the cache slot, so the next fetch
    /// reseeds the fixture instead of resurrecting stale edits.
    pub async fn reset_to_demo(&self) -> GalleryResult<()> {
        let mut state = self.state.lock().await;
        state.config = Configuration::default();
        state.snapshot.clear();
        self.cache.clear().await?;
        info!("reset to demo mode");
        Ok(())
    }

    /// The current in-memory snapshot (empty before the first load).
    pub async fn snapshot(&self) -> Snapshot {
        self.state.lock().await.snapshot.clone()
    }

    pub async fn configuration(&self) -> Configuration {
        self.state.lock().await.config.clone()
    }

    // The write-back result is logged, never propagated: the stub cannot
    // deliver remote durability and the operation must not imply it.
    async fn push_remote(&self, record: &ImageRecord) {
        if let Err(e) = self.writer.push(record).await {
            warn!(
                "remote write-back via {} failed for {}: {}",
                self.writer.name(),
                record.id,
                e
            );
        }
    }
}

fn fresh_id(snapshot: &Snapshot) -> String {
    let id = format!("img-{}", chrono::Utc::now().timestamp_millis());
    if snapshot.iter().any(|r| r.id == id) {
        return format!("img-{}", uuid::Uuid::new_v4());
    }
    id
}

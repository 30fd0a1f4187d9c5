//! File-backed cache: one JSON blob at the well-known gallery key.

use super::{CacheError, CacheStore};
use crate::record::Snapshot;
use async_trait::async_trait;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Fixed storage key; the blob lives at `<dir>/<CACHE_KEY>.json`.
pub const CACHE_KEY: &str = "gallery_images";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store rooted at an explicit directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{CACHE_KEY}.json")),
        }
    }

    /// Store rooted at the platform cache directory.
    pub async fn open_default() -> Result<Self, CacheError> {
        let proj_dirs = ProjectDirs::from("com", "galleria", "galleria").ok_or_else(|| {
            CacheError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no home directory",
            ))
        })?;
        let dir = proj_dirs.cache_dir().to_path_buf();
        fs::create_dir_all(&dir).await?;
        Ok(Self::new(dir))
    }
}

#[async_trait]
impl CacheStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<Option<Snapshot>, CacheError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&data) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!("discarding corrupt cache at {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), CacheError> {
        let data = serde_json::to_string(snapshot)?;
        // Write-then-rename so an interrupted save never leaves a torn slot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!("persisted {} records to {}", snapshot.len(), self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ImageRecord;
    use tempfile::tempdir;

    #[tokio::test]
    async fn save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let snapshot = vec![
            ImageRecord::new("1", "https://x/a.jpg", "Foo"),
            ImageRecord::new("2", "https://x/b.jpg", "Bar"),
        ];
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn missing_slot_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_slot_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        tokio::fs::write(dir.path().join("gallery_images.json"), "{not json")
            .await
            .unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store
            .save(&vec![ImageRecord::new("1", "https://x/a.jpg", "Foo")])
            .await
            .unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}

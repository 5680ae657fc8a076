//! File-backed storage adapter
//!
//! Keeps the collections in memory like [`super::InMemoryAdapter`] and
//! mirrors them to a JSON snapshot after every successful write. The
//! snapshot is loaded by [`DataStore::connect`]. A write whose snapshot
//! cannot be saved is not applied.
//!
//! Snapshot layout:
//! ```json
//! { "authors": [...], "games": [...], "reviews": [...] }
//! ```
//!
//! [`DataStore::connect`]: super::DataStore::connect

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{CollectionStore, Collections, Persistence};
use crate::error::ApiResult;

/// Persistence hook writing the data set to a JSON file
#[derive(Debug)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn parent(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

#[async_trait]
impl Persistence for JsonSnapshot {
    const BACKEND: &'static str = "file";
    const STAGED: bool = true;

    async fn load(&self) -> ApiResult<Option<Collections>> {
        let loaded = match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice::<Collections>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = self.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tracing::info!(
                    path = %self.path.display(),
                    "No snapshot found, starting with empty collections"
                );
                Collections::default()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %self.path.display(),
            authors = loaded.authors.len(),
            games = loaded.games.len(),
            reviews = loaded.reviews.len(),
            "Snapshot loaded"
        );
        Ok(Some(loaded))
    }

    /// Write the snapshot atomically: temp file first, then rename over the target
    async fn save(&self, data: &Collections) -> ApiResult<()> {
        let bytes = serde_json::to_vec_pretty(data)?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        tracing::trace!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }

    /// The snapshot's directory must still exist for the next save to work
    async fn check(&self) -> ApiResult<()> {
        let dir = self.parent().unwrap_or_else(|| Path::new("."));
        tokio::fs::metadata(dir).await?;
        Ok(())
    }
}

/// Storage adapter persisting to a JSON file
pub type FileAdapter = CollectionStore<JsonSnapshot>;

impl FileAdapter {
    /// Create an adapter for the snapshot at `path`; nothing is read until `connect`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_persistence(JsonSnapshot::new(path), Collections::default())
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        self.persistence().path()
    }
}

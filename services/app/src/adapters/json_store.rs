//! services/app/src/adapters/json_store.rs
//!
//! This module contains the file-backed storage adapter, which is the concrete
//! implementation of the `SlotRepository` port from the `core` crate. The whole
//! slot collection lives in a single JSON file that is read once at startup and
//! overwritten wholesale after every mutation.

use async_trait::async_trait;
use std::path::PathBuf;
use terminy_core::domain::Slot;
use terminy_core::ports::{PortError, PortResult, SlotRepository};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A storage adapter that implements the `SlotRepository` port against a
/// single JSON file.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a new `JsonFileStore` backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SlotRepository for JsonFileStore {
    async fn load(&self) -> PortResult<Vec<Slot>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PortError::NotFound(self.path.display().to_string()));
            }
            Err(e) => {
                return Err(PortError::Unexpected(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let slots: Vec<Slot> = serde_json::from_str(&raw).map_err(|e| {
            PortError::Unexpected(format!("failed to parse {}: {}", self.path.display(), e))
        })?;
        debug!(count = slots.len(), path = %self.path.display(), "loaded slot collection");
        Ok(slots)
    }

    async fn save(&self, slots: &[Slot]) -> PortResult<()> {
        let raw = serde_json::to_string_pretty(slots)
            .map_err(|e| PortError::Unexpected(format!("failed to serialize slots: {}", e)))?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            PortError::Unexpected(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(count = slots.len(), path = %self.path.display(), "saved slot collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn scratch_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("terminy-{}-{}.json", name, uuid::Uuid::new_v4()));
        path
    }

    fn sample_slot() -> Slot {
        Slot {
            id: "s1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            topic: "Úvod do React.js".to_string(),
            capacity: 15,
            participants: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn round_trips_the_collection() {
        let path = scratch_file("roundtrip");
        let store = JsonFileStore::new(&path);

        store.save(&[sample_slot()]).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "s1");
        assert_eq!(loaded[0].topic, "Úvod do React.js");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let store = JsonFileStore::new(scratch_file("missing"));
        assert!(matches!(store.load().await, Err(PortError::NotFound(_))));
    }

    #[tokio::test]
    async fn garbage_file_is_unexpected() {
        let path = scratch_file("garbage");
        tokio::fs::write(&path, "not json at all").await.unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load().await, Err(PortError::Unexpected(_))));
        tokio::fs::remove_file(&path).await.unwrap();
    }
}

//! JSON file storage adapter for the quest library
//!
//! One namespace, one JSON document, rewritten in full after every
//! mutation. A missing file means a fresh library; a present-but-corrupt
//! file is an error rather than silent data loss.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::outbound::LibraryStoragePort;
use crate::domain::aggregates::PersistedLibrary;

/// File-backed storage for one library namespace.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LibraryStoragePort for JsonFileStorage {
    async fn load(&self) -> Result<Option<PersistedLibrary>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read library file {}", self.path.display())
                })
            }
        };
        let library = serde_json::from_str(&contents).with_context(|| {
            format!("Library file {} is not valid", self.path.display())
        })?;
        Ok(Some(library))
    }

    async fn save(&self, library: &PersistedLibrary) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }
        let contents =
            serde_json::to_string_pretty(library).context("Failed to serialize library")?;
        fs::write(&self.path, contents).await.with_context(|| {
            format!("Failed to write library file {}", self.path.display())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::QuestLibrary;
    use crate::domain::value_objects::{GenerationParams, QuestType};

    #[tokio::test]
    async fn load_of_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("library.json"));

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("library.json"));

        let mut library = QuestLibrary::new();
        library.set_params(GenerationParams::default().with_quest_type(QuestType::Rescue));
        storage.save(&library.to_persisted()).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(
            loaded.generation_params.quest_type.fixed(),
            Some(&QuestType::Rescue)
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        tokio::fs::write(&path, "{ definitely broken").await.unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(storage.load().await.is_err());
    }

    #[tokio::test]
    async fn save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("library.json"));

        storage.save(&QuestLibrary::new().to_persisted()).await.unwrap();

        let mut library = QuestLibrary::new();
        library.set_params(GenerationParams::default().with_quest_type(QuestType::Kill));
        storage.save(&library.to_persisted()).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(
            loaded.generation_params.quest_type.fixed(),
            Some(&QuestType::Kill)
        );
    }
}

//! Storage port - durable persistence for the quest library

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::aggregates::PersistedLibrary;

/// Port for loading and writing the library's durable subset.
///
/// The service writes through after every mutating operation; adapters own
/// where and how the namespace is stored.
#[async_trait]
pub trait LibraryStoragePort: Send + Sync {
    /// Load the persisted library, or `None` when nothing was stored yet.
    async fn load(&self) -> Result<Option<PersistedLibrary>>;

    /// Replace the persisted library wholesale.
    async fn save(&self, library: &PersistedLibrary) -> Result<()>;
}

//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::LibraryServiceImpl;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::JsonFileStorage;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub library: LibraryServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Wire the file storage adapter into the library service
        let storage = Arc::new(JsonFileStorage::new(config.storage_path()));
        let library = LibraryServiceImpl::init(storage).await?;

        Ok(Self { config, library })
    }
}

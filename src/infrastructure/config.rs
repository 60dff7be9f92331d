//! Application configuration

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding persisted library data
    pub data_dir: PathBuf,
    /// Storage namespace the library is filed under
    pub storage_namespace: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("QUESTFORGE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            storage_namespace: env::var("QUESTFORGE_NAMESPACE")
                .unwrap_or_else(|_| "quest-generator-storage".to_string()),
        }
    }

    /// Path of the namespace document inside the data directory.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_namespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_path_is_namespace_file_under_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/tmp/qf"),
            storage_namespace: "quest-generator-storage".to_string(),
        };
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/qf/quest-generator-storage.json")
        );
    }
}

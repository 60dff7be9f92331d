//! Export document - the interchange format for sharing quest sets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::Quest;

/// Format version stamped on every export.
pub const EXPORT_VERSION: &str = "1.0";

/// A portable bundle of quests plus provenance metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub quests: Vec<Quest>,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

impl ExportDocument {
    /// Bundle `quests` with a fresh timestamp and the current version tag.
    pub fn new(quests: Vec<Quest>) -> Self {
        Self {
            quests,
            exported_at: Utc::now(),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Import failure, surfaced to the user as one stable message. Nothing is
/// merged when parsing fails.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid quest data format")]
    InvalidFormat(#[source] serde_json::Error),
}

/// Parse an import payload into quest records.
///
/// Only the `quests` field of the document is read; a well-formed document
/// without it imports as empty. Metadata such as `version` is accepted but
/// not validated.
pub fn parse_import(payload: &str) -> Result<Vec<Quest>, ImportError> {
    #[derive(Deserialize)]
    struct ImportDocument {
        #[serde(default)]
        quests: Vec<Quest>,
    }

    let document: ImportDocument =
        serde_json::from_str(payload).map_err(ImportError::InvalidFormat)?;
    Ok(document.quests)
}

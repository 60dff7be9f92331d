//! Strongly-typed identifiers for domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a generated quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(Uuid);

impl QuestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for QuestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<QuestId> for Uuid {
    fn from(id: QuestId) -> Uuid {
        id.0
    }
}

/// Identifier of a saved quest template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(Uuid);

impl TemplateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TemplateId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<TemplateId> for Uuid {
    fn from(id: TemplateId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_ids_are_unique() {
        assert_ne!(QuestId::new(), QuestId::new());
    }

    #[test]
    fn quest_id_serializes_as_plain_uuid_string() {
        let id = QuestId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn quest_id_round_trips_through_uuid() {
        let id = QuestId::new();
        let uuid: Uuid = id.into();
        assert_eq!(QuestId::from_uuid(uuid), id);
    }
}

//! Quest entity - one generated quest plus its type-specific payload
//!
//! Quests serialize with camelCase keys and the type tag inline in the
//! top-level object, so saved libraries and exports from earlier versions
//! of the tool load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Difficulty, GenerationParams, QuestId, QuestLength, QuestType, RewardType, TemplateId,
};

/// A generated quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub difficulty: Difficulty,
    pub length: QuestLength,
    pub description: String,
    pub primary_objective: String,
    /// Omitted entirely when generation was asked to skip them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_objectives: Option<Vec<String>>,
    /// Which composition path produced this quest.
    pub is_advanced: bool,
    /// The noun the title was built around.
    pub main_element: String,
    #[serde(default)]
    pub rewards: Vec<RewardType>,
    #[serde(default)]
    pub complications: Vec<String>,
    #[serde(default)]
    pub estimated_duration: String,
    pub created_at: DateTime<Utc>,
    /// Type tag plus per-type fields, flattened into the quest object.
    #[serde(flatten)]
    pub details: QuestDetails,
}

impl Quest {
    pub fn quest_type(&self) -> QuestType {
        self.details.quest_type()
    }

    /// Copy under a fresh identity. The title is marked and the creation
    /// timestamp reset; everything else carries over.
    pub fn duplicated(&self) -> Quest {
        Quest {
            id: QuestId::new(),
            title: format!("{} (Copy)", self.title),
            created_at: Utc::now(),
            ..self.clone()
        }
    }
}

/// Type-specific quest fields. The serde tag doubles as the quest type,
/// so a record's tag and its field shape cannot disagree.
///
/// Types composed by the generic advanced path carry no extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestDetails {
    #[serde(rename = "Kill Quest")]
    Kill { creature: String, count: u32 },
    #[serde(rename = "Collection Quest")]
    Collection {
        item: String,
        count: u32,
        location: String,
    },
    #[serde(rename = "Delivery Quest", rename_all = "camelCase")]
    Delivery {
        item: String,
        from_npc: String,
        to_location: String,
    },
    #[serde(rename = "Escort Quest")]
    Escort { npc: String, destination: String },
    #[serde(rename = "Exploration Quest")]
    Exploration { location: String },
    #[serde(rename = "Mystery/Investigation", rename_all = "camelCase")]
    Mystery {
        location: String,
        mystery_npc: String,
    },
    #[serde(rename = "Survival Challenge")]
    Survival { location: String, duration: u32 },
    #[serde(rename = "Crafting Mission")]
    Crafting {},
    #[serde(rename = "Diplomacy Quest")]
    Diplomacy {},
    #[serde(rename = "Multi-stage Chain")]
    Chain {},
    #[serde(rename = "Rescue Mission")]
    Rescue {
        npc: String,
        location: String,
        captors: String,
    },
    #[serde(rename = "Siege Defense")]
    Defense {},
    #[serde(rename = "Infiltration/Stealth")]
    Stealth {},
}

impl QuestDetails {
    pub fn quest_type(&self) -> QuestType {
        match self {
            Self::Kill { .. } => QuestType::Kill,
            Self::Collection { .. } => QuestType::Collection,
            Self::Delivery { .. } => QuestType::Delivery,
            Self::Escort { .. } => QuestType::Escort,
            Self::Exploration { .. } => QuestType::Exploration,
            Self::Mystery { .. } => QuestType::Mystery,
            Self::Survival { .. } => QuestType::Survival,
            Self::Crafting {} => QuestType::Crafting,
            Self::Diplomacy {} => QuestType::Diplomacy,
            Self::Chain {} => QuestType::Chain,
            Self::Rescue { .. } => QuestType::Rescue,
            Self::Defense {} => QuestType::Defense,
            Self::Stealth {} => QuestType::Stealth,
        }
    }
}

/// A reusable generation recipe distilled from a quest.
///
/// Templates re-seed future generation with the same constraints; they do
/// not reproduce the original quest verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestTemplate {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    #[serde(rename = "template")]
    pub snapshot: TemplateSnapshot,
}

/// The slice of a quest a template remembers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSnapshot {
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub difficulty: Difficulty,
    pub length: QuestLength,
    pub description: String,
    pub primary_objective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_objectives: Option<Vec<String>>,
    pub is_advanced: bool,
}

impl QuestTemplate {
    /// Distill a template from `quest`.
    pub fn from_quest(quest: &Quest, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.into(),
            description: description.into(),
            quest_type: quest.quest_type(),
            snapshot: TemplateSnapshot {
                quest_type: quest.quest_type(),
                difficulty: quest.difficulty,
                length: quest.length,
                description: quest.description.clone(),
                primary_objective: quest.primary_objective.clone(),
                secondary_objectives: quest.secondary_objectives.clone(),
                is_advanced: quest.is_advanced,
            },
        }
    }

    /// Generation constraints this template re-seeds. The complication and
    /// secondary-objective switches stay with the caller's current
    /// preferences rather than the snapshot.
    pub fn generation_params(
        &self,
        include_complications: bool,
        include_secondary_objectives: bool,
    ) -> GenerationParams {
        GenerationParams::default()
            .with_quest_type(self.quest_type)
            .with_difficulty(self.snapshot.difficulty)
            .with_length(self.snapshot.length)
            .with_complications(include_complications)
            .with_secondary_objectives(include_secondary_objectives)
    }
}

//! Generation vocabulary - quest types, difficulties, lengths, rewards
//!
//! These enums are the closed sets the generator draws from. Their serde
//! representation is the human-readable display string, so persisted
//! documents stay interchangeable with exports from earlier versions of
//! the tool.

use serde::{Deserialize, Serialize};

/// The kind of quest to compose.
///
/// Whether a type is "basic" or "advanced" is not encoded here; the
/// partition lives in [`crate::domain::content`] so it can change without
/// touching this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestType {
    #[serde(rename = "Kill Quest")]
    Kill,
    #[serde(rename = "Collection Quest")]
    Collection,
    #[serde(rename = "Delivery Quest")]
    Delivery,
    #[serde(rename = "Escort Quest")]
    Escort,
    #[serde(rename = "Exploration Quest")]
    Exploration,
    #[serde(rename = "Mystery/Investigation")]
    Mystery,
    #[serde(rename = "Survival Challenge")]
    Survival,
    #[serde(rename = "Crafting Mission")]
    Crafting,
    #[serde(rename = "Diplomacy Quest")]
    Diplomacy,
    #[serde(rename = "Multi-stage Chain")]
    Chain,
    #[serde(rename = "Rescue Mission")]
    Rescue,
    #[serde(rename = "Siege Defense")]
    Defense,
    #[serde(rename = "Infiltration/Stealth")]
    Stealth,
}

impl QuestType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kill => "Kill Quest",
            Self::Collection => "Collection Quest",
            Self::Delivery => "Delivery Quest",
            Self::Escort => "Escort Quest",
            Self::Exploration => "Exploration Quest",
            Self::Mystery => "Mystery/Investigation",
            Self::Survival => "Survival Challenge",
            Self::Crafting => "Crafting Mission",
            Self::Diplomacy => "Diplomacy Quest",
            Self::Chain => "Multi-stage Chain",
            Self::Rescue => "Rescue Mission",
            Self::Defense => "Siege Defense",
            Self::Stealth => "Infiltration/Stealth",
        }
    }
}

impl std::fmt::Display for QuestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Difficulty tier, ordered from Easy up to Epic. Scales objective counts
/// and reward draws.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Epic,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Epic => "Epic",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How long the quest is expected to run at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestLength {
    Short,
    Medium,
    Long,
    Campaign,
}

impl QuestLength {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
            Self::Campaign => "Campaign",
        }
    }

    /// Session-time estimate stamped onto generated quests.
    pub fn duration_estimate(&self) -> &'static str {
        match self {
            Self::Short => "1-2 hours",
            Self::Medium => "3-4 hours",
            Self::Long => "5-8 hours",
            Self::Campaign => "10+ hours",
        }
    }
}

impl std::fmt::Display for QuestLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Moral slant requested for the quest. Carried through generation
/// parameters for forward compatibility; no content table keys off it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoralAlignment {
    Good,
    Neutral,
    Evil,
    #[default]
    Any,
}

/// Reward category granted on quest completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    #[serde(rename = "Gold Coins")]
    GoldCoins,
    #[serde(rename = "Magical Items")]
    MagicalItems,
    #[serde(rename = "Experience")]
    Experience,
    #[serde(rename = "Reputation")]
    Reputation,
    #[serde(rename = "Land Grants")]
    LandGrants,
    #[serde(rename = "Noble Titles")]
    NobleTitles,
}

impl RewardType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GoldCoins => "Gold Coins",
            Self::MagicalItems => "Magical Items",
            Self::Experience => "Experience",
            Self::Reputation => "Reputation",
            Self::LandGrants => "Land Grants",
            Self::NobleTitles => "Noble Titles",
        }
    }
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A caller constraint on one generation field.
///
/// `Random` defers the choice to the generator; a `Fixed` value is never
/// overridden. Serializes as the inner value or the wildcard string
/// `"random"`, matching the parameter shape of exported documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Constraint<T> {
    #[default]
    Random,
    Fixed(T),
}

impl<T> Constraint<T> {
    pub fn fixed(&self) -> Option<&T> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Random => None,
        }
    }
}

impl<T: Serialize> Serialize for Constraint<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Random => serializer.serialize_str("random"),
            Self::Fixed(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Constraint<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Value(T),
            Wildcard(String),
        }

        match Raw::<T>::deserialize(deserializer)? {
            Raw::Value(value) => Ok(Self::Fixed(value)),
            Raw::Wildcard(word) if word == "random" => Ok(Self::Random),
            Raw::Wildcard(word) => Err(serde::de::Error::custom(format!(
                "expected a concrete value or \"random\", got \"{}\"",
                word
            ))),
        }
    }
}

/// Caller-facing knobs for one generation run.
///
/// Missing fields deserialize to their defaults, so a partial parameter
/// document is valid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationParams {
    pub quest_type: Constraint<QuestType>,
    pub difficulty: Constraint<Difficulty>,
    pub length: Constraint<QuestLength>,
    pub alignment: MoralAlignment,
    pub include_complications: bool,
    pub include_secondary_objectives: bool,
}

impl GenerationParams {
    pub fn with_quest_type(mut self, quest_type: QuestType) -> Self {
        self.quest_type = Constraint::Fixed(quest_type);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Constraint::Fixed(difficulty);
        self
    }

    pub fn with_length(mut self, length: QuestLength) -> Self {
        self.length = Constraint::Fixed(length);
        self
    }

    pub fn with_complications(mut self, include: bool) -> Self {
        self.include_complications = include;
        self
    }

    pub fn with_secondary_objectives(mut self, include: bool) -> Self {
        self.include_secondary_objectives = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_type_serializes_as_display_string() {
        let json = serde_json::to_string(&QuestType::Mystery).unwrap();
        assert_eq!(json, "\"Mystery/Investigation\"");

        let parsed: QuestType = serde_json::from_str("\"Multi-stage Chain\"").unwrap();
        assert_eq!(parsed, QuestType::Chain);
    }

    #[test]
    fn difficulty_is_ordered_easy_to_epic() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Hard < Difficulty::Epic);
    }

    #[test]
    fn length_maps_to_duration_estimate() {
        assert_eq!(QuestLength::Short.duration_estimate(), "1-2 hours");
        assert_eq!(QuestLength::Medium.duration_estimate(), "3-4 hours");
        assert_eq!(QuestLength::Long.duration_estimate(), "5-8 hours");
        assert_eq!(QuestLength::Campaign.duration_estimate(), "10+ hours");
    }

    #[test]
    fn constraint_serializes_fixed_value_transparently() {
        let constraint = Constraint::Fixed(QuestType::Kill);
        assert_eq!(
            serde_json::to_string(&constraint).unwrap(),
            "\"Kill Quest\""
        );
    }

    #[test]
    fn constraint_serializes_random_as_wildcard() {
        let constraint: Constraint<Difficulty> = Constraint::Random;
        assert_eq!(serde_json::to_string(&constraint).unwrap(), "\"random\"");
    }

    #[test]
    fn constraint_deserializes_wildcard_and_value() {
        let random: Constraint<Difficulty> = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(random, Constraint::Random);

        let fixed: Constraint<Difficulty> = serde_json::from_str("\"Epic\"").unwrap();
        assert_eq!(fixed.fixed(), Some(&Difficulty::Epic));
    }

    #[test]
    fn constraint_rejects_unknown_keyword() {
        let result: Result<Constraint<Difficulty>, _> = serde_json::from_str("\"chaotic\"");
        assert!(result.is_err());
    }

    #[test]
    fn params_deserialize_from_partial_document() {
        let params: GenerationParams =
            serde_json::from_str(r#"{"questType": "Kill Quest"}"#).unwrap();
        assert_eq!(params.quest_type.fixed(), Some(&QuestType::Kill));
        assert_eq!(params.difficulty, Constraint::Random);
        assert_eq!(params.length, Constraint::Random);
        assert_eq!(params.alignment, MoralAlignment::Any);
        assert!(!params.include_complications);
    }

    #[test]
    fn params_use_camel_case_keys() {
        let params = GenerationParams::default()
            .with_difficulty(Difficulty::Hard)
            .with_complications(true);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["difficulty"], "Hard");
        assert_eq!(json["questType"], "random");
        assert_eq!(json["includeComplications"], true);
        assert_eq!(json["includeSecondaryObjectives"], false);
    }
}

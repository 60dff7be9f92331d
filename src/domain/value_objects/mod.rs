//! Value objects - Immutable objects defined by their attributes

mod ids;
mod quest_params;

pub use ids::*;
pub use quest_params::{
    Constraint, Difficulty, GenerationParams, MoralAlignment, QuestLength, QuestType, RewardType,
};

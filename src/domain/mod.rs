//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Quest, QuestTemplate
//! - Value Objects: Identifiers, generation vocabulary, parameters
//! - Content: Static tables quests are composed from
//! - Aggregates: Quest library root

pub mod aggregates;
pub mod content;
pub mod entities;
pub mod value_objects;

//! Domain entities - Core business objects with identity

mod quest;

pub use quest::{Quest, QuestDetails, QuestTemplate, TemplateSnapshot};

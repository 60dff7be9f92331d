//! Aggregates - Cluster of domain objects treated as a single unit

pub mod quest_library;

pub use quest_library::{PersistedLibrary, QuestLibrary, HISTORY_CAP};

//! Application services - Use case implementations
//!
//! The generator composes quests from the content tables; the library
//! service owns the quest collections and their persistence. Both follow
//! hexagonal architecture principles, with external concerns behind ports.

pub mod generator_service;
pub mod library_service;

pub use generator_service::{GeneratorError, QuestGenerator};
pub use library_service::{LibraryService, LibraryServiceImpl};

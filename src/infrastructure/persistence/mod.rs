//! Persistence adapters
//!
//! This module implements the storage port over the local filesystem,
//! one JSON document per library namespace.

mod json_store;

pub use json_store::JsonFileStorage;

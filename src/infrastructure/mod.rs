//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: JSON file adapter for library storage
//! - Cli: Command-line interface
//! - Config: Application configuration
//! - State: Shared application state

pub mod cli;
pub mod config;
pub mod persistence;
pub mod state;

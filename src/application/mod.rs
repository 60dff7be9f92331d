//! Application layer - Use cases and boundary contracts
//!
//! This layer contains:
//! - Services: Quest generation and library orchestration
//! - Ports: Interfaces the application requires from the outside
//! - DTOs: Interchange document shapes

pub mod dto;
pub mod ports;
pub mod services;

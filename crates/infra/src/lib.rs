//! # MenuSlot Infrastructure
//!
//! Infrastructure implementations of the core scheduling ports.
//!
//! This crate contains:
//! - Rule repositories (in-memory and JSON/TOML file)
//! - The system clock
//! - Configuration loading and `tracing` setup
//! - Service bootstrap from configuration
//!
//! ## Architecture
//! - Implements traits defined in `menuslot-core`
//! - Contains all "impure" code (filesystem, environment, global subscriber)

pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod errors;
pub mod observability;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use bootstrap::build_schedule_service;
pub use clock::SystemClock;
pub use errors::InfraError;
pub use observability::init_tracing;
pub use repository::{FileRuleRepository, InMemoryRuleRepository};

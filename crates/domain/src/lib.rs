//! # MenuSlot Domain
//!
//! Business domain types for time-window collection scheduling.
//!
//! This crate contains:
//! - Schedule value types (`Rule`, `Slot`, `DaySet`, `TimeOfDay`)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other MenuSlot crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

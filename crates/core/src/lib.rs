//! # MenuSlot Core
//!
//! Pure scheduling logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The resolution engine (activation, overlap, winner, fallback)
//! - Port interfaces (traits) for rule storage and wall-clock time
//! - The `ScheduleService` use case
//!
//! ## Architecture Principles
//! - Only depends on `menuslot-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod schedule;

// Re-export specific items to avoid ambiguity
pub use schedule::fallback::{FallbackChoice, FallbackReason};
pub use schedule::overlap::OverlapWarning;
pub use schedule::ports::{Clock, RuleRepository};
pub use schedule::resolver::{Assignment, AssignmentSource, Resolution};
pub use schedule::ScheduleService;

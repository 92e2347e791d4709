//! Domain types and models
//!
//! Everything the resolution engine reads or returns.

pub mod days;
pub mod ids;
pub mod resolution;
pub mod rule;
pub mod time;

pub use days::{day_of_week, prev_day, DaySet};
pub use ids::{BusinessId, CollectionId, RuleId};
pub use resolution::ResolvedCollections;
pub use rule::{Rule, Slot, WindowKind};
pub use time::TimeOfDay;

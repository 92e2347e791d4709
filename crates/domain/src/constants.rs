//! Scheduling constants
//!
//! Shared by the domain value types and the resolution engine.

/// Minutes in one calendar day; `TimeOfDay` values live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Days in a week; day-of-week values live in `0..DAYS_PER_WEEK`, Sunday = 0.
pub const DAYS_PER_WEEK: u8 = 7;

// Configuration defaults
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_RULES_PATH: &str = "rules.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

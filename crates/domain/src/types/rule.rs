//! Recurring time-window rules

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::days::prev_day;
use super::{BusinessId, CollectionId, DaySet, RuleId, TimeOfDay};
use crate::impl_domain_enum_conversions;
use crate::{MenuSlotError, Result};

/// Assignment channel a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Slot {
    /// Main content; falls back to the most relevant rule when nothing is live.
    Primary,
    /// Promotional layer; empty outside its windows.
    Overlay,
}

impl_domain_enum_conversions!(Slot {
    Primary => "primary",
    Overlay => "overlay",
});

/// Shape of a rule's time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// `start == end`: the whole of every listed day.
    AllDay,
    /// `start < end`: `[start, end)` on each listed day.
    SameDay,
    /// `start > end`: from `start` on a listed day until `end` the next morning.
    Overnight,
}

impl WindowKind {
    pub fn classify(start: TimeOfDay, end: TimeOfDay) -> Self {
        match start.cmp(&end) {
            Ordering::Equal => Self::AllDay,
            Ordering::Less => Self::SameDay,
            Ordering::Greater => Self::Overnight,
        }
    }
}

/// One recurring assignment of a collection to a slot.
///
/// Start is inclusive, end is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Rule {
    pub id: RuleId,
    pub business_id: BusinessId,
    pub collection_id: CollectionId,
    pub slot: Slot,
    #[cfg_attr(feature = "ts-gen", ts(type = "Array<number>"))]
    pub days_of_week: DaySet,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub start_time: TimeOfDay,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub end_time: TimeOfDay,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

const fn default_is_active() -> bool {
    true
}

impl Rule {
    pub fn window_kind(&self) -> WindowKind {
        WindowKind::classify(self.start_time, self.end_time)
    }

    pub fn is_all_day(&self) -> bool {
        self.window_kind() == WindowKind::AllDay
    }

    pub fn is_same_day(&self) -> bool {
        self.window_kind() == WindowKind::SameDay
    }

    pub fn is_overnight(&self) -> bool {
        self.window_kind() == WindowKind::Overnight
    }

    /// Whether the rule can show anything on `day`: the day is listed, or the
    /// rule is overnight and spills over from a listed previous day.
    pub fn affects_day(&self, day: u8) -> bool {
        self.days_of_week.contains(day)
            || (self.is_overnight() && self.days_of_week.contains(prev_day(day)))
    }

    /// Check the invariants the type system does not already enforce.
    ///
    /// Intended for editing surfaces; resolution assumes validated rules.
    ///
    /// # Errors
    /// Returns `MenuSlotError::InvalidInput` for an empty day set.
    pub fn validate(&self) -> Result<()> {
        if self.days_of_week.is_empty() {
            return Err(MenuSlotError::InvalidInput(format!(
                "rule {} has no days of week",
                self.id
            )));
        }
        Ok(())
    }
}

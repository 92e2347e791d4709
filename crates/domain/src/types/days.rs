//! Day-of-week sets
//!
//! Days are plain integers, 0 = Sunday through 6 = Saturday, matching the
//! representation the persistence collaborator stores.

use std::fmt;

use chrono::Datelike;
use serde::ser::SerializeSeq;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DAYS_PER_WEEK;
use crate::{MenuSlotError, Result};

/// Day before `day`, wrapping Sunday back to Saturday.
pub const fn prev_day(day: u8) -> u8 {
    (day + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
}

/// Day of week of a calendar date, Sunday = 0.
pub fn day_of_week(date: impl Datelike) -> u8 {
    // num_days_from_sunday() is always in 0..7
    date.weekday().num_days_from_sunday() as u8
}

/// Set of days of the week, stored as a 7-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b111_1111)
    }

    /// Monday through Friday.
    pub const fn weekdays() -> Self {
        Self(0b011_1110)
    }

    /// Build a set from day numbers.
    ///
    /// # Errors
    /// Returns `MenuSlotError::InvalidInput` if any day is outside `0..=6`.
    pub fn from_days(days: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut set = Self::empty();
        for day in days {
            set.insert(day)?;
        }
        Ok(set)
    }

    /// # Errors
    /// Returns `MenuSlotError::InvalidInput` if `day` is outside `0..=6`.
    pub fn insert(&mut self, day: u8) -> Result<()> {
        if day >= DAYS_PER_WEEK {
            return Err(MenuSlotError::InvalidInput(format!(
                "day of week out of range: {day} (expected 0-6, Sunday = 0)"
            )));
        }
        self.0 |= 1 << day;
        Ok(())
    }

    pub const fn contains(self, day: u8) -> bool {
        day < DAYS_PER_WEEK && self.0 & (1 << day) != 0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..DAYS_PER_WEEK).filter(move |day| self.contains(*day))
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for day in self.iter() {
            seq.serialize_element(&day)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for DaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let days = Vec::<u8>::deserialize(deserializer)?;
        Self::from_days(days).map_err(de::Error::custom)
    }
}

//! Minute-granularity time of day

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::MINUTES_PER_DAY;
use crate::{MenuSlotError, Result};

/// Time of day as minutes since midnight, in `[00:00, 24:00)`.
///
/// Seconds are never stored: parsing `"HH:MM:SS"` truncates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    /// # Errors
    /// Returns `MenuSlotError::InvalidInput` when `minutes >= 1440`.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(MenuSlotError::InvalidInput(format!(
                "time of day out of range: {minutes} minutes"
            )));
        }
        Ok(Self(minutes))
    }

    /// # Errors
    /// Returns `MenuSlotError::InvalidInput` for hours above 23 or minutes
    /// above 59.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(MenuSlotError::InvalidInput(format!(
                "invalid time of day: {hour:02}:{minute:02}"
            )));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Truncate a wall-clock time to the minute.
    pub fn of(time: NaiveTime) -> Self {
        // hour() <= 23 and minute() <= 59, so this is always < 1440
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = MenuSlotError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MenuSlotError::InvalidInput(format!("invalid time of day: '{s}'"));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let mut fields = [0u8; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 2 {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        let [hour, minute, second] = fields;
        if second > 59 {
            return Err(invalid());
        }
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

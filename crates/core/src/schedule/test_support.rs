//! Fixtures shared by the engine's unit tests.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use menuslot_domain::{BusinessId, CollectionId, DaySet, Rule, RuleId, Slot, TimeOfDay};

/// Local instant in the week of 2024-01-07 (Sunday = day 0).
pub(crate) fn at(day: u8, hhmm: &str) -> NaiveDateTime {
    let time: TimeOfDay = hhmm.parse().unwrap();
    NaiveDate::from_ymd_opt(2024, 1, 7 + u32::from(day))
        .unwrap()
        .and_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)
        .unwrap()
}

/// Creation timestamp `n` days after 2024-01-01.
pub(crate) fn created(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(n)
}

/// Rule `id` showing collection `col-{id}`.
pub(crate) fn rule(id: &str, slot: Slot, days: &[u8], start: &str, end: &str) -> Rule {
    Rule {
        id: RuleId::from(id),
        business_id: BusinessId::from("bistro"),
        collection_id: CollectionId::from(format!("col-{id}")),
        slot,
        days_of_week: DaySet::from_days(days.iter().copied()).unwrap(),
        start_time: start.parse().unwrap(),
        end_time: end.parse().unwrap(),
        is_active: true,
        created_at: created(0),
    }
}

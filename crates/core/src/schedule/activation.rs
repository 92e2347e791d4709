//! Is a single rule live at a given wall-clock instant?

use chrono::NaiveDateTime;
use menuslot_domain::{day_of_week, prev_day, Rule, TimeOfDay, WindowKind};

/// Day of week and minute of day of a local instant.
pub(crate) fn day_and_minute(now: NaiveDateTime) -> (u8, u16) {
    (day_of_week(now), TimeOfDay::of(now.time()).minutes())
}

/// Whether `rule` is active at local time `now`.
///
/// Overnight windows belong to the day they start on: a Monday 22:00-06:00
/// rule is still active at 05:30 on Tuesday.
pub fn is_active(rule: &Rule, now: NaiveDateTime) -> bool {
    let (day, t) = day_and_minute(now);
    is_active_at(rule, day, t)
}

pub(crate) fn is_active_at(rule: &Rule, day: u8, t: u16) -> bool {
    let start = rule.start_time.minutes();
    let end = rule.end_time.minutes();
    let days = rule.days_of_week;

    match rule.window_kind() {
        WindowKind::AllDay => days.contains(day),
        WindowKind::SameDay => days.contains(day) && start <= t && t < end,
        WindowKind::Overnight => {
            (days.contains(day) && t >= start) || (days.contains(prev_day(day)) && t < end)
        }
    }
}

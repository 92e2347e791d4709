//! Stand-in selection for an empty primary slot
//!
//! When no primary rule is live, the primary slot still shows the rule most
//! relevant to "now". Branches are tried in order and the first non-empty
//! one wins:
//!
//! 1. **Just ended**: a same-day window listed today that has already
//!    closed; the latest end is closest to now.
//! 2. **Starting later today**: a timed window affecting today that opens at
//!    or after now; the earliest start wins.
//! 3. **Next occurrence**: the rule whose next affected day is the fewest
//!    days ahead, earliest start first.
//!
//! Overnight windows never qualify as "just ended", even once their early
//! morning tail has closed; they are only reachable through branches 2 and 3.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use menuslot_domain::constants::DAYS_PER_WEEK;
use menuslot_domain::Rule;
use serde::{Deserialize, Serialize};

use super::activation::day_and_minute;

/// Which branch produced a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    JustEnded,
    StartingLaterToday,
    NextOccurrence { days_ahead: u8 },
}

/// A fallback rule together with the branch that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackChoice<'a> {
    pub rule: &'a Rule,
    pub reason: FallbackReason,
}

/// Greatest wins: later `end_time`, then newer `created_at`, then smaller id.
pub fn just_ended_order(a: &Rule, b: &Rule) -> Ordering {
    a.end_time
        .cmp(&b.end_time)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

/// Least wins: earlier `start_time`, then newer `created_at`, then smaller id.
pub fn starting_soon_order(a: &Rule, b: &Rule) -> Ordering {
    a.start_time
        .cmp(&b.start_time)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Least wins: fewer days ahead, then `starting_soon_order`.
pub fn next_occurrence_order(a: (u8, &Rule), b: (u8, &Rule)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| starting_soon_order(a.1, b.1))
}

/// Days from `today` until the first day `rule` affects, if any.
pub fn days_until_affected(rule: &Rule, today: u8) -> Option<u8> {
    (0..DAYS_PER_WEEK).find(|offset| rule.affects_day((today + offset) % DAYS_PER_WEEK))
}

/// Pick a stand-in among `primary_rules` at local time `now`.
///
/// Returns `None` only when `primary_rules` is empty (or every rule has an
/// empty day set).
pub fn select_fallback<'a>(
    primary_rules: &[&'a Rule],
    now: NaiveDateTime,
) -> Option<FallbackChoice<'a>> {
    let (today, t) = day_and_minute(now);

    let affecting_today: Vec<&'a Rule> =
        primary_rules.iter().copied().filter(|rule| rule.affects_day(today)).collect();

    let just_ended = affecting_today
        .iter()
        .copied()
        .filter(|rule| rule.is_same_day() && rule.end_time.minutes() <= t)
        .max_by(|a, b| just_ended_order(a, b));
    if let Some(rule) = just_ended {
        return Some(FallbackChoice { rule, reason: FallbackReason::JustEnded });
    }

    let starting_later = affecting_today
        .iter()
        .copied()
        .filter(|rule| !rule.is_all_day() && rule.start_time.minutes() >= t)
        .min_by(|a, b| starting_soon_order(a, b));
    if let Some(rule) = starting_later {
        return Some(FallbackChoice { rule, reason: FallbackReason::StartingLaterToday });
    }

    primary_rules
        .iter()
        .copied()
        .filter_map(|rule| days_until_affected(rule, today).map(|offset| (offset, rule)))
        .min_by(|a, b| next_occurrence_order(*a, *b))
        .map(|(days_ahead, rule)| FallbackChoice {
            rule,
            reason: FallbackReason::NextOccurrence { days_ahead },
        })
}

/// `select_fallback` without the reason.
pub fn fallback<'a>(primary_rules: &[&'a Rule], now: NaiveDateTime) -> Option<&'a Rule> {
    select_fallback(primary_rules, now).map(|choice| choice.rule)
}

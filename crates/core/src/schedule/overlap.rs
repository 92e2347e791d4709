//! Overlap detection for editor warnings
//!
//! Shares the window arithmetic of `activation` but never feeds resolution:
//! two overlapping rules are still resolved by `winner`.

use menuslot_domain::constants::MINUTES_PER_DAY;
use menuslot_domain::{DaySet, Rule, RuleId, TimeOfDay};
use serde::{Deserialize, Serialize};

/// A rule that collides with other rules in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWarning {
    pub rule_id: RuleId,
    pub conflicts_with: Vec<RuleId>,
}

pub fn days_overlap(a: DaySet, b: DaySet) -> bool {
    a.intersects(b)
}

/// Whether two daily windows share any minute.
///
/// Equal bounds mean all day and overlap everything. Two windows that both
/// cross midnight are always reported as overlapping.
pub fn times_overlap(
    a_start: TimeOfDay,
    a_end: TimeOfDay,
    b_start: TimeOfDay,
    b_end: TimeOfDay,
) -> bool {
    let (a_s, a_e) = (a_start.minutes(), a_end.minutes());
    let (b_s, b_e) = (b_start.minutes(), b_end.minutes());

    if a_s == a_e || b_s == b_e {
        return true;
    }

    match (a_s > a_e, b_s > b_e) {
        (false, false) => intervals_overlap(a_s, a_e, b_s, b_e),
        (true, false) => wrapped_overlaps(a_s, a_e, b_s, b_e),
        (false, true) => wrapped_overlaps(b_s, b_e, a_s, a_e),
        (true, true) => true,
    }
}

/// Half-open `[a_s, a_e)` against `[b_s, b_e)`.
const fn intervals_overlap(a_s: u16, a_e: u16, b_s: u16, b_e: u16) -> bool {
    a_s < b_e && b_s < a_e
}

/// Split the wrapping window into `[s, 1440)` and `[0, e)`.
const fn wrapped_overlaps(wrap_s: u16, wrap_e: u16, s: u16, e: u16) -> bool {
    intervals_overlap(wrap_s, MINUTES_PER_DAY, s, e) || intervals_overlap(0, wrap_e, s, e)
}

fn conflicts(a: &Rule, b: &Rule) -> bool {
    a.id != b.id
        && a.slot == b.slot
        && days_overlap(a.days_of_week, b.days_of_week)
        && times_overlap(a.start_time, a.end_time, b.start_time, b.end_time)
}

/// Same-slot rules in `all` whose days and windows intersect `rule`'s.
pub fn overlapping_rules<'a>(rule: &Rule, all: &'a [Rule]) -> Vec<&'a Rule> {
    all.iter().filter(|other| conflicts(rule, other)).collect()
}

/// Whether any other same-slot rule in `all` overlaps `rule`.
pub fn has_overlap(rule: &Rule, all: &[Rule]) -> bool {
    all.iter().any(|other| conflicts(rule, other))
}

/// One warning per rule that overlaps at least one other rule, in input order.
pub fn overlap_warnings(rules: &[Rule]) -> Vec<OverlapWarning> {
    rules
        .iter()
        .filter_map(|rule| {
            let conflicts_with: Vec<RuleId> =
                overlapping_rules(rule, rules).into_iter().map(|other| other.id.clone()).collect();
            (!conflicts_with.is_empty())
                .then(|| OverlapWarning { rule_id: rule.id.clone(), conflicts_with })
        })
        .collect()
}

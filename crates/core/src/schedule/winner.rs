//! Tie-breaking among simultaneously active rules of one slot

use std::cmp::Ordering;

use menuslot_domain::Rule;

/// Preference order, greatest wins:
///
/// 1. later `start_time` (the narrower, more deliberate window)
/// 2. newer `created_at`
/// 3. smaller `id`, so the order is total and input order never matters
pub fn winner_order(a: &Rule, b: &Rule) -> Ordering {
    a.start_time
        .cmp(&b.start_time)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

/// The single rule to show among `active`, or `None` when it is empty.
pub fn pick_winner<'a>(active: &[&'a Rule]) -> Option<&'a Rule> {
    active.iter().copied().max_by(|a, b| winner_order(a, b))
}

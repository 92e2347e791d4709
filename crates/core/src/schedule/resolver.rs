//! Per-business resolution of the primary and overlay slots

use chrono::NaiveDateTime;
use menuslot_domain::{CollectionId, ResolvedCollections, Rule, RuleId, Slot};
use serde::{Deserialize, Serialize};

use super::activation::is_active;
use super::fallback::{select_fallback, FallbackReason};
use super::winner::pick_winner;

/// Why a rule fills its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "reason", rename_all = "snake_case")]
pub enum AssignmentSource {
    /// The rule's window contains `now`.
    Active,
    /// Primary slot stand-in; no primary window contains `now`.
    Fallback(FallbackReason),
}

/// The rule chosen for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub rule_id: RuleId,
    pub collection_id: CollectionId,
    pub source: AssignmentSource,
}

impl Assignment {
    fn new(rule: &Rule, source: AssignmentSource) -> Self {
        Self { rule_id: rule.id.clone(), collection_id: rule.collection_id.clone(), source }
    }
}

/// Both slots, with the rule behind each choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub primary: Option<Assignment>,
    pub overlay: Option<Assignment>,
}

impl Resolution {
    /// Collection ids only.
    pub fn collections(&self) -> ResolvedCollections {
        ResolvedCollections {
            primary: self.primary.as_ref().map(|a| a.collection_id.clone()),
            overlay: self.overlay.as_ref().map(|a| a.collection_id.clone()),
        }
    }
}

impl From<Resolution> for ResolvedCollections {
    fn from(resolution: Resolution) -> Self {
        Self {
            primary: resolution.primary.map(|a| a.collection_id),
            overlay: resolution.overlay.map(|a| a.collection_id),
        }
    }
}

/// Resolve one business's rules at local time `now`.
///
/// Rules flagged inactive are ignored. The primary slot falls back to the
/// most relevant primary rule when none is live, so it is empty only when
/// the business has no primary rules; the overlay slot has no fallback.
pub fn resolve(rules: &[Rule], now: NaiveDateTime) -> Resolution {
    let mut primary_rules: Vec<&Rule> = Vec::new();
    let mut live_primary: Vec<&Rule> = Vec::new();
    let mut live_overlay: Vec<&Rule> = Vec::new();

    for rule in rules.iter().filter(|rule| rule.is_active) {
        let live = is_active(rule, now);
        match rule.slot {
            Slot::Primary => {
                primary_rules.push(rule);
                if live {
                    live_primary.push(rule);
                }
            }
            Slot::Overlay => {
                if live {
                    live_overlay.push(rule);
                }
            }
        }
    }

    let primary = pick_winner(&live_primary)
        .map(|rule| Assignment::new(rule, AssignmentSource::Active))
        .or_else(|| {
            select_fallback(&primary_rules, now)
                .map(|choice| Assignment::new(choice.rule, AssignmentSource::Fallback(choice.reason)))
        });

    let overlay =
        pick_winner(&live_overlay).map(|rule| Assignment::new(rule, AssignmentSource::Active));

    Resolution { primary, overlay }
}

/// `resolve`, reduced to the collection ids the renderer needs.
pub fn resolve_collections(rules: &[Rule], now: NaiveDateTime) -> ResolvedCollections {
    resolve(rules, now).into()
}

#[cfg(test)]
mod tests {
    use menuslot_domain::{CollectionId, Rule, Slot};

    use super::*;
    use crate::schedule::test_support::{at, rule};

    fn col(id: &str) -> Option<CollectionId> {
        Some(CollectionId::from(format!("col-{id}")))
    }

    #[test]
    fn test_empty_rule_set_resolves_to_nothing() {
        let resolved = resolve_collections(&[], at(1, "12:00"));
        assert_eq!(resolved, ResolvedCollections::none());
    }

    #[test]
    fn test_overlay_only_business_has_no_primary() {
        let rules = vec![rule("promo", Slot::Overlay, &[1], "11:00", "14:00")];

        let resolved = resolve_collections(&rules, at(1, "12:00"));
        assert_eq!(resolved.primary, None);
        assert_eq!(resolved.overlay, col("promo"));
    }

    #[test]
    fn test_overlay_has_no_fallback() {
        let rules = vec![
            rule("menu", Slot::Primary, &[1], "09:00", "18:00"),
            rule("promo", Slot::Overlay, &[1], "11:00", "14:00"),
        ];

        let resolved = resolve_collections(&rules, at(1, "16:00"));
        assert_eq!(resolved.primary, col("menu"));
        assert_eq!(resolved.overlay, None);
    }

    #[test]
    fn test_slots_resolve_independently() {
        let rules = vec![
            rule("all-week", Slot::Primary, &[0, 1, 2, 3, 4, 5, 6], "00:00", "00:00"),
            rule("lunch", Slot::Primary, &[1], "11:00", "15:00"),
            rule("happy-hour", Slot::Overlay, &[1], "17:00", "19:00"),
            rule("lunch-deal", Slot::Overlay, &[1], "12:00", "14:00"),
        ];

        let resolution = resolve(&rules, at(1, "12:30"));
        assert_eq!(resolution.primary.as_ref().unwrap().rule_id.as_str(), "lunch");
        assert_eq!(resolution.primary.as_ref().unwrap().source, AssignmentSource::Active);
        assert_eq!(resolution.overlay.as_ref().unwrap().rule_id.as_str(), "lunch-deal");

        let evening = resolve_collections(&rules, at(1, "18:00"));
        assert_eq!(evening.primary, col("all-week"));
        assert_eq!(evening.overlay, col("happy-hour"));
    }

    #[test]
    fn test_primary_falls_back_with_reason() {
        let rules = vec![rule("weekday", Slot::Primary, &[1, 2, 3, 4, 5], "09:00", "18:00")];

        let resolution = resolve(&rules, at(6, "10:00"));
        let primary = resolution.primary.unwrap();
        assert_eq!(primary.collection_id, CollectionId::from("col-weekday"));
        assert_eq!(
            primary.source,
            AssignmentSource::Fallback(FallbackReason::NextOccurrence { days_ahead: 2 })
        );
    }

    #[test]
    fn test_overlay_rules_never_feed_primary_fallback() {
        let rules = vec![rule("promo", Slot::Overlay, &[1], "11:00", "14:00")];
        assert_eq!(resolve_collections(&rules, at(3, "12:00")), ResolvedCollections::none());
    }

    #[test]
    fn test_inactive_rules_are_ignored() {
        let rules = vec![
            Rule { is_active: false, ..rule("paused", Slot::Primary, &[1], "09:00", "18:00") },
            rule("fallback", Slot::Primary, &[2], "09:00", "18:00"),
        ];

        let resolved = resolve_collections(&rules, at(1, "12:00"));
        assert_eq!(resolved.primary, col("fallback"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let rules = vec![
            rule("a", Slot::Primary, &[1, 3], "09:00", "12:00"),
            rule("b", Slot::Primary, &[3], "22:00", "02:00"),
            rule("c", Slot::Overlay, &[4], "01:00", "03:00"),
        ];
        let now = at(4, "01:30");

        assert_eq!(resolve(&rules, now), resolve(&rules, now));
        let resolved = resolve_collections(&rules, now);
        assert_eq!(resolved.primary, col("b"));
        assert_eq!(resolved.overlay, col("c"));
    }

    #[test]
    fn test_collections_view_matches_conversion() {
        let rules = vec![rule("menu", Slot::Primary, &[1], "09:00", "18:00")];
        let resolution = resolve(&rules, at(1, "10:00"));

        assert_eq!(resolution.collections(), ResolvedCollections::from(resolution.clone()));
    }
}

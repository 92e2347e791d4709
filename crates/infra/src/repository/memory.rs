//! In-memory rule store
//!
//! Backs editors and tests that mutate rules between resolutions. Every read
//! copies the matching rules out, so callers never observe a half-applied
//! write.

use async_trait::async_trait;
use menuslot_core::RuleRepository;
use menuslot_domain::{BusinessId, Result, Rule, RuleId};
use parking_lot::RwLock;

/// `RwLock`-guarded rule list keyed by rule id
#[derive(Debug, Default)]
pub struct InMemoryRuleRepository {
    rules: RwLock<Vec<Rule>>,
}

impl InMemoryRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, keeping the last record for duplicate ids.
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let repo = Self::new();
        repo.replace_all(rules);
        repo
    }

    /// Insert `rule`, replacing any stored rule with the same id.
    ///
    /// Returns the replaced rule.
    pub fn upsert(&self, rule: Rule) -> Option<Rule> {
        let mut rules = self.rules.write();
        match rules.iter_mut().find(|existing| existing.id == rule.id) {
            Some(existing) => Some(std::mem::replace(existing, rule)),
            None => {
                rules.push(rule);
                None
            }
        }
    }

    pub fn remove(&self, id: &RuleId) -> Option<Rule> {
        let mut rules = self.rules.write();
        let index = rules.iter().position(|rule| &rule.id == id)?;
        Some(rules.remove(index))
    }

    pub fn replace_all(&self, rules: impl IntoIterator<Item = Rule>) {
        let mut fresh: Vec<Rule> = Vec::new();
        for rule in rules {
            match fresh.iter_mut().find(|existing| existing.id == rule.id) {
                Some(existing) => *existing = rule,
                None => fresh.push(rule),
            }
        }
        *self.rules.write() = fresh;
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

#[async_trait]
impl RuleRepository for InMemoryRuleRepository {
    async fn list_active_rules(&self, business_id: &BusinessId) -> Result<Vec<Rule>> {
        Ok(self
            .rules
            .read()
            .iter()
            .filter(|rule| rule.is_active && &rule.business_id == business_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use menuslot_domain::{CollectionId, DaySet, Slot};

    use super::*;

    fn rule(id: &str, business: &str) -> Rule {
        Rule {
            id: RuleId::from(id),
            business_id: BusinessId::from(business),
            collection_id: CollectionId::from(format!("{id}-menu")),
            slot: Slot::Primary,
            days_of_week: DaySet::all(),
            start_time: "08:00".parse().unwrap(),
            end_time: "12:00".parse().unwrap(),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn lists_only_active_rules_of_the_business() {
        let mut paused = rule("paused", "bistro");
        paused.is_active = false;
        let repo = InMemoryRuleRepository::with_rules([
            rule("breakfast", "bistro"),
            rule("other", "diner"),
            paused,
        ]);

        let listed = repo.list_active_rules(&BusinessId::from("bistro")).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["breakfast"]);
    }

    #[test]
    fn upsert_replaces_rule_with_same_id() {
        let repo = InMemoryRuleRepository::new();
        assert!(repo.upsert(rule("breakfast", "bistro")).is_none());

        let mut edited = rule("breakfast", "bistro");
        edited.end_time = "11:00".parse().unwrap();
        let previous = repo.upsert(edited).expect("previous rule returned");

        assert_eq!(previous.end_time.to_string(), "12:00");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn remove_returns_the_deleted_rule() {
        let repo = InMemoryRuleRepository::with_rules([rule("a", "bistro"), rule("b", "bistro")]);

        assert_eq!(repo.remove(&RuleId::from("a")).map(|r| r.id), Some(RuleId::from("a")));
        assert!(repo.remove(&RuleId::from("a")).is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn replace_all_deduplicates_by_id() {
        let repo = InMemoryRuleRepository::with_rules([rule("old", "bistro")]);
        let mut second = rule("dup", "bistro");
        second.start_time = "09:00".parse().unwrap();

        repo.replace_all([rule("dup", "bistro"), second]);

        assert_eq!(repo.len(), 1);
        assert!(repo.remove(&RuleId::from("old")).is_none());
        let kept = repo.remove(&RuleId::from("dup")).unwrap();
        assert_eq!(kept.start_time.to_string(), "09:00");
        assert!(repo.is_empty());
    }
}

//! Mock repository implementations for testing
//!
//! In-memory mocks for the rule repository port, enabling deterministic
//! tests without a live store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use menuslot_core::RuleRepository;
use menuslot_domain::{BusinessId, MenuSlotError, Result as DomainResult, Rule};

/// In-memory mock for `RuleRepository`.
///
/// Filters by business and `is_active` like a real store would, and counts
/// calls so tests can assert that nothing is cached.
#[derive(Default, Clone)]
pub struct MockRuleRepository {
    rules: Arc<Mutex<Vec<Rule>>>,
    calls: Arc<AtomicUsize>,
}

impl MockRuleRepository {
    /// Create a new mock seeded with the provided rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules: Arc::new(Mutex::new(rules)), calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Convenience helper for adding a single rule to the mock.
    pub fn with_rule(self, rule: Rule) -> Self {
        self.rules.lock().unwrap().push(rule);
        self
    }

    pub fn replace(&self, rules: Vec<Rule>) {
        *self.rules.lock().unwrap() = rules;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuleRepository for MockRuleRepository {
    async fn list_active_rules(&self, business_id: &BusinessId) -> DomainResult<Vec<Rule>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rules
            .lock()
            .unwrap()
            .iter()
            .filter(|rule| &rule.business_id == business_id && rule.is_active)
            .cloned()
            .collect())
    }
}

/// Repository whose every fetch fails.
pub struct FailingRuleRepository;

#[async_trait]
impl RuleRepository for FailingRuleRepository {
    async fn list_active_rules(&self, _business_id: &BusinessId) -> DomainResult<Vec<Rule>> {
        Err(MenuSlotError::Repository("upstream unavailable".to_string()))
    }
}

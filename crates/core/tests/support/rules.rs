//! Rule fixtures

use chrono::{DateTime, TimeZone, Utc};
use menuslot_domain::{BusinessId, CollectionId, DaySet, Rule, RuleId, Slot};

pub const BUSINESS: &str = "corner-cafe";

/// Builder for rules of the default test business.
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    pub fn primary(id: &str) -> Self {
        Self::new(id, Slot::Primary)
    }

    pub fn overlay(id: &str) -> Self {
        Self::new(id, Slot::Overlay)
    }

    fn new(id: &str, slot: Slot) -> Self {
        Self {
            rule: Rule {
                id: RuleId::from(id),
                business_id: BusinessId::from(BUSINESS),
                collection_id: CollectionId::from(format!("{id}-collection")),
                slot,
                days_of_week: DaySet::all(),
                start_time: "00:00".parse().unwrap(),
                end_time: "00:00".parse().unwrap(),
                is_active: true,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
        }
    }

    pub fn days(mut self, days: &[u8]) -> Self {
        self.rule.days_of_week = DaySet::from_days(days.iter().copied()).unwrap();
        self
    }

    pub fn window(mut self, start: &str, end: &str) -> Self {
        self.rule.start_time = start.parse().unwrap();
        self.rule.end_time = end.parse().unwrap();
        self
    }

    pub fn collection(mut self, collection: &str) -> Self {
        self.rule.collection_id = CollectionId::from(collection);
        self
    }

    pub fn business(mut self, business: &str) -> Self {
        self.rule.business_id = BusinessId::from(business);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.rule.created_at = created_at;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.rule.is_active = false;
        self
    }

    pub fn build(self) -> Rule {
        self.rule
    }
}

/// UTC instant on a given date (2024-01-07 is a Sunday).
pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn business() -> BusinessId {
    BusinessId::from(BUSINESS)
}

//! Port interfaces for collection scheduling
//!
//! These traits define the boundaries between the resolution engine
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use menuslot_domain::{BusinessId, Result, Rule};

/// Read-only access to a business's scheduling rules
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// All rules of `business_id` with `is_active` set, in any order.
    async fn list_active_rules(&self, business_id: &BusinessId) -> Result<Vec<Rule>>;
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

//! Schedule service - resolves a business's slots against its stored rules

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use menuslot_domain::{BusinessId, ResolvedCollections, Result, Rule};
use tracing::{debug, warn};

use super::overlap::{overlap_warnings, OverlapWarning};
use super::ports::{Clock, RuleRepository};
use super::resolver::{resolve, AssignmentSource, Resolution};

/// Collection scheduling service
///
/// Stateless apart from its ports: every call fetches the rules afresh and
/// resolves them against the given instant. Fetch errors are returned as-is;
/// callers on public rendering paths should treat them as "no content".
pub struct ScheduleService {
    repository: Arc<dyn RuleRepository>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl ScheduleService {
    /// Create a new schedule service evaluating wall-clock time in UTC
    pub fn new(repository: Arc<dyn RuleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock, timezone: Tz::UTC }
    }

    /// Evaluate rules against the business's local wall clock in `timezone`.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Collections to show for `business_id` at `now`.
    pub async fn resolve_business_collections(
        &self,
        business_id: &BusinessId,
        now: DateTime<Utc>,
    ) -> Result<ResolvedCollections> {
        Ok(self.resolve_detailed(business_id, now).await?.into())
    }

    /// Collections to show for `business_id` at the clock's current instant.
    pub async fn resolve_business_collections_now(
        &self,
        business_id: &BusinessId,
    ) -> Result<ResolvedCollections> {
        let now = self.clock.now();
        self.resolve_business_collections(business_id, now).await
    }

    /// Like `resolve_business_collections`, keeping the chosen rules and why.
    pub async fn resolve_detailed(
        &self,
        business_id: &BusinessId,
        now: DateTime<Utc>,
    ) -> Result<Resolution> {
        let rules = self.fetch_rules(business_id).await?;
        let local = self.local_time(now);
        let resolution = resolve(&rules, local);

        debug!(
            business_id = %business_id,
            rule_count = rules.len(),
            local_time = %local,
            primary = ?resolution.primary.as_ref().map(|a| a.collection_id.as_str()),
            primary_source = ?resolution.primary.as_ref().map(|a| a.source),
            overlay = ?resolution.overlay.as_ref().map(|a| a.collection_id.as_str()),
            "resolved business collections"
        );
        if let Some(assignment) = &resolution.primary {
            if let AssignmentSource::Fallback(reason) = assignment.source {
                debug!(
                    business_id = %business_id,
                    rule_id = %assignment.rule_id,
                    ?reason,
                    "primary slot using fallback"
                );
            }
        }

        Ok(resolution)
    }

    /// Same-slot overlaps among the business's rules, for editor warnings.
    pub async fn overlap_warnings(&self, business_id: &BusinessId) -> Result<Vec<OverlapWarning>> {
        let rules = self.fetch_rules(business_id).await?;
        let warnings = overlap_warnings(&rules);

        debug!(business_id = %business_id, warning_count = warnings.len(), "computed overlap warnings");
        Ok(warnings)
    }

    fn local_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.timezone).naive_local()
    }

    async fn fetch_rules(&self, business_id: &BusinessId) -> Result<Vec<Rule>> {
        self.repository.list_active_rules(business_id).await.inspect_err(|err| {
            warn!(business_id = %business_id, error = %err, kind = err.label(), "failed to fetch rules");
        })
    }
}

//! Service wiring from configuration

use std::sync::Arc;

use menuslot_core::ScheduleService;
use menuslot_domain::{Config, Result};
use tracing::info;

use crate::clock::SystemClock;
use crate::repository::FileRuleRepository;

/// Build a [`ScheduleService`] reading rules from `config.rules.path` and
/// resolving in `config.resolver.timezone`.
///
/// # Errors
/// Returns `MenuSlotError::Config` for an unknown time zone or an
/// unsupported rules file extension.
pub fn build_schedule_service(config: &Config) -> Result<ScheduleService> {
    let timezone = config.resolver.tz()?;
    let repository = FileRuleRepository::new(&config.rules.path)?;

    info!(rules_path = %config.rules.path, %timezone, "schedule service configured");

    Ok(ScheduleService::new(Arc::new(repository), Arc::new(SystemClock)).with_timezone(timezone))
}

//! File-backed rule store
//!
//! Reads a rules document from disk on every call, so edits to the file are
//! picked up by the next resolution without a restart.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use menuslot_core::RuleRepository;
use menuslot_domain::{BusinessId, MenuSlotError, Result, Rule};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// On-disk shape of a rules file: `{ "rules": [ ... ] }`.
///
/// Records stay untyped until [`collect_valid`] converts them one by one.
#[derive(Debug, Deserialize)]
struct RawRulesDocument<V> {
    #[serde(default = "Vec::new")]
    rules: Vec<V>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()).unwrap_or("json") {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(MenuSlotError::Config(format!(
                "Unsupported rules format '{other}' for {}",
                path.display()
            ))),
        }
    }

    /// Parse `contents`, keeping every record that converts and validates.
    ///
    /// Only a document that is unreadable as a whole is an error.
    fn parse_rules(self, contents: &str) -> Result<Vec<Rule>> {
        match self {
            Self::Json => {
                let raw: RawRulesDocument<serde_json::Value> =
                    serde_json::from_str(contents).map_err(InfraError::from)?;
                Ok(collect_valid(raw.rules, |record| {
                    serde_json::from_value(record).map_err(|e| InfraError::from(e).into())
                }))
            }
            Self::Toml => {
                let raw: RawRulesDocument<toml::Value> =
                    toml::from_str(contents).map_err(InfraError::from)?;
                Ok(collect_valid(raw.rules, |record| {
                    record.try_into::<Rule>().map_err(|e| InfraError::from(e).into())
                }))
            }
        }
    }
}

fn collect_valid<V>(records: Vec<V>, convert: impl Fn(V) -> Result<Rule>) -> Vec<Rule> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            match convert(record).and_then(|rule| rule.validate().map(|()| rule)) {
                Ok(rule) => Some(rule),
                Err(err) => {
                    warn!(index, error = %err, "skipping invalid rule record");
                    None
                }
            }
        })
        .collect()
}

/// `RuleRepository` over a JSON or TOML rules file
#[derive(Debug, Clone)]
pub struct FileRuleRepository {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileRuleRepository {
    /// # Errors
    /// Returns `MenuSlotError::Config` when the extension is neither `.json`
    /// nor `.toml`. The file itself is not touched until the first read.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = DocumentFormat::of(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every valid rule in the file, regardless of business or state.
    ///
    /// Records that fail to parse or fail [`Rule::validate`] are skipped with
    /// a warning.
    ///
    /// # Errors
    /// Returns `NotFound` when the file is missing, `Repository` for read or
    /// syntax failures and `InvalidInput` when the document's top level has
    /// the wrong shape.
    pub async fn load_all(&self) -> Result<Vec<Rule>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(InfraError::from)?;
        let rules = self.format.parse_rules(&contents)?;

        debug!(path = %self.path.display(), valid = rules.len(), "loaded rules document");
        Ok(rules)
    }
}

#[async_trait]
impl RuleRepository for FileRuleRepository {
    async fn list_active_rules(&self, business_id: &BusinessId) -> Result<Vec<Rule>> {
        let mut rules = self.load_all().await?;
        rules.retain(|rule| rule.is_active && &rule.business_id == business_id);
        Ok(rules)
    }
}

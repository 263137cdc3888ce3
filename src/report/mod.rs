// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run-report persistence.
//!
//! An optional JSON summary of a populate run, written when the user asks
//! for one. Useful for cron-driven scrapes where the console output is
//! not kept.

use crate::populate::LocaleOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub created_at: String,
    pub database: PathBuf,
    pub locales_requested: usize,
    pub locales_scraped: usize,
    pub locales_failed: usize,
    pub names_inserted: usize,
    pub outcomes: Vec<LocaleOutcome>,
}

impl RunReport {
    pub fn new(database: &Path, outcomes: Vec<LocaleOutcome>) -> Self {
        let locales_failed = outcomes
            .iter()
            .filter(|o| matches!(o, LocaleOutcome::Failed { .. }))
            .count();
        let names_inserted = outcomes.iter().map(LocaleOutcome::inserted_count).sum();

        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            database: database.to_path_buf(),
            locales_requested: outcomes.len(),
            locales_scraped: outcomes.len() - locales_failed,
            locales_failed,
            names_inserted,
            outcomes,
        }
    }

    /// Writes the report as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn counts_follow_the_outcomes() {
        let outcomes = vec![
            LocaleOutcome::Scraped {
                locale: "en".to_string(),
                inserted: BTreeSet::from(["fr".to_string(), "de".to_string()]),
            },
            LocaleOutcome::Failed {
                locale: "xx".to_string(),
                reason: "HTTP 404".to_string(),
            },
        ];

        let report = RunReport::new(Path::new("langNames.db"), outcomes);
        assert_eq!(report.locales_requested, 2);
        assert_eq!(report.locales_scraped, 1);
        assert_eq!(report.locales_failed, 1);
        assert_eq!(report.names_inserted, 2);
    }
}

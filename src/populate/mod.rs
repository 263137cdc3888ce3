// SPDX-License-Identifier: PMPL-1.0-or-later

//! The per-locale ingestion loop.
//!
//! For every requested locale: normalize the code, fetch its CLDR document,
//! extract the `<language>` entries, insert the qualifying ones. One locale
//! failing never stops the loop; every insert lands in a single transaction
//! committed after the last locale, so an aborted run leaves the database
//! untouched.

use crate::cldr::{self, NameSource};
use crate::iso639::LocaleCode;
use crate::storage;
use anyhow::Result;
use colored::Colorize;
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeSet;

/// What happened to one requested locale.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LocaleOutcome {
    /// The document was fetched and parsed; `inserted` holds the codes of
    /// every name stored for this locale.
    Scraped {
        locale: String,
        inserted: BTreeSet<String>,
    },
    /// Fetch, parse or insert failed; nothing of this locale was kept.
    Failed { locale: String, reason: String },
}

impl LocaleOutcome {
    pub fn inserted_count(&self) -> usize {
        match self {
            Self::Scraped { inserted, .. } => inserted.len(),
            Self::Failed { .. } => 0,
        }
    }
}

/// Fetches, extracts and inserts names for every requested locale.
///
/// When `filter` is set, only names whose language code is in the set are
/// stored, and the per-locale summary reports which codes of the set the
/// document did not provide.
pub fn populate(
    conn: &mut Connection,
    locales: &[String],
    filter: Option<&BTreeSet<String>>,
    source: &dyn NameSource,
) -> Result<Vec<LocaleOutcome>> {
    let tx = conn.transaction()?;
    let mut outcomes = Vec::with_capacity(locales.len());

    for requested in locales {
        let locale = LocaleCode::new(requested);
        let outcome = match scrape_locale(&tx, &locale, filter, source) {
            Ok(inserted) => {
                print_locale_summary(&locale, &inserted, filter);
                LocaleOutcome::Scraped {
                    locale: locale.normalized,
                    inserted,
                }
            }
            Err(e) => {
                println!(
                    "{}",
                    format!(
                        "Failed to retrieve language {}, exception: {:#}",
                        locale.normalized, e
                    )
                    .red()
                );
                LocaleOutcome::Failed {
                    locale: locale.normalized,
                    reason: format!("{e:#}"),
                }
            }
        };
        outcomes.push(outcome);
    }

    tx.commit()?;
    Ok(outcomes)
}

fn scrape_locale(
    conn: &Connection,
    locale: &LocaleCode,
    filter: Option<&BTreeSet<String>>,
    source: &dyn NameSource,
) -> Result<BTreeSet<String>> {
    let xml = source.fetch(&locale.normalized)?;
    let entries = cldr::extract_names(&xml)?;

    let mut inserted = BTreeSet::new();
    for entry in &entries {
        if filter.map_or(true, |set| set.contains(&entry.code)) {
            storage::insert_name(conn, &locale.normalized, &entry.code, &entry.name)?;
            inserted.insert(entry.code.clone());
        }
    }
    Ok(inserted)
}

/// The codes of the filter set that a locale's document did not provide.
/// Only meaningful in filtered runs; unfiltered runs have no expectation.
pub fn missing_codes<'a>(
    filter: Option<&'a BTreeSet<String>>,
    inserted: &'a BTreeSet<String>,
) -> Vec<&'a str> {
    filter
        .map(|set| set.difference(inserted).map(String::as_str).collect())
        .unwrap_or_default()
}

fn print_locale_summary(
    locale: &LocaleCode,
    inserted: &BTreeSet<String>,
    filter: Option<&BTreeSet<String>>,
) {
    let missing = missing_codes(filter, inserted);
    println!(
        "Scraped {} localized language names for {}, missing {} ({}).",
        inserted.len(),
        locale,
        missing.len(),
        missing.join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn missing_is_filter_minus_scraped() {
        let filter = set(&["fr", "de", "kaa"]);
        let inserted = set(&["fr"]);
        assert_eq!(
            missing_codes(Some(&filter), &inserted),
            vec!["de", "kaa"]
        );
    }

    #[test]
    fn unfiltered_runs_miss_nothing() {
        let inserted = set(&["fr", "de"]);
        assert!(missing_codes(None, &inserted).is_empty());
    }

    #[test]
    fn scraping_everything_misses_nothing() {
        let filter = set(&["fr"]);
        let inserted = set(&["fr", "de"]);
        assert!(missing_codes(Some(&filter), &inserted).is_empty());
    }
}

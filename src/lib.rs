// SPDX-License-Identifier: PMPL-1.0-or-later

//! langnames — localized language-name ingestion.
//!
//! Scrapes Unicode CLDR documents for language display names and stores
//! them as `(locale, language, name)` rows in SQLite, optionally restricted
//! to the languages the Apertium project has data for.
//!
//! PIPELINE:
//! 1. **discover**: assembles the Apertium language set from a built-in
//!    seed plus the project's SVN directory listings.
//! 2. **populate**: fetches one CLDR document per requested locale,
//!    extracts `<language>` entries and upserts them, isolating failures
//!    per locale.
//! 3. **storage**: the SQLite table with replace-on-conflict semantics
//!    over the `(lg, inLg)` pair.

pub mod cldr;
pub mod discover;
pub mod iso639;
pub mod populate;
pub mod report;
pub mod storage;

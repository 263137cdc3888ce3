// SPDX-License-Identifier: PMPL-1.0-or-later

//! CLDR document retrieval and language-name extraction.
//!
//! Each locale has one `main` document at unicode.org whose
//! `<language type="fr">francais</language>` elements carry the display
//! names written in that locale. Retrieval is behind [`NameSource`] so the
//! ingestion loop can run against fixture documents.

use anyhow::{Context, Result};
use std::time::Duration;

const CLDR_BASE: &str = "http://www.unicode.org/repos/cldr/tags/latest/common/main";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("langnames/", env!("CARGO_PKG_VERSION"));

/// One `<language>` entry from a CLDR main document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Code of the language being named (the element's `type` attribute).
    pub code: String,
    /// Display name in the document's locale.
    pub name: String,
}

/// Source of CLDR main documents, keyed by normalized locale code.
pub trait NameSource {
    fn fetch(&self, locale: &str) -> Result<String>;
}

/// Fetches documents from unicode.org over HTTP.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl NameSource for HttpSource {
    fn fetch(&self, locale: &str) -> Result<String> {
        let url = format!("{CLDR_BASE}/{locale}.xml");
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request failed: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {}: {}", response.status(), url);
        }

        response
            .text()
            .with_context(|| format!("failed to read body of {url}"))
    }
}

/// Extracts every `<language>` element, wherever it sits in the document,
/// that has a `type` attribute and non-empty text. Elements with empty or
/// absent text are skipped silently.
pub fn extract_names(xml: &str) -> Result<Vec<LanguageEntry>> {
    let doc = roxmltree::Document::parse(xml).context("XML parse error")?;

    let mut entries = Vec::new();
    for node in doc.descendants() {
        if !node.has_tag_name("language") {
            continue;
        }
        let Some(code) = node.attribute("type") else {
            continue;
        };
        match node.text() {
            Some(text) if !text.is_empty() => entries.push(LanguageEntry {
                code: code.to_string(),
                name: text.to_string(),
            }),
            _ => {}
        }
    }

    Ok(entries)
}

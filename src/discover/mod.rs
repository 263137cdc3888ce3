// SPDX-License-Identifier: PMPL-1.0-or-later

//! Apertium language-set discovery.
//!
//! Builds the set of language codes that have Apertium data, starting from
//! the codes the html-tools frontend ships with and adding every code found
//! in the project's SVN directory listings. Package names encode the codes:
//! `apertium-br-fr` is a translation pair, `apertium-kaz` a monolingual
//! package. Each repository directory is paired with the pattern matching
//! its naming convention, so adding a source is a table edit.

use crate::iso639::to_alpha2_code;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::process::Command;

const SVN_BASE: &str = "https://svn.code.sf.net/p/apertium/svn/";

/// Languages the html-tools frontend always supports, by 639-2/3 code.
const SEED_CODES: &[&str] = &[
    "arg", "heb", "cat", "sme", "deu", "eng", "eus", "fra", "spa", "ava", "nno", "nob", "oci",
    "por", "kaz", "kaa", "kir", "ron", "rus", "fin", "tat", "tur", "uig", "uzb", "zho", "srd",
    "swe",
];

// Add more manually as necessary.
const EXTRA_CODES: &[&str] = &["sr", "bs", "hr"];

/// Repository directories and the package-name pattern found in each.
/// The literal `apertium` capture in the trunk/languages patterns is
/// discarded during extraction.
const LISTING_PATTERNS: &[(&str, &str)] = &[
    ("incubator", r"<name>apertium-(\w{2,3})(?:-(\w{2,3}))?</name>"),
    ("nursery", r"<name>apertium-(\w{2,3})(?:-(\w{2,3}))?</name>"),
    ("staging", r"<name>apertium-(\w{2,3})(?:-(\w{2,3}))?</name>"),
    ("trunk", r"<name>(apertium)-(\w{2,3})-(\w{2,3})</name>"),
    ("languages", r"<name>(apertium)-(\w{3})</name>"),
    ("incubator", r"<name>(apertium)-(\w{3})</name>"),
];

/// Source of SVN directory listings in `svn list --xml` form.
pub trait ListingSource {
    fn list(&self, dir: &str) -> Result<String>;
}

/// Lists directories of the Apertium repository with the `svn` client.
pub struct SvnListing;

impl ListingSource for SvnListing {
    fn list(&self, dir: &str) -> Result<String> {
        let url = format!("{SVN_BASE}{dir}/");
        let output = Command::new("svn")
            .args(["list", "--xml", &url])
            .output()
            .with_context(|| format!("failed to run svn list for {url}"))?;

        if !output.status.success() {
            anyhow::bail!(
                "svn list {} exited with {}: {}",
                url,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// The built-in set: seed codes normalized, plus the manual extras.
pub fn seed_set() -> BTreeSet<String> {
    let mut set: BTreeSet<String> = SEED_CODES.iter().map(|code| to_alpha2_code(code)).collect();
    set.extend(EXTRA_CODES.iter().map(|code| (*code).to_string()));
    set
}

/// Adds every code matched by `pattern` in one listing to `set`,
/// normalized. The literal `apertium` token is not a code.
fn extract_codes(listing: &str, pattern: &Regex, set: &mut BTreeSet<String>) {
    for caps in pattern.captures_iter(listing) {
        for group in caps.iter().skip(1).flatten() {
            let code = group.as_str();
            if !code.is_empty() && code != "apertium" {
                set.insert(to_alpha2_code(code));
            }
        }
    }
}

/// Builds the full Apertium language set from the seed plus every
/// repository listing.
///
/// A failing listing aborts discovery: the set is only meaningful when all
/// sources contributed. Prints a one-line summary of what was found.
pub fn discover(source: &dyn ListingSource) -> Result<BTreeSet<String>> {
    let mut set = seed_set();

    for (dir, pattern) in LISTING_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        let listing = source.list(dir)?;
        extract_codes(&listing, &re, &mut set);
    }

    println!(
        "Found {} apertium languages: {}.",
        set.len(),
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_codes_are_normalized() {
        let set = seed_set();
        assert!(set.contains("an"), "arg normalizes to an");
        assert!(set.contains("se"), "sme normalizes to se");
        assert!(set.contains("kaa"), "kaa has no two-letter form");
        assert!(set.contains("sr"), "manual extras are kept");
        assert!(!set.contains("eng"), "three-letter seeds never survive");
    }

    #[test]
    fn pair_pattern_extracts_both_codes() {
        let listing = "<list><name>apertium-br-fr</name><name>apertium-kaz</name></list>";
        let re = Regex::new(r"<name>apertium-(\w{2,3})(?:-(\w{2,3}))?</name>").unwrap();
        let mut set = BTreeSet::new();
        extract_codes(listing, &re, &mut set);
        assert_eq!(
            set,
            BTreeSet::from(["br".to_string(), "fr".to_string(), "kk".to_string()])
        );
    }

    #[test]
    fn apertium_literal_is_discarded() {
        let listing = "<name>apertium-spa-arg</name>";
        let re = Regex::new(r"<name>(apertium)-(\w{2,3})-(\w{2,3})</name>").unwrap();
        let mut set = BTreeSet::new();
        extract_codes(listing, &re, &mut set);
        assert_eq!(set, BTreeSet::from(["es".to_string(), "an".to_string()]));
    }

    #[test]
    fn monolingual_pattern_matches_three_letter_packages() {
        let listing = "<name>apertium-tat</name><name>apertium-en-es</name>";
        let re = Regex::new(r"<name>(apertium)-(\w{3})</name>").unwrap();
        let mut set = BTreeSet::new();
        extract_codes(listing, &re, &mut set);
        assert_eq!(set, BTreeSet::from(["tt".to_string()]));
    }
}

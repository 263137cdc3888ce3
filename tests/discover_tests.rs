// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for Apertium language-set discovery

use anyhow::{anyhow, Result};
use langnames::discover::{self, ListingSource};

/// Serves one canned listing per repository directory.
struct FixtureListing;

impl ListingSource for FixtureListing {
    fn list(&self, dir: &str) -> Result<String> {
        let listing = match dir {
            "incubator" => "<list><name>apertium-quz</name><name>apertium-fin-sme</name></list>",
            "nursery" => "<list><name>apertium-isl-eng</name></list>",
            "staging" => "<list></list>",
            "trunk" => "<list><name>apertium-br-fr</name><name>README</name></list>",
            "languages" => "<list><name>apertium-hun</name></list>",
            other => return Err(anyhow!("no fixture for {other}")),
        };
        Ok(listing.to_string())
    }
}

/// Fails on one directory to prove discovery is fail-fast.
struct BrokenListing;

impl ListingSource for BrokenListing {
    fn list(&self, dir: &str) -> Result<String> {
        match dir {
            "incubator" => Ok("<list><name>apertium-hun</name></list>".to_string()),
            other => Err(anyhow!("svn: E170013: unable to connect ({other})")),
        }
    }
}

#[test]
fn test_discovery_unions_seed_and_listings() {
    let set = discover::discover(&FixtureListing).unwrap();

    // Seed codes, normalized.
    assert!(set.contains("en"));
    assert!(set.contains("kaa"));
    assert!(set.contains("hr"));

    // Discovered codes, normalized per directory pattern.
    assert!(set.contains("quz"), "three-letter code without alpha-2");
    assert!(set.contains("is"), "isl from the nursery pair");
    assert!(set.contains("br"), "pair codes from trunk");
    assert!(set.contains("hu"), "monolingual package from languages");

    assert!(!set.contains("apertium"), "the literal prefix is not a code");
}

#[test]
fn test_one_bad_listing_aborts_discovery() {
    let err = discover::discover(&BrokenListing).unwrap_err();
    assert!(err.to_string().contains("unable to connect"));
}

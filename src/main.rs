// SPDX-License-Identifier: PMPL-1.0-or-later

//! langnames: scrape Unicode CLDR for language names in different locales.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use langnames::cldr::HttpSource;
use langnames::discover::{self, SvnListing};
use langnames::populate;
use langnames::report::RunReport;
use langnames::storage;

#[derive(Parser)]
#[command(name = "langnames")]
#[command(version)]
#[command(about = "Scrape Unicode CLDR for language names in different locales")]
struct Cli {
    /// Locale codes to scrape and add to the database
    #[arg(value_name = "LANGUAGES")]
    languages: Vec<String>,

    /// Database file to populate (created if absent)
    #[arg(short, long, default_value = "../langNames.db")]
    database: PathBuf,

    /// Only save names of Apertium languages
    #[arg(short = 'n', long)]
    apertium_names: bool,

    /// Scrape localized names in all Apertium languages
    #[arg(short = 'l', long)]
    apertium_langs: bool,

    /// Write a JSON run report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Nothing to do without languages or a discovery flag. Help is printed
    // but the run still goes on to create the (empty) table.
    if cli.languages.is_empty() && !cli.apertium_names && !cli.apertium_langs {
        Cli::command().print_help()?;
        println!();
    }

    // Discovery is fail-fast: a single unreachable repository directory
    // aborts the run before the database is touched.
    let apertium = if cli.apertium_names || cli.apertium_langs {
        Some(discover::discover(&SvnListing)?)
    } else {
        None
    };

    let languages: Vec<String> = if cli.apertium_langs {
        apertium.iter().flatten().cloned().collect()
    } else {
        cli.languages
    };

    let filter = if cli.apertium_names {
        apertium.as_ref()
    } else {
        None
    };

    let mut conn = storage::open(&cli.database)?;
    let source = HttpSource::new()?;
    let outcomes = populate::populate(&mut conn, &languages, filter, &source)?;

    if let Some(path) = &cli.report {
        let report = RunReport::new(&cli.database, outcomes);
        report.save(path)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

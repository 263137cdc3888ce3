// SPDX-License-Identifier: PMPL-1.0-or-later

//! SQLite persistence for scraped language names.
//!
//! One table, `languageNames`, keyed by the `(lg, inLg)` pair: the locale
//! the name is written in and the language being named. Re-scraping a pair
//! replaces the earlier row.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS languageNames (
    id INTEGER PRIMARY KEY,
    lg TEXT,
    inLg TEXT,
    name TEXT,
    UNIQUE(lg, inLg) ON CONFLICT REPLACE
)";

/// Opens (creating if absent) the database file and ensures the schema.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database {}", path.display()))?;
    conn.execute(SCHEMA, [])
        .context("failed to create languageNames table")?;
    Ok(conn)
}

/// In-memory database with the same schema, for tests.
pub fn open_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    conn.execute(SCHEMA, [])
        .context("failed to create languageNames table")?;
    Ok(conn)
}

/// Inserts one `(lg, inLg, name)` row. An existing row for the same pair
/// is replaced.
pub fn insert_name(conn: &Connection, lg: &str, in_lg: &str, name: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO languageNames VALUES (NULL, ?1, ?2, ?3)",
        rusqlite::params![lg, in_lg, name],
    )
    .with_context(|| format!("failed to insert name for ({lg}, {in_lg})"))?;
    Ok(())
}

/// Looks up the stored display name for a pair.
pub fn name_for(conn: &Connection, lg: &str, in_lg: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT name FROM languageNames WHERE lg = ?1 AND inLg = ?2")?;
    let mut rows = stmt.query(rusqlite::params![lg, in_lg])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

/// Total number of stored rows.
pub fn count_names(conn: &Connection) -> Result<u64> {
    let count: u64 = conn.query_row("SELECT COUNT(*) FROM languageNames", [], |row| row.get(0))?;
    Ok(count)
}

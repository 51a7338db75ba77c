use std::fs;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

pub const SCHEMA: &str = "
    CREATE TABLE entries (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        section    TEXT,
        entry_type TEXT,
        content    TEXT
    );
";

/// Side files SQLite may leave next to the store.
const SIDE_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

/// A stored row. Columns are nullable because the loader keeps missing CSV
/// fields as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub section: Option<String>,
    pub entry_type: Option<String>,
    pub content: Option<String>,
}

/// A row waiting for its id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub section: Option<String>,
    pub entry_type: Option<String>,
    pub content: Option<String>,
}

// ── Building ──

/// Delete the store and its side files. Returns whether a store existed.
pub fn remove_store(path: &Path) -> Result<bool> {
    let existed = path.exists();
    if existed {
        fs::remove_file(path)?;
    }
    for suffix in SIDE_SUFFIXES {
        let mut side = path.as_os_str().to_owned();
        side.push(suffix);
        let side = Path::new(&side);
        if side.exists() {
            fs::remove_file(side)?;
        }
    }
    Ok(existed)
}

/// Create a fresh store at `path` holding an empty `entries` table.
/// Fails if the table already exists; call `remove_store` first.
pub fn create(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    debug!("Created store {}", path.display());
    Ok(conn)
}

/// Insert every row in one transaction, committed once at the end.
///
/// The first failing row (or upstream read error) aborts the insert before
/// commit, so nothing from this call is persisted.
pub fn insert_entries<I>(conn: &Connection, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<NewEntry>>,
{
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt =
            tx.prepare("INSERT INTO entries (section, entry_type, content) VALUES (?1, ?2, ?3)")?;
        for row in rows {
            let row = row?;
            stmt.execute(rusqlite::params![row.section, row.entry_type, row.content])?;
            count += 1;
        }
    }
    tx.commit()?;
    Ok(count)
}

// ── Querying ──

/// Open an existing store read-only; never creates one.
pub fn open_existing(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(Error::MissingStore(path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

pub fn fetch_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt =
        conn.prepare("SELECT id, section, entry_type, content FROM entries ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Entry {
                id: row.get(0)?,
                section: row.get(1)?,
                entry_type: row.get(2)?,
                content: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count_entries(conn: &Connection) -> Result<usize> {
    let count: usize = conn.query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))?;
    Ok(count)
}

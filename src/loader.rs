//! CSV → SQLite. Every run rebuilds the store from scratch: the old file is
//! deleted, never upserted into, so readers always see one complete scrape.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::csv::{self, HEADER};
use crate::db::{self, NewEntry};
use crate::record::EntryType;
use crate::{Error, Result};

/// Header position of each store column; `None` when the CSV lacks it.
struct Columns([Option<usize>; 3]);

impl Columns {
    fn from_header(header: &[String]) -> Self {
        Self(HEADER.map(|name| header.iter().position(|h| h == name)))
    }

    /// Missing fields become NULL, not empty strings.
    fn entry(&self, fields: &[String]) -> NewEntry {
        let get = |i: usize| self.0[i].and_then(|col| fields.get(col).cloned());
        NewEntry {
            section: get(0),
            entry_type: get(1),
            content: get(2),
        }
    }
}

/// Rebuild the store at `db_path` from the CSV at `csv_path`.
/// Returns the number of rows inserted.
pub fn load(csv_path: &Path, db_path: &Path) -> Result<usize> {
    if !csv_path.exists() {
        return Err(Error::MissingInput(csv_path.to_path_buf()));
    }

    if db::remove_store(db_path)? {
        info!("Removed existing store {}", db_path.display());
    }
    let conn = db::create(db_path)?;

    let mut reader = csv::Reader::new(BufReader::new(File::open(csv_path)?));
    let header = reader.read_record()?.ok_or_else(|| Error::Csv {
        line: 1,
        message: "missing header row".to_string(),
    })?;
    let columns = Columns::from_header(&header);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} rows")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let rows = reader
        .by_ref()
        .map(|fields| fields.map(|f| columns.entry(&f)))
        .inspect(|row| {
            pb.inc(1);
            if let Ok(entry) = row {
                flag_unknown_type(entry);
            }
        });
    let inserted = db::insert_entries(&conn, rows)?;

    pb.finish_and_clear();
    info!(
        "Inserted {} rows from {} CSV lines into {}",
        inserted,
        reader.line(),
        db_path.display()
    );
    Ok(inserted)
}

/// Unknown tags are stored as-is; the store does not constrain the column.
fn flag_unknown_type(entry: &NewEntry) {
    if let Some(tag) = entry.entry_type.as_deref() {
        if tag.parse::<EntryType>().is_err() {
            let section = entry.section.as_deref().unwrap_or("");
            warn!("Unknown entry_type {:?} in section {:?}", tag, section);
        }
    }
}

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::mem::take;
use std::path::Path;

use tracing::info;

use crate::record::Record;
use crate::{Error, Result};

pub const HEADER: [&str; 3] = ["section", "entry_type", "content"];

/// Written explicitly so output does not depend on the platform.
const TERMINATOR: &str = "\r\n";

// ── Writing ──

/// Write one row with every field quoted and embedded quotes doubled.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
    }
    w.write_all(TERMINATOR.as_bytes())
}

/// Write header plus one row per record, replacing whatever is at `path`.
pub fn write_records(path: &Path, records: &[Record]) -> Result<usize> {
    let mut w = BufWriter::new(File::create(path)?);
    write_row(&mut w, &HEADER)?;
    for r in records {
        write_row(&mut w, &[r.section.as_str(), r.entry_type.as_str(), r.content.as_str()])?;
    }
    w.flush()?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

// ── Reading ──

/// Streaming reader for the quoted CSV written above.
///
/// A record may span several physical lines when a quoted field holds a
/// newline; the newline is kept verbatim. Blank lines between records are
/// skipped.
pub struct Reader<R> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Physical lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next record's fields, or `None` at end of input.
    pub fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut has_content = false;
        let start_line = self.line + 1;

        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                if in_quotes {
                    return Err(Error::Csv {
                        line: start_line,
                        message: "unterminated quoted field".to_string(),
                    });
                }
                if !has_content {
                    return Ok(None);
                }
                fields.push(field);
                return Ok(Some(fields));
            }
            self.line += 1;

            let mut chars = self.buf.chars().peekable();
            while let Some(ch) = chars.next() {
                match ch {
                    '"' if in_quotes => {
                        if chars.peek() == Some(&'"') {
                            chars.next(); // doubled quote
                            field.push('"');
                        } else {
                            in_quotes = false;
                        }
                    }
                    '"' if field.is_empty() => {
                        in_quotes = true;
                        has_content = true;
                    }
                    ',' if !in_quotes => {
                        fields.push(take(&mut field));
                        has_content = true;
                    }
                    '\r' | '\n' if !in_quotes => break,
                    c => {
                        field.push(c);
                        has_content = true;
                    }
                }
            }

            if in_quotes {
                continue;
            }
            if !has_content {
                continue; // blank line
            }
            fields.push(field);
            return Ok(Some(fields));
        }
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

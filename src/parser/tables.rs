use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::text::element_text;
use crate::record::{EntryType, Record};

static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());
static WIKITABLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.wikitable").unwrap());

pub const CELL_SEPARATOR: &str = " | ";

/// Flatten a table: one line per row, header and data cells joined by ` | `.
/// Rows without any cell are skipped; rows of blank cells are kept.
pub fn table_to_text(table: &ElementRef) -> String {
    table
        .select(&ROW_SEL)
        .filter_map(|tr| {
            let cells: Vec<String> = tr.select(&CELL_SEL).map(|td| element_text(&td)).collect();
            if cells.is_empty() {
                None
            } else {
                Some(cells.join(CELL_SEPARATOR))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every `table.wikitable` in document order, regardless of headings.
pub fn wikitables(doc: &Html) -> impl Iterator<Item = Record> + '_ {
    doc.select(&WIKITABLE_SEL).enumerate().map(|(idx, table)| {
        Record::new(table_title(&table, idx), EntryType::Table, table_to_text(&table))
    })
}

/// `summary` attribute, then `<caption>`, then `wikitable_<n>` (1-based).
fn table_title(table: &ElementRef, idx: usize) -> String {
    if let Some(summary) = table.value().attr("summary").filter(|s| !s.is_empty()) {
        return summary.to_string();
    }
    table
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "caption")
        .map(|caption| element_text(&caption))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("wikitable_{}", idx + 1))
}

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::tables::table_to_text;
use super::text::{element_text, strip_citation};
use crate::record::{EntryType, Record};

static HEADING_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2, h3, h4").unwrap());
static ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

const KEYWORD: &str = "odds";
const HEADING_WRAPPER_CLASS: &str = "mw-heading";

/// Records from every h2-h4 section whose heading mentions "odds".
///
/// Each section runs from its heading up to (not including) the next h2-h4
/// sibling. Headings are visited in document order, so nested matches (an h3
/// "odds" section inside an h2 "odds" section) each produce their own records.
pub fn odds_sections(doc: &Html) -> impl Iterator<Item = Record> + '_ {
    doc.select(&HEADING_SEL)
        .filter_map(|heading| {
            let title = element_text(&heading);
            title
                .to_lowercase()
                .contains(KEYWORD)
                .then(|| (heading, strip_citation(&title)))
        })
        .flat_map(|(heading, section)| section_records(heading, section))
}

fn section_records(heading: ElementRef<'_>, section: String) -> impl Iterator<Item = Record> + '_ {
    walk_start(heading)
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !is_boundary(el))
        .flat_map(move |el| sibling_records(el, &section))
}

fn sibling_records(el: ElementRef, section: &str) -> Vec<Record> {
    match el.value().name() {
        "p" => vec![Record::new(section, EntryType::Paragraph, element_text(&el))],
        "ul" | "ol" => el
            .select(&ITEM_SEL)
            .map(|li| Record::new(section, EntryType::ListItem, element_text(&li)))
            .collect(),
        "table" => vec![Record::new(section, EntryType::Table, table_to_text(&el))],
        _ => Vec::new(),
    }
}

fn is_heading(el: &ElementRef) -> bool {
    matches!(el.value().name(), "h2" | "h3" | "h4")
}

/// `<div class="mw-heading">` wrapping an h2-h4, as current MediaWiki renders headings.
fn is_heading_wrapper(el: &ElementRef) -> bool {
    el.value().name() == "div"
        && el.value().classes().any(|c| c == HEADING_WRAPPER_CLASS)
        && el.select(&HEADING_SEL).next().is_some()
}

fn is_boundary(el: &ElementRef) -> bool {
    is_heading(el) || is_heading_wrapper(el)
}

/// Wrapped headings have no content siblings of their own; walk from the wrapper.
fn walk_start(heading: ElementRef<'_>) -> ElementRef<'_> {
    match heading.parent().and_then(ElementRef::wrap) {
        Some(parent) if is_heading_wrapper(&parent) => parent,
        _ => heading,
    }
}

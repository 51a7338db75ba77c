pub mod sections;
pub mod tables;
pub mod text;

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::warn;

use crate::record::{EntryType, Record};

static INTRO_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#mw-content-text p").unwrap());

pub const INTRO_SECTION: &str = "intro";

/// A parsed page, ready to be flattened into records.
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Two passes over the page: "odds" heading sections, then every
    /// wikitable. If neither yields anything, the first paragraph of the main
    /// content becomes a single `intro` record.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        let mut primary = sections::odds_sections(&self.document)
            .chain(tables::wikitables(&self.document))
            .peekable();

        let fallback = if primary.peek().is_none() {
            warn!("No odds sections or wikitables found; falling back to the page intro");
            self.intro()
        } else {
            None
        };

        primary.chain(fallback)
    }

    fn intro(&self) -> Option<Record> {
        self.document
            .select(&INTRO_SEL)
            .next()
            .map(|p| Record::new(INTRO_SECTION, EntryType::Paragraph, text::element_text(&p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Record> {
        let html = std::fs::read_to_string("tests/fixtures/sports_betting.html").unwrap();
        Page::parse(&html).records().collect()
    }

    #[test]
    fn fixture_records() {
        let recs = fixture();
        let summary: Vec<(&str, EntryType)> = recs
            .iter()
            .map(|r| (r.section.as_str(), r.entry_type))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Odds formats", EntryType::Paragraph),
                ("Odds formats", EntryType::ListItem),
                ("Odds formats", EntryType::ListItem),
                ("Odds formats", EntryType::ListItem),
                ("Odds formats", EntryType::Table),
                ("Calculating implied odds", EntryType::Paragraph),
                ("Odds conversion", EntryType::Table),
                ("Common bet types", EntryType::Table),
                ("wikitable_3", EntryType::Table),
            ]
        );
        assert_eq!(recs[0].content, "Odds are expressed in several ways.");
        assert_eq!(recs[2].content, "Fractional odds");
        assert_eq!(
            recs[4].content,
            "Decimal | Fractional | Moneyline\n2.00 | 1/1 | +100\n1.50 | 1/2 | -200"
        );
        assert_eq!(recs[7].content, "Type | Description\nSpread | Handicap, by points");
    }

    #[test]
    fn fixture_sections_respect_boundaries() {
        let recs = fixture();
        for r in recs.iter().filter(|r| r.section == "Odds formats") {
            assert!(!r.content.contains("Implied probability"), "leaked: {:?}", r);
        }
        for r in recs.iter().filter(|r| r.section == "Calculating implied odds") {
            assert!(!r.content.contains("Moneyline, spread"), "leaked: {:?}", r);
        }
        assert!(recs.iter().all(|r| !r.content.contains("long history")));
    }

    #[test]
    fn every_record_has_known_type() {
        let pages = [
            std::fs::read_to_string("tests/fixtures/sports_betting.html").unwrap(),
            "<h2>Odds</h2><p></p><ul><li></li></ul><table><tr></tr></table>".to_string(),
            "<div id=\"mw-content-text\"><p>only intro</p></div>".to_string(),
            String::new(),
        ];
        for html in &pages {
            for r in Page::parse(html).records() {
                assert!(EntryType::ALL.contains(&r.entry_type));
            }
        }
    }

    #[test]
    fn falls_back_to_intro() {
        let page = Page::parse(
            r#"<h2>History</h2><div id="mw-content-text"><div><p>First   paragraph.</p><p>Second.</p></div></div>"#,
        );
        let recs: Vec<Record> = page.records().collect();
        assert_eq!(recs, vec![Record::new("intro", EntryType::Paragraph, "First paragraph.")]);
    }

    #[test]
    fn no_intro_means_no_records() {
        let page = Page::parse("<h2>History</h2><p>outside main content</p>");
        assert_eq!(page.records().count(), 0);
    }

    #[test]
    fn intro_not_used_when_wikitable_found() {
        let page = Page::parse(
            r#"<div id="mw-content-text"><p>Intro</p><table class="wikitable"><tr><td>x</td></tr></table></div>"#,
        );
        let recs: Vec<Record> = page.records().collect();
        assert_eq!(recs, vec![Record::new("wikitable_1", EntryType::Table, "x")]);
    }
}

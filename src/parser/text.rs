use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]$").unwrap());

/// Elements whose text is never rendered.
const HIDDEN_TAGS: [&str; 3] = ["style", "script", "noscript"];

/// Visible text of an element: every whitespace run collapsed to one space,
/// text nodes joined by a space, no leading or trailing whitespace. Text
/// inside `style`, `script` and `noscript` is left out.
pub fn element_text(el: &ElementRef) -> String {
    let root = el.id();
    el.descendants()
        .filter(|node| {
            !node
                .ancestors()
                .take_while(|a| a.id() != root)
                .filter_map(|a| a.value().as_element())
                .any(|e| HIDDEN_TAGS.contains(&e.name()))
        })
        .filter_map(|node| node.value().as_text())
        .flat_map(|t| t.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop one trailing `[n]` citation marker, e.g. `Odds[3]` -> `Odds`.
pub fn strip_citation(title: &str) -> String {
    CITATION_RE.replace(title, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_text(html: &str, sel: &str) -> String {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse(sel).unwrap();
        let el = doc.select(&sel).next().unwrap();
        element_text(&el)
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            first_text("<p>  Odds are\n   <b>often</b>quoted </p>", "p"),
            "Odds are often quoted"
        );
    }

    #[test]
    fn skips_style_and_script() {
        assert_eq!(
            first_text(
                "<p><style>.mw-parser-output .hatnote{font-style:italic}</style>Visible \
                 <script>var x=1;</script>text<noscript><span>no js</span></noscript>.</p>",
                "p"
            ),
            "Visible text ."
        );
    }

    #[test]
    fn empty_element() {
        assert_eq!(first_text("<p>  \n </p>", "p"), "");
    }

    #[test]
    fn strips_single_citation() {
        assert_eq!(strip_citation("Odds[12]"), "Odds");
        assert_eq!(strip_citation("Odds [3]"), "Odds");
        assert_eq!(strip_citation("Odds[1][2]"), "Odds[1]");
        assert_eq!(strip_citation("Odds [a]"), "Odds [a]");
        assert_eq!(strip_citation("[4] Odds"), "[4] Odds");
    }
}

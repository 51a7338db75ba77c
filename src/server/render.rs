use std::borrow::Cow;

use html_escape::encode_text;

use crate::db::Entry;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sports betting odds</title>
<style>
  body { font-family: sans-serif; margin: 2rem; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #ccc; padding: 0.4rem; text-align: left; vertical-align: top; }
  th { background: #f4f4f4; }
  td.content { white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Sports betting odds</h1>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Full HTML listing of the entries, in the order given.
pub fn entries_page(entries: &[Entry]) -> String {
    let mut html = String::with_capacity(HEAD.len() + TAIL.len() + entries.len() * 128);
    html.push_str(HEAD);

    if entries.is_empty() {
        html.push_str("<p>No entries.</p>\n");
    } else {
        html.push_str(&format!("<p>{} entries</p>\n", entries.len()));
        html.push_str("<table>\n<tr><th>ID</th><th>Section</th><th>Type</th><th>Content</th></tr>\n");
        for e in entries {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"content\">{}</td></tr>\n",
                e.id,
                cell(&e.section),
                cell(&e.entry_type),
                cell(&e.content),
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str(TAIL);
    html
}

fn cell(value: &Option<String>) -> Cow<'_, str> {
    value.as_deref().map(|v| encode_text(v)).unwrap_or(Cow::Borrowed(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing() {
        let html = entries_page(&[]);
        assert!(html.contains("No entries."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn one_row_per_entry() {
        let entries = vec![
            Entry {
                id: 1,
                section: Some("Odds".into()),
                entry_type: Some("table".into()),
                content: Some("a | b\nc | d".into()),
            },
            Entry {
                id: 2,
                section: None,
                entry_type: Some("paragraph".into()),
                content: None,
            },
        ];
        let html = entries_page(&entries);
        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.contains("<td class=\"content\">a | b\nc | d</td>"));
        assert!(html.contains("<tr><td>2</td><td></td>"));
    }
}

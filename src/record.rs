use std::fmt;
use std::str::FromStr;

/// Kind of content an entry carries; decides how `content` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Paragraph,
    ListItem,
    /// Rows separated by `\n`, cells by ` | `
    Table,
}

impl EntryType {
    pub const ALL: [EntryType; 3] = [EntryType::Paragraph, EntryType::ListItem, EntryType::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Paragraph => "paragraph",
            EntryType::ListItem => "list_item",
            EntryType::Table => "table",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown entry type: {}", s))
    }
}

/// One flattened piece of scraped content. The store assigns the id later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub section: String,
    pub entry_type: EntryType,
    pub content: String,
}

impl Record {
    pub fn new(section: impl Into<String>, entry_type: EntryType, content: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            entry_type,
            content: content.into(),
        }
    }
}

use serde_json::Value;

use super::{RecordKey, collect_identifiers, int_field, text_field};

/// One appearance of a title on a weekly bestseller list
/// (`nyt_bestsellers.json`). The same book shows up once per week it charts.
#[derive(Debug, Clone, PartialEq)]
pub struct BestsellerRecord {
    pub title: String,
    pub author: String,
    pub isbn_13: Option<String>,
    pub isbn_10: Option<String>,
    /// `None` when the list reports no rank (including `0`).
    pub rank: Option<u32>,
    pub weeks_on_list: u32,
    pub bestseller_date: Option<String>,
    pub list_name: Option<String>,
}

impl BestsellerRecord {
    pub fn from_json(v: &Value) -> Self {
        Self {
            title: text_field(v, "title").unwrap_or_default(),
            author: text_field(v, "author").unwrap_or_default(),
            isbn_13: text_field(v, "primary_isbn13"),
            isbn_10: text_field(v, "primary_isbn10"),
            rank: int_field(v, "rank")
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0),
            weeks_on_list: int_field(v, "weeks_on_list")
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            bestseller_date: text_field(v, "bestseller_date"),
            list_name: text_field(v, "list_name"),
        }
    }

    /// List entries carry no publication year.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            title: self.title.clone(),
            author: self.author.clone(),
            year: None,
            identifiers: collect_identifiers([self.isbn_13.as_ref(), self.isbn_10.as_ref()]),
        }
    }
}

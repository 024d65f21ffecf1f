use litmerge_core::ReceptionMetrics;
use serde_json::Value;

use super::{
    RecordKey, collect_identifiers, count_field, float_field, string_list, text_field, year_field,
};
use crate::normalize::author_string;

/// A search hit from the public-library catalog (`openlibrary_books.json`).
#[derive(Debug, Clone, PartialEq)]
pub struct OpenLibraryRecord {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub isbns: Vec<String>,
    pub reception: ReceptionMetrics,
    pub openlibrary_key: Option<String>,
}

impl OpenLibraryRecord {
    pub fn from_json(v: &Value) -> Self {
        Self {
            title: text_field(v, "title").unwrap_or_default(),
            author: author_string(v.get("authors")).trim().to_string(),
            year: year_field(v, "year"),
            isbns: string_list(v, "isbn"),
            reception: ReceptionMetrics {
                ratings_average: float_field(v, "ratings_average"),
                ratings_count: count_field(v, "ratings_count"),
                want_to_read_count: count_field(v, "want_to_read_count"),
                currently_reading_count: count_field(v, "currently_reading_count"),
                already_read_count: count_field(v, "already_read_count"),
            },
            openlibrary_key: text_field(v, "openlibrary_key"),
        }
    }

    /// The catalog lists ISBNs without marking which is preferred, so its
    /// own order is kept.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            identifiers: collect_identifiers(self.isbns.iter().map(Some)),
        }
    }
}

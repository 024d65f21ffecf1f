use serde_json::Value;

use super::{RecordKey, collect_identifiers, int_field, string_list, text_field, year_field};
use crate::normalize::author_string;

/// A volume from the general book catalog (`google_books.json`).
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleBooksRecord {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub publisher: Option<String>,
    pub isbn_13: Option<String>,
    pub isbn_10: Option<String>,
    pub categories: Vec<String>,
    /// `0` from the API means unknown and is stored as `None`.
    pub page_count: Option<u32>,
    pub language: Option<String>,
    pub google_books_id: Option<String>,
}

impl GoogleBooksRecord {
    pub fn from_json(v: &Value) -> Self {
        Self {
            title: text_field(v, "title").unwrap_or_default(),
            author: author_string(v.get("authors")).trim().to_string(),
            year: year_field(v, "year"),
            publisher: text_field(v, "publisher"),
            isbn_13: text_field(v, "isbn_13"),
            isbn_10: text_field(v, "isbn_10"),
            categories: string_list(v, "categories"),
            page_count: int_field(v, "page_count")
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0),
            language: text_field(v, "language"),
            google_books_id: text_field(v, "google_books_id"),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            identifiers: collect_identifiers([self.isbn_13.as_ref(), self.isbn_10.as_ref()]),
        }
    }
}

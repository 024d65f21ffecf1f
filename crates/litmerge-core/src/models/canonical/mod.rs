mod commercial;
mod metadata;
mod reception;

pub use commercial::*;
pub use metadata::*;
pub use reception::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AwardEntry, SourceKind};

/// Placeholder the upstream fetchers write when an identifier is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// The merged representation of one physical book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,

    #[serde(default)]
    pub isbn_all: Vec<String>,
    pub isbn_13: Option<String>,
    pub isbn_10: Option<String>,

    /// Source-native keys (`google_books_id`, `openlibrary_key`).
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,

    #[serde(default)]
    pub awards: Vec<AwardEntry>,
    #[serde(default)]
    pub award_count: u32,
    #[serde(default)]
    pub won_award: bool,
    #[serde(default)]
    pub shortlisted: bool,

    #[serde(flatten)]
    pub reception: ReceptionMetrics,

    #[serde(flatten)]
    pub commercial: BestsellerStats,

    #[serde(flatten)]
    pub metadata: DescriptiveMetadata,

    #[serde(default)]
    pub sources: Vec<SourceKind>,
}

impl CanonicalBook {
    /// A fresh record with every accumulator at its empty state.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: Option<i32>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year,
            isbn_all: Vec::new(),
            isbn_13: None,
            isbn_10: None,
            identifiers: BTreeMap::new(),
            awards: Vec::new(),
            award_count: 0,
            won_award: false,
            shortlisted: false,
            reception: ReceptionMetrics::default(),
            commercial: BestsellerStats::default(),
            metadata: DescriptiveMetadata::default(),
            sources: Vec::new(),
        }
    }

    /// Adds an ISBN to `isbn_all`. Returns `false` when the value was empty,
    /// the `N/A` sentinel, or already present.
    ///
    /// Primary ISBN-13/ISBN-10 slots are assigned by string length only.
    pub fn add_identifier(&mut self, isbn: &str) -> bool {
        if isbn.is_empty() || isbn == NOT_AVAILABLE {
            return false;
        }
        if self.has_identifier(isbn) {
            return false;
        }

        self.isbn_all.push(isbn.to_string());
        match isbn.chars().count() {
            13 if self.isbn_13.is_none() => self.isbn_13 = Some(isbn.to_string()),
            10 if self.isbn_10.is_none() => self.isbn_10 = Some(isbn.to_string()),
            _ => {}
        }
        true
    }

    pub fn has_identifier(&self, isbn: &str) -> bool {
        self.isbn_all.iter().any(|known| known == isbn)
    }

    pub fn add_source(&mut self, source: SourceKind) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    /// Year is first-non-null-wins.
    pub fn fill_year(&mut self, year: Option<i32>) {
        if self.year.is_none() {
            self.year = year;
        }
    }

    pub fn set_native_id(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty() && *v != NOT_AVAILABLE) {
            self.identifiers.insert(key.to_string(), value.to_string());
        }
    }

    pub fn has_awards(&self) -> bool {
        self.award_count > 0
    }

    pub fn has_multiple_sources(&self) -> bool {
        self.sources.len() > 1
    }

    pub fn has_isbn(&self) -> bool {
        !self.isbn_all.is_empty()
    }
}

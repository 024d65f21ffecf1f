//! Typed views over the loosely-shaped records each upstream dataset emits.
//!
//! Every adapter reads a raw JSON object and produces a [`RecordKey`] (the
//! identity fields the resolver works with) plus its source-specific payload.

pub mod awards;
pub mod google_books;
pub mod nyt;
pub mod openlibrary;

pub use awards::AwardRecord;
pub use google_books::GoogleBooksRecord;
pub use nyt::BestsellerRecord;
pub use openlibrary::OpenLibraryRecord;

use litmerge_core::{NOT_AVAILABLE, SourceKind};
use serde_json::Value;

/// Identity fields shared by every source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    /// ISBNs in the source's preference order (ISBN-13 first).
    pub identifiers: Vec<String>,
}

impl RecordKey {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    Award(AwardRecord),
    GoogleBooks(GoogleBooksRecord),
    OpenLibrary(OpenLibraryRecord),
    Bestseller(BestsellerRecord),
}

impl SourceRecord {
    pub fn from_json(kind: SourceKind, value: &Value) -> Self {
        match kind {
            SourceKind::Awards => Self::Award(AwardRecord::from_json(value)),
            SourceKind::GoogleBooks => Self::GoogleBooks(GoogleBooksRecord::from_json(value)),
            SourceKind::OpenLibrary => Self::OpenLibrary(OpenLibraryRecord::from_json(value)),
            SourceKind::NytBestsellers => Self::Bestseller(BestsellerRecord::from_json(value)),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Award(_) => SourceKind::Awards,
            Self::GoogleBooks(_) => SourceKind::GoogleBooks,
            Self::OpenLibrary(_) => SourceKind::OpenLibrary,
            Self::Bestseller(_) => SourceKind::NytBestsellers,
        }
    }

    pub fn key(&self) -> RecordKey {
        match self {
            Self::Award(record) => record.key(),
            Self::GoogleBooks(record) => record.key(),
            Self::OpenLibrary(record) => record.key(),
            Self::Bestseller(record) => record.key(),
        }
    }
}

// ─── JSON field helpers ────────────────────────────────────

/// A trimmed, non-empty string that is not the `N/A` placeholder.
pub(crate) fn text_field(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != NOT_AVAILABLE)
        .map(ToOwned::to_owned)
}

/// Integers arrive as JSON numbers, occasionally as numeric strings.
pub(crate) fn int_field(v: &Value, key: &str) -> Option<i64> {
    match v.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn year_field(v: &Value, key: &str) -> Option<i32> {
    int_field(v, key).and_then(|n| i32::try_from(n).ok())
}

pub(crate) fn count_field(v: &Value, key: &str) -> u64 {
    int_field(v, key)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

pub(crate) fn float_field(v: &Value, key: &str) -> Option<f64> {
    v.get(key).and_then(Value::as_f64)
}

pub(crate) fn string_list(v: &Value, key: &str) -> Vec<String> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty() && *s != NOT_AVAILABLE)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn collect_identifiers<'a>(values: impl IntoIterator<Item = Option<&'a String>>) -> Vec<String> {
    let mut identifiers: Vec<String> = Vec::new();
    for value in values.into_iter().flatten() {
        if !identifiers.contains(value) {
            identifiers.push(value.clone());
        }
    }
    identifiers
}

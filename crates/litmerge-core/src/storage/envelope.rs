use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CanonicalBook, SourceKind};

pub const MERGED_FILE: &str = "merged_literary_books.json";
pub const REPORT_FILE: &str = "merge_report.json";

pub fn unmatched_file_name(source: SourceKind) -> String {
    format!("unmatched_{source}.json")
}

/// `merged_literary_books.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedDataset {
    pub metadata: DatasetMetadata,
    pub books: Vec<CanonicalBook>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub created_date: DateTime<Local>,
    pub total_books: usize,
    pub sources: Vec<SourceKind>,
    pub description: String,
}

impl MergedDataset {
    pub fn new(books: Vec<CanonicalBook>, created_date: DateTime<Local>) -> Self {
        Self {
            metadata: DatasetMetadata {
                created_date,
                total_books: books.len(),
                sources: SourceKind::ALL.to_vec(),
                description: "Merged dataset combining award data with book metadata and reception metrics"
                    .to_string(),
            },
            books,
        }
    }
}

/// `unmatched_<source>.json`: source records passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedDataset {
    pub metadata: UnmatchedMetadata,
    pub entries: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedMetadata {
    pub source: SourceKind,
    pub created_date: DateTime<Local>,
    pub total_unmatched: usize,
    pub description: String,
}

impl UnmatchedDataset {
    pub fn new(source: SourceKind, entries: Vec<Value>, created_date: DateTime<Local>) -> Self {
        Self {
            metadata: UnmatchedMetadata {
                source,
                created_date,
                total_unmatched: entries.len(),
                description: format!("Unmatched entries from {source} that could not be merged"),
            },
            entries,
        }
    }
}

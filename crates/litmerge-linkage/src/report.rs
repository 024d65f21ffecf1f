//! Statistical summary of a merge run.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use litmerge_core::{CanonicalBook, SourceKind};

use crate::stats::{MergeStats, SourceStats};

pub const REPORT_DESCRIPTION: &str = "Statistical report of dataset merge operation";

const TABLE_WIDTH: usize = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeReport {
    pub merge_summary: MergeSummary,
    pub source_datasets: SourceDatasets,
    pub merged_dataset: MergedDatasetSummary,
    pub data_quality: DataQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub created_date: DateTime<Local>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDatasets {
    pub awards: SourceSummary,
    pub google_books: SourceSummary,
    pub openlibrary: SourceSummary,
    pub nyt_bestsellers: SourceSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub total_entries: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub match_rate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<usize>,
}

impl SourceSummary {
    fn from_stats(kind: SourceKind, stats: &SourceStats) -> Self {
        Self {
            total_entries: stats.total,
            matched: stats.matched,
            unmatched: stats.unmatched,
            match_rate: stats.match_rate(),
            out_of_range: (kind == SourceKind::Awards).then_some(stats.out_of_range),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedDatasetSummary {
    pub total_unique_books: usize,
    pub books_with_awards: usize,
    pub books_with_reception_data: usize,
    pub books_on_bestseller_list: usize,
    pub books_with_multiple_sources: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    pub books_with_isbn: usize,
    pub books_with_ratings: usize,
    pub award_winning_books: usize,
    pub bestsellers: usize,
}

impl MergeReport {
    /// Builds the report. Pure: the timestamp is passed in.
    pub fn generate(books: &[CanonicalBook], stats: &MergeStats, created_date: DateTime<Local>) -> Self {
        let count = |pred: fn(&CanonicalBook) -> bool| books.iter().filter(|b| pred(b)).count();

        Self {
            merge_summary: MergeSummary {
                created_date,
                description: REPORT_DESCRIPTION.to_string(),
            },
            source_datasets: SourceDatasets {
                awards: SourceSummary::from_stats(SourceKind::Awards, &stats.awards),
                google_books: SourceSummary::from_stats(SourceKind::GoogleBooks, &stats.google_books),
                openlibrary: SourceSummary::from_stats(SourceKind::OpenLibrary, &stats.openlibrary),
                nyt_bestsellers: SourceSummary::from_stats(
                    SourceKind::NytBestsellers,
                    &stats.nyt_bestsellers,
                ),
            },
            merged_dataset: MergedDatasetSummary {
                total_unique_books: books.len(),
                books_with_awards: count(CanonicalBook::has_awards),
                books_with_reception_data: count(|b| b.reception.has_ratings()),
                books_on_bestseller_list: count(|b| b.commercial.is_bestseller()),
                books_with_multiple_sources: count(CanonicalBook::has_multiple_sources),
            },
            data_quality: DataQuality {
                books_with_isbn: count(CanonicalBook::has_isbn),
                books_with_ratings: count(|b| b.reception.ratings_average.is_some()),
                award_winning_books: count(|b| b.won_award),
                bestsellers: count(|b| b.commercial.is_bestseller()),
            },
        }
    }

    pub fn source(&self, kind: SourceKind) -> &SourceSummary {
        match kind {
            SourceKind::Awards => &self.source_datasets.awards,
            SourceKind::GoogleBooks => &self.source_datasets.google_books,
            SourceKind::OpenLibrary => &self.source_datasets.openlibrary,
            SourceKind::NytBestsellers => &self.source_datasets.nyt_bestsellers,
        }
    }

    /// Plain-text statistics table followed by the merged-dataset tallies.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(TABLE_WIDTH);

        let _ = writeln!(out, "MERGE STATISTICS:");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<10} {:<10} {:<10}",
            "Source", "Total", "Matched", "Unmatched", "Match Rate"
        );
        let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
        for kind in SourceKind::ALL {
            let s = self.source(kind);
            let _ = writeln!(
                out,
                "{:<20} {:<10} {:<10} {:<10} {:<10}",
                kind.as_str(),
                s.total_entries,
                s.matched,
                s.unmatched,
                s.match_rate
            );
        }
        let _ = writeln!(out, "{rule}");

        let merged = &self.merged_dataset;
        let _ = writeln!(out);
        let _ = writeln!(out, "MERGED DATASET:");
        let _ = writeln!(out, "   Total unique books: {}", merged.total_unique_books);
        let _ = writeln!(out, "   Books with awards: {}", merged.books_with_awards);
        let _ = writeln!(out, "   Books with reception data: {}", merged.books_with_reception_data);
        let _ = writeln!(out, "   Books on bestseller list: {}", merged.books_on_bestseller_list);
        let _ = writeln!(out, "   Books from multiple sources: {}", merged.books_with_multiple_sources);
        if let Some(skipped) = self.source_datasets.awards.out_of_range
            && skipped > 0
        {
            let _ = writeln!(out, "   Award entries outside year range: {skipped}");
        }
        out
    }
}

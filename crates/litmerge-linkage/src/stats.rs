use serde::{Deserialize, Serialize};

use litmerge_core::SourceKind;

/// Counters for one source phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Award entries dropped by the year window. Zero for other sources.
    #[serde(default)]
    pub out_of_range: usize,
}

impl SourceStats {
    /// `"12.5%"`, or `"0%"` for an empty source.
    pub fn match_rate(&self) -> String {
        if self.total == 0 {
            return "0%".to_string();
        }
        format!("{:.1}%", self.matched as f64 / self.total as f64 * 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    pub awards: SourceStats,
    pub google_books: SourceStats,
    pub openlibrary: SourceStats,
    pub nyt_bestsellers: SourceStats,
}

impl MergeStats {
    pub fn source(&self, kind: SourceKind) -> &SourceStats {
        match kind {
            SourceKind::Awards => &self.awards,
            SourceKind::GoogleBooks => &self.google_books,
            SourceKind::OpenLibrary => &self.openlibrary,
            SourceKind::NytBestsellers => &self.nyt_bestsellers,
        }
    }

    pub fn source_mut(&mut self, kind: SourceKind) -> &mut SourceStats {
        match kind {
            SourceKind::Awards => &mut self.awards,
            SourceKind::GoogleBooks => &mut self.google_books,
            SourceKind::OpenLibrary => &mut self.openlibrary,
            SourceKind::NytBestsellers => &mut self.nyt_bestsellers,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceKind, &SourceStats)> {
        SourceKind::ALL.into_iter().map(|kind| (kind, self.source(kind)))
    }
}

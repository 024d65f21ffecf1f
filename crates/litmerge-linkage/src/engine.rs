//! The merge engine: resolves source records to canonical books and folds
//! their attributes in, one source phase at a time.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use litmerge_core::{CanonicalBook, MatchingConfig, SourceKind};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::matcher::{FuzzyMatcher, IdentityMatcher};
use crate::merge::MergeSource;
use crate::sources::SourceRecord;
use crate::stats::MergeStats;
use crate::store::{CanonicalStore, Resolution};

pub const DEFAULT_YEAR_FROM: i32 = 2020;
pub const DEFAULT_YEAR_TO: i32 = 2025;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub books: Vec<CanonicalBook>,
    pub stats: MergeStats,
    /// Raw records per source that did not land on an existing book.
    pub unmatched: BTreeMap<SourceKind, Vec<Value>>,
}

impl MergeOutcome {
    pub fn unmatched(&self, kind: SourceKind) -> &[Value] {
        self.unmatched.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }
}

pub struct MergeEngine<M: IdentityMatcher = FuzzyMatcher> {
    matcher: M,
    award_years: RangeInclusive<i32>,
    store: CanonicalStore,
    stats: MergeStats,
    unmatched: BTreeMap<SourceKind, Vec<Value>>,
}

impl Default for MergeEngine<FuzzyMatcher> {
    fn default() -> Self {
        Self::with_matcher(FuzzyMatcher::default())
    }
}

impl MergeEngine<FuzzyMatcher> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::with_matcher(FuzzyMatcher::new().with_threshold(config.fuzzy_threshold))
            .with_award_years(config.year_from, config.year_to)
    }
}

impl<M: IdentityMatcher> MergeEngine<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            award_years: DEFAULT_YEAR_FROM..=DEFAULT_YEAR_TO,
            store: CanonicalStore::new(),
            stats: MergeStats::default(),
            unmatched: BTreeMap::new(),
        }
    }

    /// Only award entries whose year falls inside the window are merged.
    pub fn with_award_years(mut self, from: i32, to: i32) -> Self {
        self.award_years = from..=to;
        self
    }

    pub fn books(&self) -> &[CanonicalBook] {
        self.store.books()
    }

    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    pub fn unmatched(&self, kind: SourceKind) -> &[Value] {
        self.unmatched.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn merge_awards(&mut self, records: &[Value]) {
        self.merge_phase(SourceKind::Awards, records);
    }

    pub fn merge_google_books(&mut self, records: &[Value]) {
        self.merge_phase(SourceKind::GoogleBooks, records);
    }

    pub fn merge_openlibrary(&mut self, records: &[Value]) {
        self.merge_phase(SourceKind::OpenLibrary, records);
    }

    pub fn merge_bestsellers(&mut self, records: &[Value]) {
        self.merge_phase(SourceKind::NytBestsellers, records);
    }

    /// Runs one source phase over its raw records.
    pub fn merge_phase(&mut self, kind: SourceKind, records: &[Value]) {
        info!("Merging {} data: {} entries", kind.display_name(), records.len());
        self.stats.source_mut(kind).total += records.len();

        for raw in records {
            let record = SourceRecord::from_json(kind, raw);
            if let SourceRecord::Award(award) = &record
                && !award.in_year_range(*self.award_years.start(), *self.award_years.end())
            {
                self.stats.awards.out_of_range += 1;
                continue;
            }
            self.merge_record(record, raw);
        }

        let stats = self.stats.source(kind);
        info!(
            "{}: matched {}, unmatched {}",
            kind.display_name(),
            stats.matched,
            stats.unmatched
        );
    }

    fn merge_record(&mut self, record: SourceRecord, raw: &Value) {
        let kind = record.kind();
        let key = record.key();

        let unusable = !key.has_title() || (kind == SourceKind::Awards && !key.has_author());
        if unusable {
            warn!(source = %kind, "skipping record without title or author");
            self.route_unmatched(kind, raw);
            return;
        }

        let resolution = self.store.resolve(
            &self.matcher,
            &key.title,
            &key.author,
            key.year,
            &key.identifiers,
        );
        let index = resolution.index();
        self.store.add_identifiers(index, &key.identifiers);
        if let Some(book) = self.store.get_mut(index) {
            book.merge_source(&record);
            match &record {
                SourceRecord::Bestseller(entry) => debug!(
                    source = %kind,
                    book = %book.id,
                    list = entry.list_name.as_deref().unwrap_or_default(),
                    ?resolution,
                    "merged record"
                ),
                _ => debug!(source = %kind, book = %book.id, ?resolution, "merged record"),
            }
        }

        // Awards are the identity anchor: every usable entry counts as merged.
        if resolution.is_match() || kind == SourceKind::Awards {
            self.stats.source_mut(kind).matched += 1;
        } else {
            self.route_unmatched(kind, raw);
        }
    }

    fn route_unmatched(&mut self, kind: SourceKind, raw: &Value) {
        self.stats.source_mut(kind).unmatched += 1;
        self.unmatched.entry(kind).or_default().push(raw.clone());
    }

    pub fn finish(self) -> MergeOutcome {
        MergeOutcome {
            books: self.store.into_books(),
            stats: self.stats,
            unmatched: self.unmatched,
        }
    }
}

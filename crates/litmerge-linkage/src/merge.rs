//! Per-source attribute merge rules.
//!
//! ISBNs are not touched here: they are added through the store so its
//! identifier index stays in sync.

use litmerge_core::CanonicalBook;

use crate::sources::{
    AwardRecord, BestsellerRecord, GoogleBooksRecord, OpenLibraryRecord, SourceRecord,
};

pub const GOOGLE_BOOKS_ID: &str = "google_books_id";
pub const OPENLIBRARY_KEY: &str = "openlibrary_key";

pub trait MergeSource {
    fn merge_source(&mut self, record: &SourceRecord);
}

impl MergeSource for CanonicalBook {
    fn merge_source(&mut self, record: &SourceRecord) {
        match record {
            SourceRecord::Award(award) => merge_award(self, award),
            SourceRecord::GoogleBooks(volume) => merge_google_books(self, volume),
            SourceRecord::OpenLibrary(hit) => merge_openlibrary(self, hit),
            SourceRecord::Bestseller(entry) => merge_bestseller(self, entry),
        }
        self.fill_year(record.key().year);
        self.add_source(record.kind());
    }
}

/// Awards are never deduplicated: a book on two prize lists carries two
/// entries, and the winner/shortlist flags only ever go up.
fn merge_award(book: &mut CanonicalBook, award: &AwardRecord) {
    book.awards.push(award.entry());
    book.award_count = book.award_count.saturating_add(1);
    if award.status.is_winner() {
        book.won_award = true;
    }
    if award.status.is_shortlisted() {
        book.shortlisted = true;
    }
}

fn merge_google_books(book: &mut CanonicalBook, volume: &GoogleBooksRecord) {
    book.metadata.fill_publisher(volume.publisher.as_deref());
    book.metadata.fill_page_count(volume.page_count);
    book.metadata.fill_language(volume.language.as_deref());
    book.metadata.add_categories(&volume.categories);
    book.set_native_id(GOOGLE_BOOKS_ID, volume.google_books_id.as_deref());
}

// Reception counters are snapshots; the latest one replaces the rest.
fn merge_openlibrary(book: &mut CanonicalBook, hit: &OpenLibraryRecord) {
    book.reception = hit.reception.clone();
    book.set_native_id(OPENLIBRARY_KEY, hit.openlibrary_key.as_deref());
}

fn merge_bestseller(book: &mut CanonicalBook, entry: &BestsellerRecord) {
    book.commercial.record_appearance(
        entry.rank,
        entry.weeks_on_list,
        entry.bestseller_date.as_deref(),
    );
}

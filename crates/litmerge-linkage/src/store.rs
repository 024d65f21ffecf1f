//! Arena of canonical books for one merge run.
//!
//! Books are only ever appended, so an index into the arena is a stable
//! handle and iteration order is creation order.

use std::collections::{HashMap, HashSet};

use litmerge_core::CanonicalBook;

use crate::matcher::IdentityMatcher;
use crate::normalize::{normalize, record_id};

/// How an incoming record was tied to a canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Identifier(usize),
    Fuzzy(usize),
    Created(usize),
}

impl Resolution {
    pub fn index(self) -> usize {
        match self {
            Self::Identifier(index) | Self::Fuzzy(index) | Self::Created(index) => index,
        }
    }

    /// `true` when the record landed on a book that already existed.
    pub fn is_match(self) -> bool {
        !matches!(self, Self::Created(_))
    }
}

#[derive(Debug, Default)]
pub struct CanonicalStore {
    books: Vec<CanonicalBook>,
    /// Normalized (title, author) per book, parallel to `books`.
    match_keys: Vec<(String, String)>,
    /// ISBN to the lowest arena index holding it.
    by_identifier: HashMap<String, usize>,
    /// Ids handed out so far.
    ids: HashSet<String>,
}

impl CanonicalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CanonicalBook> {
        self.books.get(index)
    }

    /// Mutable access for attribute merging. ISBNs must go through
    /// [`CanonicalStore::add_identifier`] so the index stays in sync.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CanonicalBook> {
        self.books.get_mut(index)
    }

    pub fn books(&self) -> &[CanonicalBook] {
        &self.books
    }

    pub fn into_books(self) -> Vec<CanonicalBook> {
        self.books
    }

    /// First book, in creation order, holding any of `identifiers`; the
    /// identifiers are tried in the order given.
    pub fn resolve_by_identifier(&self, identifiers: &[String]) -> Option<usize> {
        identifiers
            .iter()
            .find_map(|isbn| self.by_identifier.get(isbn).copied())
    }

    /// First book, in creation order, the matcher accepts. Not the best
    /// scoring one.
    pub fn resolve_by_fuzzy<M>(&self, matcher: &M, title: &str, author: &str) -> Option<usize>
    where
        M: IdentityMatcher + ?Sized,
    {
        let title = normalize(title);
        let author = normalize(author);
        self.match_keys
            .iter()
            .position(|(known_title, known_author)| {
                matcher.same_normalized(&title, &author, known_title, known_author)
            })
    }

    /// Identifiers first, then fuzzy title/author (skipped without an
    /// author), then a new book.
    pub fn resolve<M>(
        &mut self,
        matcher: &M,
        title: &str,
        author: &str,
        year: Option<i32>,
        identifiers: &[String],
    ) -> Resolution
    where
        M: IdentityMatcher + ?Sized,
    {
        if let Some(index) = self.resolve_by_identifier(identifiers) {
            return Resolution::Identifier(index);
        }
        if !author.is_empty()
            && let Some(index) = self.resolve_by_fuzzy(matcher, title, author)
        {
            return Resolution::Fuzzy(index);
        }
        Resolution::Created(self.create(title, author, year))
    }

    /// Appends a fresh book and returns its index. The id gets a `_2`,
    /// `_3`, ... suffix when the derived one is already taken.
    pub fn create(&mut self, title: &str, author: &str, year: Option<i32>) -> usize {
        let id = self.unique_id(record_id(title, author));
        let index = self.books.len();

        self.ids.insert(id.clone());
        self.match_keys.push((normalize(title), normalize(author)));
        self.books.push(CanonicalBook::new(id, title, author, year));
        index
    }

    /// Adds an ISBN to the book at `index` and indexes it.
    pub fn add_identifier(&mut self, index: usize, isbn: &str) -> bool {
        let Some(book) = self.books.get_mut(index) else {
            return false;
        };
        if !book.add_identifier(isbn) {
            return false;
        }
        self.by_identifier
            .entry(isbn.to_string())
            .and_modify(|known| *known = (*known).min(index))
            .or_insert(index);
        true
    }

    pub fn add_identifiers(&mut self, index: usize, identifiers: &[String]) {
        for isbn in identifiers {
            self.add_identifier(index, isbn);
        }
    }

    fn unique_id(&self, base: String) -> String {
        if !self.ids.contains(&base) {
            return base;
        }
        (2..)
            .map(|n| format!("{base}_{n}"))
            .find(|candidate| !self.ids.contains(candidate))
            .unwrap_or(base)
    }
}

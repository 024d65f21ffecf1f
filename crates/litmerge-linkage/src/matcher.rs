use crate::normalize::normalize;
use crate::similarity::similarity;

pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Decides whether two (title, author) pairs describe the same book when no
/// identifier links them.
pub trait IdentityMatcher {
    /// Compares pairs that already went through [`normalize`].
    fn same_normalized(&self, title1: &str, author1: &str, title2: &str, author2: &str) -> bool;

    fn same_book(&self, title1: &str, author1: &str, title2: &str, author2: &str) -> bool {
        self.same_normalized(
            &normalize(title1),
            &normalize(author1),
            &normalize(title2),
            &normalize(author2),
        )
    }
}

/// Conjunctive title/author gate: both similarities must reach the threshold.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Title and author similarity of already-normalized pairs.
    pub fn scores(&self, title1: &str, author1: &str, title2: &str, author2: &str) -> (f64, f64) {
        (similarity(title1, title2), similarity(author1, author2))
    }
}

impl IdentityMatcher for FuzzyMatcher {
    fn same_normalized(&self, title1: &str, author1: &str, title2: &str, author2: &str) -> bool {
        let (title_score, author_score) = self.scores(title1, author1, title2, author2);
        title_score >= self.threshold && author_score >= self.threshold
    }
}

/// [`FuzzyMatcher`] with an explicit threshold, as a free function.
pub fn fuzzy_match(title1: &str, author1: &str, title2: &str, author2: &str, threshold: f64) -> bool {
    FuzzyMatcher::new()
        .with_threshold(threshold)
        .same_book(title1, author1, title2, author2)
}

//! litmerge linkage: record resolution and merging across the book sources.

pub mod engine;
pub mod error;
pub mod matcher;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod similarity;
pub mod sources;
pub mod stats;
pub mod store;

pub use engine::{MergeEngine, MergeOutcome};
pub use error::{LinkageError, Result};
pub use matcher::{DEFAULT_THRESHOLD, FuzzyMatcher, IdentityMatcher, fuzzy_match};
pub use normalize::{normalize, record_id};
pub use pipeline::{MergePipeline, MergeRun};
pub use report::MergeReport;
pub use similarity::similarity;
pub use sources::{RecordKey, SourceRecord};
pub use stats::{MergeStats, SourceStats};
pub use store::{CanonicalStore, Resolution};

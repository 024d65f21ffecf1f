use serde::{Deserialize, Serialize};

/// Reader-reception counters from the public-library catalog.
///
/// These are snapshots, not tallies: each catalog record replaces the
/// previous values wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceptionMetrics {
    pub ratings_average: Option<f64>,
    #[serde(default)]
    pub ratings_count: u64,
    #[serde(default)]
    pub want_to_read_count: u64,
    #[serde(default)]
    pub currently_reading_count: u64,
    #[serde(default)]
    pub already_read_count: u64,
}

impl ReceptionMetrics {
    pub fn has_ratings(&self) -> bool {
        self.ratings_count > 0
    }
}

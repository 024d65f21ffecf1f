use litmerge_core::{AwardEntry, AwardStatus};
use serde_json::Value;

use super::{RecordKey, text_field, year_field};

/// One row of a prize registry (`booker_prize.json`, ...).
///
/// Registry rows carry no identifiers, so they only ever resolve by title
/// and author.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardRecord {
    pub year: Option<i32>,
    pub award: String,
    pub status: AwardStatus,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
}

impl AwardRecord {
    pub fn from_json(v: &Value) -> Self {
        Self {
            year: year_field(v, "Year"),
            award: text_field(v, "Award").unwrap_or_default(),
            status: AwardStatus::from(text_field(v, "Status").unwrap_or_default()),
            title: text_field(v, "Title").unwrap_or_default(),
            author: text_field(v, "Author").unwrap_or_default(),
            publisher: text_field(v, "Publisher"),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            identifiers: Vec::new(),
        }
    }

    pub fn in_year_range(&self, from: i32, to: i32) -> bool {
        self.year.is_some_and(|year| (from..=to).contains(&year))
    }

    pub fn entry(&self) -> AwardEntry {
        AwardEntry {
            award: self.award.clone(),
            year: self.year,
            status: self.status.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

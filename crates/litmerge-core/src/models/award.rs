use serde::{Deserialize, Serialize};

/// Outcome of a book in a prize cycle, as listed in the award registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AwardStatus {
    Winner,
    Finalist,
    Shortlist,
    Longlist,
    /// Anything the registry scrapers emit that is not one of the above.
    Other(String),
}

impl AwardStatus {
    pub fn is_winner(&self) -> bool {
        matches!(self, Self::Winner)
    }

    /// Finalists and shortlisted titles both count as shortlisted.
    pub fn is_shortlisted(&self) -> bool {
        matches!(self, Self::Shortlist | Self::Finalist)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Winner => "Winner",
            Self::Finalist => "Finalist",
            Self::Shortlist => "Shortlist",
            Self::Longlist => "Longlist",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AwardStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Winner" => Self::Winner,
            "Finalist" => Self::Finalist,
            "Shortlist" => Self::Shortlist,
            "Longlist" => Self::Longlist,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for AwardStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<AwardStatus> for String {
    fn from(status: AwardStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for AwardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One award-registry line attached to a canonical book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardEntry {
    pub award: String,
    pub year: Option<i32>,
    pub status: AwardStatus,
    pub publisher: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flags() {
        assert!(AwardStatus::Winner.is_winner());
        assert!(!AwardStatus::Winner.is_shortlisted());
        assert!(AwardStatus::Finalist.is_shortlisted());
        assert!(AwardStatus::Shortlist.is_shortlisted());
        assert!(!AwardStatus::Longlist.is_shortlisted());
        assert!(!AwardStatus::Longlist.is_winner());
    }

    #[test]
    fn test_unknown_status_survives_serialization() {
        let status: AwardStatus = serde_json::from_str("\"Honorable Mention\"").unwrap();
        assert_eq!(status, AwardStatus::Other("Honorable Mention".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Honorable Mention\"");
    }

    #[test]
    fn test_award_entry_json_shape() {
        let entry = AwardEntry {
            award: "Booker Prize".to_string(),
            year: Some(2023),
            status: AwardStatus::Shortlist,
            publisher: None,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["award"], "Booker Prize");
        assert_eq!(value["status"], "Shortlist");
        assert!(value["publisher"].is_null());
    }
}

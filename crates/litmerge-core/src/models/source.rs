use serde::{Deserialize, Serialize};

/// The four upstream datasets, in the order the pipeline merges them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "awards")]
    Awards,
    #[serde(rename = "google_books")]
    GoogleBooks,
    #[serde(rename = "openlibrary")]
    OpenLibrary,
    #[serde(rename = "nyt_bestsellers")]
    NytBestsellers,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Awards,
        SourceKind::GoogleBooks,
        SourceKind::OpenLibrary,
        SourceKind::NytBestsellers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awards => "awards",
            Self::GoogleBooks => "google_books",
            Self::OpenLibrary => "openlibrary",
            Self::NytBestsellers => "nyt_bestsellers",
        }
    }

    /// Heading used in log lines and the statistics table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Awards => "Awards",
            Self::GoogleBooks => "Google Books",
            Self::OpenLibrary => "Open Library",
            Self::NytBestsellers => "NYT Bestsellers",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awards" => Ok(Self::Awards),
            "google_books" => Ok(Self::GoogleBooks),
            "openlibrary" => Ok(Self::OpenLibrary),
            "nyt_bestsellers" => Ok(Self::NytBestsellers),
            _ => Err(format!("Invalid SourceKind: {s}")),
        }
    }
}

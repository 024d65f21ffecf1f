use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LitmergeError, Result};

/// Root application configuration, loaded from `~/.config/litmerge/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub matching: MatchingConfig,
    pub inputs: InputsConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: String,
    pub output_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity for both title and author in a fuzzy match.
    pub fuzzy_threshold: f64,
    /// Inclusive award-year window.
    pub year_from: i32,
    pub year_to: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub award_files: Vec<String>,
    pub google_books: String,
    pub openlibrary: String,
    pub nyt_bestsellers: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub backup_existing: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            output_dir: "merged_data".to_string(),
            backup_dir: None,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.85,
            year_from: 2020,
            year_to: 2025,
        }
    }
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            award_files: vec![
                "booker_prize.json".to_string(),
                "national_book_award.json".to_string(),
                "pulitzer_prize.json".to_string(),
            ],
            google_books: "google_books.json".to_string(),
            openlibrary: "openlibrary_books.json".to_string(),
            nyt_bestsellers: "nyt_bestsellers.json".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            backup_existing: true,
            pretty: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/litmerge/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("LITMERGE_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("litmerge")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.matching.fuzzy_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(LitmergeError::ConfigError(format!(
                "matching.fuzzy_threshold must be within [0, 1], got {threshold}"
            )));
        }
        if self.matching.year_from > self.matching.year_to {
            return Err(LitmergeError::ConfigError(format!(
                "matching.year_from ({}) is after matching.year_to ({})",
                self.matching.year_from, self.matching.year_to
            )));
        }
        Ok(())
    }

    // ─── Derived paths ─────────────────────────────────────

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.data_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.output_dir)
    }

    /// Backup directory; defaults to `<output_dir>_backup` next to the output dir.
    pub fn backup_dir(&self) -> PathBuf {
        if let Some(dir) = &self.paths.backup_dir {
            return PathBuf::from(dir);
        }
        let output = self.output_dir();
        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "output".to_string());
        output.with_file_name(format!("{name}_backup"))
    }

    pub fn award_paths(&self) -> Vec<PathBuf> {
        let data = self.data_dir();
        self.inputs.award_files.iter().map(|f| data.join(f)).collect()
    }

    pub fn google_books_path(&self) -> PathBuf {
        self.data_dir().join(&self.inputs.google_books)
    }

    pub fn openlibrary_path(&self) -> PathBuf {
        self.data_dir().join(&self.inputs.openlibrary)
    }

    pub fn nyt_bestsellers_path(&self) -> PathBuf {
        self.data_dir().join(&self.inputs.nyt_bestsellers)
    }
}

pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::{AppConfig, MatchingConfig};
pub use error::{ExitCode, LitmergeError, Result};
pub use models::*;

pub use storage::backup::backup_file_if_exists;
pub use storage::envelope::{MergedDataset, UnmatchedDataset};
pub use storage::json_files::{load_all_records, load_records, write_json};

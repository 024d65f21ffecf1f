use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Copy an existing, non-empty file into `backup_dir` before it is overwritten.
///
/// The copy is named `<stem>_<YYYYMMDDHHMMSS>.<ext>`. Returns the backup path,
/// or `None` when there was nothing worth keeping.
pub fn backup_file_if_exists(path: &Path, backup_dir: &Path) -> Result<Option<PathBuf>> {
    let stamp = Local::now().format("%Y%m%d%H%M%S").to_string();
    backup_file_with_stamp(path, backup_dir, &stamp)
}

pub fn backup_file_with_stamp(
    path: &Path,
    backup_dir: &Path,
    stamp: &str,
) -> Result<Option<PathBuf>> {
    if !path.exists() || fs::metadata(path)?.len() == 0 {
        return Ok(None);
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };

    fs::create_dir_all(backup_dir)?;
    let backup_path = backup_dir.join(file_name);
    fs::copy(path, &backup_path)?;
    tracing::info!("Backed up existing file: {}", backup_path.display());
    Ok(Some(backup_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_copies_with_timestamp() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("merge_report.json");
        fs::write(&file, "{\"a\": 1}").unwrap();
        let backups = dir.path().join("merged_data_backup");

        let copied = backup_file_with_stamp(&file, &backups, "20250101120000")
            .unwrap()
            .unwrap();
        assert_eq!(copied, backups.join("merge_report_20250101120000.json"));
        assert_eq!(fs::read_to_string(copied).unwrap(), "{\"a\": 1}");
        assert!(file.exists());
    }

    #[test]
    fn test_missing_or_empty_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let backups = dir.path().join("bk");

        let missing = dir.path().join("missing.json");
        assert!(backup_file_if_exists(&missing, &backups).unwrap().is_none());

        let empty = dir.path().join("empty.json");
        fs::write(&empty, "").unwrap();
        assert!(backup_file_if_exists(&empty, &backups).unwrap().is_none());
        assert!(!backups.exists());
    }
}

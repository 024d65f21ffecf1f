//! File-level driver: loads each source in its fixed phase order, runs the
//! engine, and writes the dataset files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use litmerge_core::storage::envelope::{MERGED_FILE, REPORT_FILE, unmatched_file_name};
use litmerge_core::{
    AppConfig, MergedDataset, SourceKind, UnmatchedDataset, backup_file_if_exists,
    load_all_records, load_records, write_json,
};
use tracing::{info, warn};

use crate::engine::{MergeEngine, MergeOutcome};
use crate::error::{LinkageError, Result};
use crate::report::MergeReport;

/// Result of one pipeline run, before anything is written.
#[derive(Debug, Clone)]
pub struct MergeRun {
    pub outcome: MergeOutcome,
    pub report: MergeReport,
    pub created_date: DateTime<Local>,
}

pub struct MergePipeline {
    config: AppConfig,
}

impl MergePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Merges awards, then the general catalog, then the library catalog,
    /// then bestsellers. Later phases can only attach to books created by
    /// earlier ones, so the order is fixed.
    pub fn run(&self) -> Result<MergeRun> {
        let matching = &self.config.matching;
        if !(0.0..=1.0).contains(&matching.fuzzy_threshold) {
            return Err(LinkageError::InvalidThreshold(matching.fuzzy_threshold));
        }

        let mut engine = MergeEngine::from_config(matching);
        for kind in SourceKind::ALL {
            let records = self.load_phase(kind)?;
            engine.merge_phase(kind, &records);
        }

        let created_date = Local::now();
        let outcome = engine.finish();
        let report = MergeReport::generate(&outcome.books, &outcome.stats, created_date);
        info!("Merge complete: {} unique books", outcome.books.len());

        Ok(MergeRun {
            outcome,
            report,
            created_date,
        })
    }

    fn load_phase(&self, kind: SourceKind) -> Result<Vec<serde_json::Value>> {
        let loaded = match kind {
            SourceKind::Awards => load_all_records(&self.config.award_paths()),
            SourceKind::GoogleBooks => load_records(&self.config.google_books_path()),
            SourceKind::OpenLibrary => load_records(&self.config.openlibrary_path()),
            SourceKind::NytBestsellers => load_records(&self.config.nyt_bestsellers_path()),
        };
        loaded.map_err(|err| LinkageError::phase(kind, err))
    }

    /// Writes the merged dataset, one unmatched file per source that has
    /// entries, and the report. Returns the written paths.
    pub fn write_outputs(&self, run: &MergeRun) -> Result<Vec<PathBuf>> {
        let output_dir = self.config.output_dir();
        let mut written = Vec::new();

        let merged = MergedDataset::new(run.outcome.books.clone(), run.created_date);
        written.push(self.write_file(&output_dir.join(MERGED_FILE), &merged)?);
        info!("Saved merged dataset: {MERGED_FILE} ({} books)", merged.metadata.total_books);

        for kind in SourceKind::ALL {
            let entries = run.outcome.unmatched(kind);
            if entries.is_empty() {
                continue;
            }
            let name = unmatched_file_name(kind);
            let dataset = UnmatchedDataset::new(kind, entries.to_vec(), run.created_date);
            written.push(self.write_file(&output_dir.join(&name), &dataset)?);
            info!("Saved unmatched data: {name} ({} entries)", entries.len());
        }

        written.push(self.write_file(&output_dir.join(REPORT_FILE), &run.report)?);
        info!("Saved merge report: {REPORT_FILE}");
        Ok(written)
    }

    fn write_file<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<PathBuf> {
        if self.config.output.backup_existing
            && let Err(err) = backup_file_if_exists(path, &self.config.backup_dir())
        {
            warn!("Backup of {} failed: {err}", path.display());
        }
        Ok(write_json(path, value, self.config.output.pretty)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use litmerge_core::LitmergeError;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn write(path: &Path, value: Value) {
        fs::write(path, serde_json::to_string(&value).unwrap()).unwrap();
    }

    fn seed_data(dir: &Path) {
        write(
            &dir.join("booker_prize.json"),
            json!([
                {"Year": 2022, "Award": "Booker Prize", "Status": "Shortlist",
                 "Title": "Glory", "Author": "NoViolet Bulawayo"},
                {"Year": 2015, "Award": "Booker Prize", "Status": "Winner",
                 "Title": "A Brief History of Seven Killings", "Author": "Marlon James"}
            ]),
        );
        write(&dir.join("national_book_award.json"), json!([]));
        write(
            &dir.join("pulitzer_prize.json"),
            json!([
                {"Year": 2023, "Award": "Pulitzer Prize for Fiction", "Status": "Winner",
                 "Title": "Demon Copperhead", "Author": "Barbara Kingsolver", "Publisher": "Harper"}
            ]),
        );
        write(
            &dir.join("google_books.json"),
            json!({"metadata": {"total_books": 2}, "books": [
                {"title": "Demon Copperhead", "authors": ["Barbara Kingsolver"],
                 "isbn_13": "9780063251922", "publisher": "Harper", "year": 2022},
                {"title": "Lessons in Chemistry", "authors": ["Bonnie Garmus"],
                 "isbn_13": "9780385547345", "year": 2022}
            ]}),
        );
        write(
            &dir.join("openlibrary_books.json"),
            json!({"books": [
                {"title": "Lessons in Chemistry", "authors": ["Bonnie Garmus"],
                 "isbn": ["9780385547345"], "ratings_average": 4.3, "ratings_count": 512}
            ]}),
        );
        write(
            &dir.join("nyt_bestsellers.json"),
            json!({"books": [
                {"title": "DEMON COPPERHEAD", "author": "Barbara Kingsolver",
                 "rank": 2, "weeks_on_list": 10,
                 "bestseller_date": "2023-01-01"},
                {"title": "", "author": "Nobody"}
            ]}),
        );
    }

    fn config_for(root: &TempDir) -> AppConfig {
        let data = root.path().join("data");
        fs::create_dir_all(&data).unwrap();
        seed_data(&data);

        let mut config = AppConfig::default();
        config.paths.data_dir = data.to_string_lossy().to_string();
        config.paths.output_dir = root.path().join("merged_data").to_string_lossy().to_string();
        config
    }

    #[test]
    fn run_merges_all_sources_in_order() {
        let root = TempDir::new().unwrap();
        let run = MergePipeline::new(config_for(&root)).run().unwrap();

        let books = &run.outcome.books;
        assert_eq!(books.len(), 3);
        let demon = books.iter().find(|b| b.title == "Demon Copperhead").unwrap();
        assert_eq!(
            demon.sources,
            vec![SourceKind::Awards, SourceKind::GoogleBooks, SourceKind::NytBestsellers]
        );
        assert!(demon.won_award);
        assert_eq!(demon.isbn_all, vec!["9780063251922"]);
        assert_eq!(demon.commercial.total_weeks_on_bestseller, 10);

        let stats = &run.outcome.stats;
        assert_eq!(stats.awards.total, 3);
        assert_eq!(stats.awards.out_of_range, 1);
        assert_eq!(stats.awards.matched, 2);
        assert_eq!(stats.google_books.matched, 1);
        assert_eq!(stats.google_books.unmatched, 1);
        assert_eq!(stats.openlibrary.matched, 1);
        assert_eq!(stats.nyt_bestsellers.matched, 1);
        assert_eq!(stats.nyt_bestsellers.unmatched, 1);
        assert_eq!(run.report.merged_dataset.total_unique_books, 3);
    }

    #[test]
    fn write_outputs_creates_dataset_files() {
        let root = TempDir::new().unwrap();
        let pipeline = MergePipeline::new(config_for(&root));
        let run = pipeline.run().unwrap();
        let written = pipeline.write_outputs(&run).unwrap();

        let out = root.path().join("merged_data");
        assert!(written.contains(&out.join(MERGED_FILE)));
        assert!(out.join(REPORT_FILE).exists());
        assert!(out.join("unmatched_google_books.json").exists());
        assert!(out.join("unmatched_nyt_bestsellers.json").exists());
        assert!(!out.join("unmatched_awards.json").exists());
        assert!(!out.join("unmatched_openlibrary.json").exists());

        let merged: Value =
            serde_json::from_str(&fs::read_to_string(out.join(MERGED_FILE)).unwrap()).unwrap();
        assert_eq!(merged["metadata"]["total_books"], 3);
        assert_eq!(merged["books"].as_array().unwrap().len(), 3);

        let unmatched: Value = serde_json::from_str(
            &fs::read_to_string(out.join("unmatched_google_books.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(unmatched["metadata"]["total_unmatched"], 1);
        assert_eq!(unmatched["entries"][0]["title"], "Lessons in Chemistry");
    }

    #[test]
    fn rerun_backs_up_previous_outputs() {
        let root = TempDir::new().unwrap();
        let pipeline = MergePipeline::new(config_for(&root));
        let run = pipeline.run().unwrap();
        pipeline.write_outputs(&run).unwrap();
        pipeline.write_outputs(&run).unwrap();

        let backups: Vec<_> = fs::read_dir(root.path().join("merged_data_backup"))
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert!(backups.iter().any(|name| name.starts_with("merge_report_")));
        assert!(backups.iter().any(|name| name.starts_with("merged_literary_books_")));
    }

    #[test]
    fn missing_input_fails_its_phase() {
        let root = TempDir::new().unwrap();
        let config = config_for(&root);
        fs::remove_file(config.openlibrary_path()).unwrap();

        let err = MergePipeline::new(config).run().unwrap_err();
        match err {
            LinkageError::Phase { phase, source } => {
                assert_eq!(phase, SourceKind::OpenLibrary);
                assert!(matches!(source, LitmergeError::InputNotFound(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let root = TempDir::new().unwrap();
        let mut config = config_for(&root);
        config.matching.fuzzy_threshold = 1.5;
        assert!(matches!(
            MergePipeline::new(config).run(),
            Err(LinkageError::InvalidThreshold(_))
        ));
    }
}

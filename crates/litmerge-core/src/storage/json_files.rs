use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{LitmergeError, Result};

/// Load the raw records of one source file.
///
/// Award files are bare JSON arrays; the API fetchers wrap their records as
/// `{"metadata": {...}, "books": [...]}`. Both shapes are accepted.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(LitmergeError::InputNotFound(path.to_path_buf()));
    }

    tracing::info!("Loading {}...", path.display());
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    records_from_value(value).ok_or_else(|| LitmergeError::MalformedInput {
        path: path.to_path_buf(),
        reason: "expected a JSON array or an object with a `books` array".to_string(),
    })
}

/// Load and concatenate several source files, preserving file order.
pub fn load_all_records(paths: &[PathBuf]) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_records(path)?);
    }
    Ok(records)
}

fn records_from_value(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("books") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Serialize `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(path, json)?;
    Ok(path.to_path_buf())
}

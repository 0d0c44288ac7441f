//! CSV file utilities with atomic rewrites
//!
//! Reading treats a missing file as an empty table. Full rewrites go through a
//! temporary file and a rename so a crash never leaves a half-written table.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

fn csv_error(path: &Path, action: &str, err: csv::Error) -> TrackerError {
    match err.kind() {
        csv::ErrorKind::Deserialize { .. } => {
            TrackerError::Parse(format!("{}: {}", path.display(), err))
        }
        _ => TrackerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err)),
    }
}

fn ensure_parent(path: &Path) -> Result<(), TrackerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Read every row of a headed CSV file, returning an empty Vec if the file doesn't exist
///
/// Any row that fails to deserialize aborts the whole read; callers never see
/// a partially parsed table.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no file, treating as empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| csv_error(path, "open", e))?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| csv_error(path, "read", e))
}

/// Append a single row, writing the header first when the file is new or empty
pub fn append_csv_row<T, P>(path: P, headers: &[&str], row: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    if needs_header {
        writer
            .write_record(headers)
            .map_err(|e| csv_error(path, "write", e))?;
    }
    writer
        .serialize(row)
        .map_err(|e| csv_error(path, "write", e))?;
    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Rewrite a CSV file atomically (write to temp, then rename)
///
/// The header row is always written, even when there are no rows.
pub fn write_csv_atomic<T, P>(path: P, headers: &[&str], rows: &[T]) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer
        .write_record(headers)
        .map_err(|e| csv_error(&temp_path, "write", e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| csv_error(&temp_path, "write", e))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    file.sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write a text file atomically, creating parent directories
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TrackerError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| TrackerError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

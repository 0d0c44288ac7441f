//! Report text export
//!
//! The rendered monthly report is written to disk byte for byte as it was
//! printed.

use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::write_text_atomic;

/// Write report text verbatim to `path`, creating parent directories
pub fn export_report<P: AsRef<Path>>(text: &str, path: P) -> TrackerResult<()> {
    let path = path.as_ref();
    write_text_atomic(path, text).map_err(|e| {
        TrackerError::Export(format!("Failed to write report to {}: {}", path.display(), e))
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "exported report");
    Ok(())
}

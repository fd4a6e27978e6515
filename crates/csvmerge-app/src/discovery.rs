// Rust guideline compliant 2026-10-19

//! Candidate input file discovery.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists regular files in `dir` whose extension equals `extension`.
///
/// # Arguments
///
/// * `dir` - Directory to scan (not recursive)
/// * `extension` - Extension without the leading dot
///
/// # Returns
///
/// Matching paths sorted by file name. May be empty.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn discover_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            found.push(path);
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = found.len(), "discovered candidates");
    Ok(found)
}

/// Returns the display label for a candidate path (its file name).
pub fn candidate_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

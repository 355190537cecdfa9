//! Collects translation keys from the files of a directory tree.

mod types;
pub mod walker;

use std::path::Path;

pub use types::{
    IndexerError,
    ScanStats,
};
pub use walker::find_files;

use crate::config::FileMatcher;
use crate::extractor::{
    self,
    KeySet,
};

/// Scans every source file under `dir` and adds the keys found to `keys`.
///
/// Files are filtered with the matcher's include/exclude patterns, relative to
/// `dir`. Content is decoded lossily, so stray binary files yield no keys
/// instead of failing the run.
///
/// # Errors
/// - [`IndexerError::MissingDirectory`] if `dir` is not a directory
/// - [`IndexerError::Walk`] / [`IndexerError::Read`] on I/O failure
pub fn scan_directory(
    dir: &Path,
    matcher: &FileMatcher,
    keys: &mut KeySet,
) -> Result<ScanStats, IndexerError> {
    let files = find_files(dir, |relative| matcher.is_source_file_relative(relative))?;

    let mut stats = ScanStats::default();
    for file in &files {
        let bytes = std::fs::read(file)
            .map_err(|source| IndexerError::Read { path: file.clone(), source })?;
        let content = String::from_utf8_lossy(&bytes);

        let matches = extractor::extract_into(&content, keys);
        tracing::trace!(file = %file.display(), matches, "Scanned file");

        stats.files_scanned += 1;
        stats.matches += matches;
    }

    Ok(stats)
}

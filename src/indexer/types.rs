//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Directory to scan does not exist or is not a directory
    #[error("Directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },
    /// Error while walking a directory tree
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),
    /// Error when failing to read a file
    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Totals for one scanned directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    /// Helper calls matched, including repeats of the same key.
    pub matches: usize,
}

//! Types for the sync module

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    ConfigError,
    MatcherError,
};
use crate::dictionary::DictionaryError;
use crate::indexer::IndexerError;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pattern(#[from] MatcherError),
    #[error(transparent)]
    Indexer(#[from] IndexerError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    /// Project root could not be resolved to an absolute path
    #[error("Failed to resolve project root {}: {source}", path.display())]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Distinct keys extracted from templates and controllers.
    pub keys_found: usize,
    /// Keys newly added to the default dictionary.
    pub strings_added: usize,
    /// Non-default locale files rewritten.
    pub files_updated: usize,
    /// Non-default locale files left untouched because they could not be parsed.
    pub files_skipped: Vec<PathBuf>,
}

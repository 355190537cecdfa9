//! Dictionary error definitions.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when failing to read a locale file
    #[error("Failed to read locale file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Locale file is not a flat JSON object of strings
    #[error("Failed to parse locale file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Error when failing to write a locale file
    #[error("Failed to write locale file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),
}

//! lang-sync
//!
//! Extracts translation keys from view templates (and controllers), merges them
//! into the default locale file and propagates new keys to every other locale.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod extractor;
pub mod indexer;
pub mod sync;
mod test_utils;

pub use cli::Cli;
pub use sync::{
    SyncError,
    SyncReport,
};

use crate::config::ConfigManager;

/// Resolves the project from the command line and runs one sync.
///
/// # Errors
/// Any [`SyncError`] from configuration loading or the run itself.
pub fn run(cli: &Cli) -> Result<SyncReport, SyncError> {
    let root = cli.project_root()?;
    let config = ConfigManager::load(root, &cli.overrides())?;
    sync::run(&config)
}

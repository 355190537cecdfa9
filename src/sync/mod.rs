//! One synchronisation run: extract, merge into the default locale, propagate,
//! sort and write back.

mod types;

use std::path::{
    Path,
    PathBuf,
};

pub use types::{
    SyncError,
    SyncReport,
};

use crate::config::{
    ConfigManager,
    FileMatcher,
    ProjectPaths,
};
use crate::dictionary::{
    self,
    Dictionary,
    DictionaryError,
};
use crate::extractor::KeySet;
use crate::indexer::{
    self,
    IndexerError,
};

/// Log target of the end-of-run summary line.
pub const SUMMARY_TARGET: &str = "lang_sync::summary";

/// Runs the whole pipeline against the project described by `config`.
///
/// Every locale file is rewritten, even when nothing changed.
///
/// # Errors
/// - Views (or theme) directory is missing
/// - Default locale file is malformed or cannot be written
/// - Any other I/O failure while walking, reading or writing
pub fn run(config: &ConfigManager) -> Result<SyncReport, SyncError> {
    let paths = config.paths();
    let matcher = FileMatcher::new(config.get_settings())?;
    tracing::debug!("Starting...");

    let keys = extract_project_keys(&paths, &matcher)?;

    let default = dictionary::load_or_default(&paths.default_file)?;
    let (default, strings_added) = dictionary::merge_keys(&default, &keys);
    let default = default.sorted();
    tracing::debug!(path = %paths.default_file.display(), strings_added, "Writing default locale file...");
    dictionary::save(&paths.default_file, &default)?;

    let mut report = SyncReport { keys_found: keys.len(), strings_added, ..SyncReport::default() };
    propagate_locales(&paths, &matcher, &default, &mut report)?;

    tracing::info!(
        target: SUMMARY_TARGET,
        "Done, updated {} files, added {} strings.",
        report.files_updated,
        report.strings_added
    );
    Ok(report)
}

/// Extracts keys from the views directory and, when enabled, the controllers directory.
fn extract_project_keys(paths: &ProjectPaths, matcher: &FileMatcher) -> Result<KeySet, SyncError> {
    let mut keys = KeySet::new();

    tracing::debug!(dir = %paths.views.display(), "Looping through template files...");
    let stats = indexer::scan_directory(&paths.views, matcher, &mut keys)?;
    tracing::debug!(files = stats.files_scanned, matches = stats.matches, "Scanned templates");

    if let Some(controllers) = &paths.controllers {
        match indexer::scan_directory(controllers, matcher, &mut keys) {
            Ok(stats) => {
                tracing::debug!(
                    files = stats.files_scanned,
                    matches = stats.matches,
                    "Scanned controllers"
                );
            }
            Err(IndexerError::MissingDirectory { path }) => {
                tracing::debug!(dir = %path.display(), "Controllers directory not found, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(count = keys.len(), "Extracted keys");
    Ok(keys)
}

/// Adds the default dictionary's keys to every other locale file and writes them back.
///
/// Files that cannot be parsed are reported and left untouched.
fn propagate_locales(
    paths: &ProjectPaths,
    matcher: &FileMatcher,
    default: &Dictionary,
    report: &mut SyncReport,
) -> Result<(), SyncError> {
    for file in locale_files(&paths.lang, matcher)? {
        if is_same_file(&file, &paths.default_file) {
            continue;
        }

        let locale = match dictionary::load(&file) {
            Ok(locale) => locale,
            Err(DictionaryError::Parse { path, source }) => {
                tracing::warn!(path = %path.display(), "Skipping malformed locale file: {source}");
                report.files_skipped.push(path);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let (locale, added) = dictionary::propagate(default, &locale);
        tracing::debug!(path = %file.display(), added, "Updating locale file...");
        dictionary::save(&file, &locale.sorted())?;
        report.files_updated += 1;
    }

    Ok(())
}

/// Locale files under `lang_dir`, in path order. A missing directory has none.
fn locale_files(lang_dir: &Path, matcher: &FileMatcher) -> Result<Vec<PathBuf>, SyncError> {
    match indexer::find_files(lang_dir, |relative| matcher.is_locale_file_relative(relative)) {
        Ok(mut files) => {
            files.sort();
            Ok(files)
        }
        Err(IndexerError::MissingDirectory { path }) => {
            tracing::debug!(dir = %path.display(), "Locale directory not found");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Compares canonical paths when both exist, falling back to the paths as given.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

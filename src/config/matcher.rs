//! File pattern matcher for source and locale files.

use std::path::Path;

use globset::{
    GlobBuilder,
    GlobSet,
    GlobSetBuilder,
};

use super::Settings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid source include pattern '{pattern}': {source}")]
    InvalidSourceIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid locale file pattern '{pattern}': {source}")]
    InvalidLocalePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files against configured glob patterns.
///
/// Paths are always relative to the directory being scanned (views, controllers
/// or the locale directory), never to the project root. `*` does not cross
/// directory boundaries; use `**` for that.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    source_include_set: GlobSet,
    exclude_set: GlobSet,
    locale_set: GlobSet,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(settings: &Settings) -> Result<Self, MatcherError> {
        let source_include_set =
            Self::build_glob_set(&settings.include_patterns, |pattern, source| {
                MatcherError::InvalidSourceIncludePattern { pattern, source }
            })?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        let locale_set = Self::build_glob_set(
            std::slice::from_ref(&settings.locale_file_pattern),
            |pattern, source| MatcherError::InvalidLocalePattern { pattern, source },
        )?;

        Ok(Self { source_include_set, exclude_set, locale_set })
    }

    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Returns true if the path matches `includePatterns` but not `excludePatterns`.
    #[must_use]
    pub fn is_source_file_relative(&self, relative_path: &Path) -> bool {
        self.source_include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }

    /// Returns true if the path matches `localeFilePattern`.
    #[must_use]
    pub fn is_locale_file_relative(&self, relative_path: &Path) -> bool {
        self.locale_set.is_match(relative_path)
    }
}

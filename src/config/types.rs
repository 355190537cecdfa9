use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Project layout and scan settings, as read from `.lang-sync.json`.
///
/// Every directory is relative to the project root unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Template directory used when no theme is selected.
    pub views_dir: String,
    /// Parent of theme directories; a theme's templates live in `<themesDir>/<theme>/views`.
    pub themes_dir: String,
    pub theme: Option<String>,

    pub controllers_dir: String,
    pub scan_controllers: bool,

    pub lang_dir: String,
    /// Source of truth for which keys exist.
    pub default_file: String,

    /// Applied to template and controller paths, relative to the scanned directory.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,

    /// Selects locale files under `langDir`.
    pub locale_file_pattern: String,
}

impl Settings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Theme name is not a single path segment
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("viewsDir", &self.views_dir),
            ("themesDir", &self.themes_dir),
            ("controllersDir", &self.controllers_dir),
            ("langDir", &self.lang_dir),
            ("defaultFile", &self.default_file),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(field, "The path cannot be empty"));
            }
        }

        if let Some(theme) = &self.theme {
            if theme.trim().is_empty() {
                errors.push(ValidationError::new(
                    "theme",
                    "The theme name cannot be empty. Remove this field to use viewsDir",
                ));
            } else if theme.contains(['/', '\\']) || theme == ".." || theme == "." {
                errors.push(ValidationError::new(
                    "theme",
                    format!("Invalid theme name '{theme}': must be a single directory name"),
                ));
            }
        }

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"**/*.blade.php\"]",
            ));
        }

        for (index, pattern) in self.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.locale_file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "localeFilePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.locale_file_pattern) {
            errors.push(ValidationError::new(
                "localeFilePattern",
                format!("Invalid glob pattern '{}': {e}", self.locale_file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            views_dir: "resources/views".to_string(),
            themes_dir: "themes".to_string(),
            theme: None,
            controllers_dir: "app/Http/Controllers".to_string(),
            scan_controllers: true,
            lang_dir: "lang".to_string(),
            default_file: "lang/en.json".to_string(),
            include_patterns: vec!["**/*".to_string()],
            exclude_patterns: vec![],
            locale_file_pattern: "**/*.json".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = Settings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"theme": "dark", "scanControllers": false}"#;

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.theme, some(eq("dark")));
        assert_that!(settings.scan_controllers, eq(false));
        assert_that!(settings.default_file, eq("lang/en.json"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.views_dir, eq("resources/views"));
        assert_that!(settings.themes_dir, eq("themes"));
        assert_that!(settings.controllers_dir, eq("app/Http/Controllers"));
        assert_that!(settings.lang_dir, eq("lang"));
        assert_that!(settings.include_patterns, elements_are![eq("**/*")]);
        assert_that!(settings.exclude_patterns, is_empty());
        assert_that!(settings.locale_file_pattern, eq("**/*.json"));
    }

    #[rstest]
    #[case::views_dir("viewsDir")]
    #[case::lang_dir("langDir")]
    #[case::default_file("defaultFile")]
    fn validate_empty_path(#[case] field: &str) {
        let mut settings = Settings::default();
        match field {
            "viewsDir" => settings.views_dir = String::new(),
            "langDir" => settings.lang_dir = "  ".to_string(),
            _ => settings.default_file = String::new(),
        }

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq(field)),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    #[case::empty("", "cannot be empty")]
    #[case::nested("dark/views", "single directory name")]
    #[case::parent("..", "single directory name")]
    fn validate_invalid_theme(#[case] theme: &str, #[case] message: &str) {
        let settings = Settings { theme: Some(theme.to_string()), ..Settings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("theme")),
                field!(ValidationError.message, contains_substring(message))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_include_patterns_empty() {
        let settings = Settings { include_patterns: vec![], ..Settings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = Settings {
            exclude_patterns: vec!["vendor/**".to_string(), "invalid[pattern".to_string()],
            ..Settings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_locale_file_pattern() {
        let settings =
            Settings { locale_file_pattern: "**/*.{json".to_string(), ..Settings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("localeFilePattern"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = Settings {
            views_dir: String::new(),
            include_patterns: vec![],
            ..Settings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. viewsDir"));
        assert_that!(error_message, contains_substring("2. includePatterns"));
    }
}

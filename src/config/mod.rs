//! Project configuration: `.lang-sync.json` plus command-line overrides.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Source and locale file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::{
    ConfigManager,
    Overrides,
    ProjectPaths,
};
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    Settings,
    ValidationError,
};

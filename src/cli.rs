//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;
use crate::sync::SyncError;

/// Extract translation keys from templates and sync them into every locale file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lang-sync", version)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Scan `themes/<NAME>/views` instead of `resources/views`
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Default locale file, relative to the project root (defaults to `lang/en.json`)
    #[arg(long = "default-file", value_name = "FILE")]
    pub default_file: Option<PathBuf>,

    /// Do not scan controllers for `Lang::get` calls
    #[arg(long = "no-controllers")]
    pub no_controllers: bool,

    /// Print nothing but fatal errors, not even the summary
    #[arg(long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Print progress for every step and file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings that override `.lang-sync.json`.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            theme: self.theme.clone(),
            default_file: self.default_file.clone(),
            no_controllers: self.no_controllers,
        }
    }

    /// Log filter directive selected by `--silent` / `--verbose`, if any.
    #[must_use]
    pub const fn log_directive(&self) -> Option<&'static str> {
        if self.silent {
            Some("error")
        } else if self.verbose {
            Some("debug")
        } else {
            None
        }
    }

    /// Absolute project root.
    ///
    /// # Errors
    /// Returns [`SyncError::ProjectRoot`] if the current directory cannot be determined.
    pub fn project_root(&self) -> Result<PathBuf, SyncError> {
        let path = self.path.clone().unwrap_or_else(|| PathBuf::from("."));
        std::path::absolute(&path).map_err(|source| SyncError::ProjectRoot { path, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lang-sync").chain(args.iter().copied())).unwrap()
    }

    #[rstest]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn parse_all_flags() {
        let cli = parse(&[
            "--path",
            "/srv/app",
            "--theme",
            "dark",
            "--default-file",
            "lang/de.json",
            "--no-controllers",
            "-v",
        ]);

        assert_eq!(cli.path, Some(PathBuf::from("/srv/app")));
        assert_eq!(
            cli.overrides(),
            Overrides {
                theme: Some("dark".to_string()),
                default_file: Some(PathBuf::from("lang/de.json")),
                no_controllers: true,
            }
        );
        assert_eq!(cli.log_directive(), Some("debug"));
    }

    #[rstest]
    #[case::default(&[], None)]
    #[case::silent(&["--silent"], Some("error"))]
    #[case::verbose_long(&["--verbose"], Some("debug"))]
    #[case::verbose_short(&["-v"], Some("debug"))]
    fn log_directive_from_flags(#[case] args: &[&str], #[case] expected: Option<&str>) {
        assert_eq!(parse(args).log_directive(), expected);
    }

    #[rstest]
    fn silent_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["lang-sync", "--silent", "--verbose"]);

        assert!(result.is_err());
    }

    #[rstest]
    fn project_root_is_absolute() {
        let cli = parse(&["--path", "relative/project"]);

        let root = cli.project_root().unwrap();

        assert!(root.is_absolute());
        assert!(root.ends_with("relative/project"));
    }
}

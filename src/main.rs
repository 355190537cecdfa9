//! Entry point for the `lang-sync` command.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use lang_sync::Cli;
use lang_sync::sync::SUMMARY_TARGET;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match lang_sync::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `--silent` / `--verbose` take precedence over `RUST_LOG`.
///
/// Without either flag the summary line is always enabled. Errors go to
/// stderr, everything else to stdout.
fn init_tracing(cli: &Cli) {
    let filter = match cli.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            match format!("{SUMMARY_TARGET}=info").parse::<Directive>() {
                Ok(summary) => filter.add_directive(summary),
                Err(_) => filter,
            }
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr.with_max_level(Level::ERROR).or_else(std::io::stdout))
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

mod application;
mod presentation;

use std::error::Error;
use std::process::ExitCode;

use clap::CommandFactory;
use tracing::error;
use tracing_subscriber::EnvFilter;
use unipkg_core::error::UnipkgError;

use crate::presentation::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "unipkg=info,unipkg_core=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match application::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(UnipkgError::NotFound(path)) => {
            eprintln!("Error: File not found: {}", path.display());
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("error extracting package: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

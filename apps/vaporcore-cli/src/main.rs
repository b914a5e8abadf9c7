//! `vaporcore` command-line entry point.

mod cli;
mod commands;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vaporcore_runtime::Runtime;

use crate::cli::Cli;
use crate::commands::Status;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "starting vaporcore"
    );

    let mut runtime = Runtime::new(&cli.config);
    runtime.init();

    let mut stdout = std::io::stdout().lock();
    let status = commands::run(&cli.command, &runtime, &mut stdout)?;
    stdout.flush()?;

    runtime.shutdown();

    Ok(match status {
        Status::Ok => ExitCode::SUCCESS,
        Status::Failed => ExitCode::FAILURE,
    })
}

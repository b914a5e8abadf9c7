use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vaporcore_config::DEFAULT_CONFIG_FILENAME;

/// Inspect and validate VaporCore configuration files.
#[derive(Debug, Parser)]
#[command(name = "vaporcore", version, about)]
pub struct Cli {
    /// Configuration file to load.
    #[arg(long, short, env = "VAPORCORE_CONFIG", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Log filter (e.g. `warn`, `debug`, `vaporcore_config=debug`).
    #[arg(long, env = "VAPORCORE_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the effective Steam settings.
    Settings {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print a single value.
    Get {
        section: String,
        key: String,

        /// How to interpret the value.
        #[arg(long = "type", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// Print every section and key in INI form.
    Dump,

    /// Report lines that could not be parsed.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Bool,
    Int,
    U32,
    U64,
    Float,
    List,
    IntList,
}

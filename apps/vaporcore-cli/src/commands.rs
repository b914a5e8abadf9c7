use std::io::Write;

use anyhow::{Context, bail};
use vaporcore_config::{ConfigError, ConfigStore, SteamSettings};
use vaporcore_runtime::Runtime;

use crate::cli::{Command, ValueKind};

/// Whether a command found what it was asked to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
}

/// Runs one subcommand against an initialized runtime, writing to `out`.
pub fn run(
    command: &Command,
    runtime: &Runtime,
    out: &mut impl Write,
) -> anyhow::Result<Status> {
    match command {
        Command::Settings { json } => {
            print_settings(runtime.settings(), *json, out)?;
            Ok(Status::Ok)
        }
        Command::Get { section, key, kind } => {
            print_value(runtime.config(), section, key, *kind, out)?;
            Ok(Status::Ok)
        }
        Command::Dump => {
            dump(runtime.config(), out)?;
            Ok(Status::Ok)
        }
        Command::Check => check(runtime.config(), out),
    }
}

fn print_settings(
    settings: &SteamSettings,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, settings).context("failed to encode settings")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "app_id   = {}", settings.app_id)?;
    match settings.steam_id.steam3() {
        Ok(steam3) => writeln!(out, "steam_id = {} {steam3}", settings.steam_id)?,
        Err(_) => writeln!(out, "steam_id = {}", settings.steam_id)?,
    }
    writeln!(out, "username = {}", settings.username)?;
    writeln!(out, "language = {}", settings.language)?;
    Ok(())
}

fn print_value(
    config: &ConfigStore,
    section: &str,
    key: &str,
    kind: ValueKind,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if !config.has_key(section, key) {
        bail!("no value for [{section}] {key} in {}", config.source_path().display());
    }

    match kind {
        ValueKind::String => writeln!(out, "{}", config.get_string(section, key, ""))?,
        ValueKind::Bool => writeln!(out, "{}", config.get_bool(section, key, false))?,
        ValueKind::Int => write_typed::<i32>(config, section, key, out)?,
        ValueKind::U32 => write_typed::<u32>(config, section, key, out)?,
        ValueKind::U64 => write_typed::<u64>(config, section, key, out)?,
        ValueKind::Float => write_typed::<f32>(config, section, key, out)?,
        ValueKind::List => {
            for item in config.get_string_list(section, key) {
                writeln!(out, "{item}")?;
            }
        }
        ValueKind::IntList => {
            for n in config.get_int_list(section, key) {
                writeln!(out, "{n}")?;
            }
        }
    }
    Ok(())
}

/// Prints a typed value, failing on values that do not convert. Empty
/// values print as an empty line.
fn write_typed<T>(
    config: &ConfigStore,
    section: &str,
    key: &str,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    T: vaporcore_config::FromConfigValue + std::fmt::Display,
{
    match config.try_get::<T>(section, key)? {
        Some(value) => writeln!(out, "{value}")?,
        None => writeln!(out)?,
    }
    Ok(())
}

fn dump(config: &ConfigStore, out: &mut impl Write) -> anyhow::Result<()> {
    for (i, section) in config.sections().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{section}]")?;
        for key in config.section_keys(section) {
            writeln!(out, "{key} = {}", config.get_string(section, &key, ""))?;
        }
    }
    Ok(())
}

fn check(config: &ConfigStore, out: &mut impl Write) -> anyhow::Result<Status> {
    let path = config.source_path().display();

    if !config.is_loaded() {
        writeln!(out, "{path}: could not be read")?;
        return Ok(Status::Failed);
    }

    let diagnostics = config.diagnostics();
    for diag in diagnostics {
        writeln!(out, "{path}: {}", ConfigError::from(diag))?;
    }

    if diagnostics.is_empty() {
        writeln!(out, "{path}: ok ({} sections)", config.sections().len())?;
        Ok(Status::Ok)
    } else {
        writeln!(out, "{path}: {} line(s) skipped", diagnostics.len())?;
        Ok(Status::Failed)
    }
}

//! CLI command implementations.
//!
//! Each command returns its rendered output; `main` writes it to stdout.

use crate::cli::output::{OutputFormat, format_dump, format_memory, format_write_result};
use crate::cli::parser::{Cli, Commands};
use crate::error::Result;
use crate::io::{load_memory, read_image, write_image};
use std::path::Path;
use tracing::debug;

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let image_path = cli.get_image_path();
    debug!(command = ?cli.command, path = %image_path.display(), "executing");

    match cli.command {
        Commands::Write => cmd_write(&image_path, format),
        Commands::Dump => cmd_dump(&image_path, format),
        Commands::Memory => cmd_memory(&image_path, format),
    }
}

fn cmd_write(path: &Path, format: OutputFormat) -> Result<String> {
    let image = write_image(path)?;
    Ok(format_write_result(path, &image, format))
}

fn cmd_dump(path: &Path, format: OutputFormat) -> Result<String> {
    let image = read_image(path)?;
    Ok(format_dump(&image, format))
}

fn cmd_memory(path: &Path, format: OutputFormat) -> Result<String> {
    let memory = load_memory(path)?;
    debug!(origin = memory.origin(), loaded = memory.loaded(), "image loaded");
    Ok(format_memory(&memory, format))
}

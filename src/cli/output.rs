//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. Text output matches the plain
//! script output byte for byte.

use crate::core::{Image, MEMORY_SIZE, Memory};
use crate::error::Error;
use crate::hex::{BYTES_PER_LINE, HexDump};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Label printed before the memory rows.
pub const MEMORY_HEADER: &str = "Memory content after loading:";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the result of writing an image.
#[must_use]
pub fn format_write_result(path: &Path, image: &Image, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            format!(
                "Image file '{}' created successfully.\n",
                path.display()
            )
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct WriteOutput<'a> {
                path: &'a Path,
                bytes_written: usize,
            }
            format_json(&WriteOutput {
                path,
                bytes_written: image.len(),
            })
        }
    }
}

/// Formats a hex dump of an image.
#[must_use]
pub fn format_dump(image: &Image, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => image.hex_dump().to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct DumpOutput<'a> {
                path: Option<&'a Path>,
                size: usize,
                lines: Vec<String>,
            }
            format_json(&DumpOutput {
                path: image.source.as_deref(),
                size: image.len(),
                lines: HexDump::new(image.as_bytes()).lines(),
            })
        }
    }
}

/// Formats loaded VM memory.
#[must_use]
pub fn format_memory(memory: &Memory, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_memory_text(memory),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct MemoryOutput<'a> {
                origin: u8,
                loaded: usize,
                memory: &'a [u8],
            }
            format_json(&MemoryOutput {
                origin: memory.origin(),
                loaded: memory.loaded(),
                memory: memory.cells(),
            })
        }
    }
}

fn format_memory_text(memory: &Memory) -> String {
    // "0xNN" plus separator per cell, one header line.
    let mut output = String::with_capacity(MEMORY_SIZE * 5 + MEMORY_HEADER.len() + 1);
    output.push_str(MEMORY_HEADER);
    output.push('\n');
    for row in memory.cells().chunks(BYTES_PER_LINE) {
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            let _ = write!(output, "0x{byte:02X}");
        }
        output.push('\n');
    }
    output
}

/// Formats an error for display.
///
/// Text errors are the bare message; JSON errors carry the message and kind.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                r#type: &'static str,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
                r#type: error.kind(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

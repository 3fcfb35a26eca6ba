//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::DEFAULT_IMAGE_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// atlas-image: write and inspect AtlasVM image files.
#[derive(Parser, Debug)]
#[command(name = "atlas-image")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the image file.
    ///
    /// Defaults to `your_image.obj` in the current directory.
    #[arg(short, long, env = "ATLAS_IMAGE_PATH", global = true)]
    pub image: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Write the fixed image payload.
    ///
    /// Creates the image file, or truncates it if it exists.
    Write,

    /// Print the image file as hexadecimal rows of 16 bytes.
    #[command(alias = "read")]
    Dump,

    /// Load the image into 256 bytes of VM memory and print it.
    Memory,
}

impl Cli {
    /// Returns the image path, using the default if not specified.
    #[must_use]
    pub fn get_image_path(&self) -> PathBuf {
        self.image
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_PATH))
    }
}

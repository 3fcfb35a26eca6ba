//! CLI layer for atlas-image.
//!
//! Provides the command-line interface using clap, with commands for
//! writing, dumping, and loading image files.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};

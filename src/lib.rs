//! # atlas-image
//!
//! Tooling for AtlasVM image files.
//!
//! - **Write**: persist the fixed four-byte image payload
//! - **Dump**: print any file as rows of 16 uppercase hex bytes
//! - **Memory**: show the 256 bytes of VM memory an image loads into
//!
//! No instruction in an image is ever decoded.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod hex;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{DEFAULT_IMAGE_PATH, IMAGE_PAYLOAD, Image, MEMORY_SIZE, Memory};

// Re-export hex formatting
pub use hex::{BYTES_PER_LINE, DUMP_HEADER, HexDump, format_byte, format_line, hex_lines};

// Re-export I/O entry points
pub use io::{dump_image, load_memory, read_image, write_image};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

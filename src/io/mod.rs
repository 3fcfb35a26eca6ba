//! File I/O for atlas-image.
//!
//! Reads whole image files into memory (memory mapping large ones) and
//! writes the fixed image payload.

pub mod reader;
pub mod writer;

pub use reader::{FileReader, dump_image, load_memory, read_bytes, read_image};
pub use writer::{write_bytes, write_image};

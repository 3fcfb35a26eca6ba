//! Core domain models for atlas-image.
//!
//! Pure data structures with no I/O dependencies: the byte buffer held by
//! an image file and the 256-byte memory an image loads into.

pub mod image;
pub mod memory;

pub use image::{DEFAULT_IMAGE_PATH, IMAGE_PAYLOAD, Image};
pub use memory::{MEMORY_SIZE, Memory, swap_nibbles};

//! Image byte buffers.
//!
//! An image is an ordered sequence of bytes with no interpreted structure.
//! The writer persists [`IMAGE_PAYLOAD`]; the reader loads any file.

use crate::hex::HexDump;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path the image is written to and read from when none is given.
pub const DEFAULT_IMAGE_PATH: &str = "your_image.obj";

/// Fixed payload persisted by the writer.
pub const IMAGE_PAYLOAD: [u8; 4] = [0x11, 0x00, 0xD0, 0xE0];

/// An image file's contents.
///
/// # Examples
///
/// ```
/// use atlas_image::core::{IMAGE_PAYLOAD, Image};
///
/// let image = Image::payload();
/// assert_eq!(image.as_bytes(), &IMAGE_PAYLOAD);
/// assert_eq!(image.hex_dump().to_string(), "Image file contents:\n11 00 D0 E0\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Source file path (if loaded from file).
    pub source: Option<PathBuf>,

    /// Raw bytes, emitted and displayed verbatim.
    pub bytes: Vec<u8>,
}

impl Image {
    /// Creates an image from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            source: None,
            bytes,
        }
    }

    /// Creates an image holding [`IMAGE_PAYLOAD`].
    #[must_use]
    pub fn payload() -> Self {
        Self::from_bytes(IMAGE_PAYLOAD.to_vec())
    }

    /// Sets the source path.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the image bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the image holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns a displayable hex dump of the image.
    #[must_use]
    pub fn hex_dump(&self) -> HexDump<'_> {
        HexDump::new(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let image = Image::payload();
        assert_eq!(image.len(), 4);
        assert_eq!(image.as_bytes(), &[0x11, 0x00, 0xD0, 0xE0]);
        assert!(image.source.is_none());
    }

    #[test]
    fn test_empty_image() {
        let image = Image::from_bytes(Vec::new());
        assert!(image.is_empty());
        assert_eq!(image.hex_dump().to_string(), "Image file contents:\n");
    }

    #[test]
    fn test_with_source() {
        let image = Image::payload().with_source("out/image.obj");
        assert_eq!(image.source, Some(PathBuf::from("out/image.obj")));
    }

    #[test]
    fn test_serialization() {
        let image = Image::from_bytes(vec![0xFF, 0x00]);
        let json = serde_json::to_string(&image).unwrap();
        let back: Image = serde_json::from_str(&json).unwrap();
        assert_eq!(image, back);
    }
}

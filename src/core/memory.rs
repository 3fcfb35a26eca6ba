//! AtlasVM memory view.
//!
//! Loads an image the way the VM does: the first byte is the origin
//! address, the rest is copied into memory starting there. Both the origin
//! and every copied byte are stored nibble-swapped on disk. Nothing is
//! decoded as an instruction.

use crate::error::{ImageError, Result};

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Exchanges the high and low four bits of a byte.
///
/// ```
/// use atlas_image::core::swap_nibbles;
///
/// assert_eq!(swap_nibbles(0xD0), 0x0D);
/// assert_eq!(swap_nibbles(0x11), 0x11);
/// ```
#[must_use]
pub const fn swap_nibbles(x: u8) -> u8 {
    x.rotate_left(4)
}

/// 256 bytes of memory after an image has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
    origin: u8,
    loaded: usize,
}

impl Memory {
    /// Loads an image into zeroed memory.
    ///
    /// Bytes that would land past the end of memory are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::MissingOrigin`] if `image` is empty.
    pub fn load(image: &[u8]) -> Result<Self> {
        let (&first, rest) = image.split_first().ok_or(ImageError::MissingOrigin)?;
        let origin = swap_nibbles(first);
        let start = usize::from(origin);
        let loaded = rest.len().min(MEMORY_SIZE - start);

        let mut cells = [0u8; MEMORY_SIZE];
        for (cell, &byte) in cells[start..start + loaded].iter_mut().zip(rest) {
            *cell = swap_nibbles(byte);
        }

        Ok(Self {
            cells,
            origin,
            loaded,
        })
    }

    /// Address the image was loaded at.
    #[must_use]
    pub const fn origin(&self) -> u8 {
        self.origin
    }

    /// Number of bytes copied into memory, excluding the origin byte.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.loaded
    }

    /// All memory cells.
    #[must_use]
    pub const fn cells(&self) -> &[u8; MEMORY_SIZE] {
        &self.cells
    }
}

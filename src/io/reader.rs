//! Image file reading with memory mapping support.
//!
//! Files are always read in full. Large files go through a read-only
//! memory map before being copied into memory.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::core::{Image, Memory};
use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum file size to read into memory (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// File reader with support for memory mapping.
///
/// Automatically chooses the reading strategy based on file size:
/// - Small files (< 1MB): Read directly into memory
/// - Large files (>= 1MB): Use memory mapping
///
/// # Examples
///
/// ```no_run
/// use atlas_image::io::FileReader;
///
/// let reader = FileReader::open("your_image.obj").unwrap();
/// let bytes = reader.read_to_bytes().unwrap();
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the file doesn't exist and
    /// [`IoError::ReadFailed`] if it can't be opened or is too large.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        if metadata.is_dir() {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: "is a directory".to_string(),
            }
            .into());
        }

        let size = metadata.len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub fn read_to_bytes(&self) -> Result<Vec<u8>> {
        if self.size >= MMAP_THRESHOLD {
            debug!(path = %self.path, size = self.size, "reading via mmap");
            self.read_mmap_bytes()
        } else {
            debug!(path = %self.path, size = self.size, "reading directly");
            self.read_direct_bytes()
        }
    }

    /// Reads bytes using memory mapping.
    fn read_mmap_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.mmap()?.to_vec())
    }

    /// Reads bytes directly into memory.
    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }

    /// Creates a memory-mapped view of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if memory mapping fails.
    pub fn mmap(&self) -> Result<Mmap> {
        // Safety: We're only reading from the file
        unsafe {
            Mmap::map(&self.file).map_err(|e| {
                IoError::MmapFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
        }
    }
}

/// Reads a whole file into memory.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    FileReader::open(path)?.read_to_bytes()
}

/// Reads an image file, recording its path as the source.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path_ref = path.as_ref();
    let bytes = read_bytes(path_ref)?;
    Ok(Image::from_bytes(bytes).with_source(path_ref))
}

/// Reads an image file and renders it as a hex dump.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
///
/// # Examples
///
/// ```no_run
/// use atlas_image::io::dump_image;
///
/// print!("{}", dump_image("your_image.obj").unwrap());
/// ```
pub fn dump_image<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(read_image(path)?.hex_dump().to_string())
}

/// Reads an image file and loads it into VM memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is empty.
pub fn load_memory<P: AsRef<Path>>(path: P) -> Result<Memory> {
    Memory::load(read_image(path)?.as_bytes())
}

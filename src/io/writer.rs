//! Image file writing.

use crate::core::{IMAGE_PAYLOAD, Image};
use crate::error::{IoError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Writes `bytes` to `path`, creating or truncating the file.
///
/// Parent directories are not created; writing into a missing directory
/// fails.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file cannot be written.
pub fn write_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    debug!(path = %path_ref.display(), len = bytes.len(), "writing file");

    std::fs::write(path_ref, bytes).map_err(|e| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Writes [`IMAGE_PAYLOAD`] to `path`.
///
/// Returns the image that was written, with its source set to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Examples
///
/// ```no_run
/// use atlas_image::io::write_image;
///
/// let image = write_image("your_image.obj").unwrap();
/// assert_eq!(image.len(), 4);
/// ```
pub fn write_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path_ref = path.as_ref();
    write_bytes(path_ref, &IMAGE_PAYLOAD)?;
    info!(path = %path_ref.display(), "image written");
    Ok(Image::payload().with_source(path_ref))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_image() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("image.obj");

        let image = write_image(&file_path).unwrap();
        assert_eq!(image.source.as_deref(), Some(file_path.as_path()));

        let content = std::fs::read(&file_path).unwrap();
        assert_eq!(content, [0x11, 0x00, 0xD0, 0xE0]);
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("image.obj");
        std::fs::write(&file_path, [0xAA; 64]).unwrap();

        write_image(&file_path).unwrap();

        let content = std::fs::read(&file_path).unwrap();
        assert_eq!(content, IMAGE_PAYLOAD);
    }

    #[test]
    fn test_write_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing/image.obj");

        let result = write_image(&file_path);
        assert!(matches!(
            result,
            Err(crate::Error::Io(IoError::WriteFailed { .. }))
        ));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_write_bytes_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.obj");

        write_bytes(&file_path, &[]).unwrap();

        assert_eq!(std::fs::metadata(&file_path).unwrap().len(), 0);
    }
}

//! Fixed-width hexadecimal formatting.
//!
//! Splits a byte buffer into consecutive chunks of at most
//! [`BYTES_PER_LINE`] bytes and renders each chunk as two-digit uppercase
//! hex values separated by single spaces.

use std::fmt;
use std::fmt::Write;

/// Maximum number of bytes rendered on one line.
pub const BYTES_PER_LINE: usize = 16;

/// Label printed before the hex lines of a dump.
pub const DUMP_HEADER: &str = "Image file contents:";

/// Renders one byte as two uppercase hex digits.
///
/// ```
/// use atlas_image::hex::format_byte;
///
/// assert_eq!(format_byte(0x00), "00");
/// assert_eq!(format_byte(0xFF), "FF");
/// ```
#[must_use]
pub fn format_byte(byte: u8) -> String {
    format!("{byte:02X}")
}

/// Renders a chunk of bytes, space separated, with no trailing padding.
#[must_use]
pub fn format_line(chunk: &[u8]) -> String {
    let mut line = String::with_capacity(chunk.len() * 3);
    for (i, byte) in chunk.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{byte:02X}");
    }
    line
}

/// Yields one formatted line per chunk, in input order.
pub fn hex_lines(bytes: &[u8]) -> impl Iterator<Item = String> + '_ {
    bytes.chunks(BYTES_PER_LINE).map(format_line)
}

/// Number of lines a buffer of `len` bytes renders to.
#[must_use]
pub const fn line_count(len: usize) -> usize {
    len.div_ceil(BYTES_PER_LINE)
}

/// Displayable hex dump: the header line followed by the hex lines.
///
/// Every line, including the last, ends with `\n`.
///
/// ```
/// use atlas_image::hex::HexDump;
///
/// let dump = HexDump::new(&[0x11, 0x00, 0xD0, 0xE0]);
/// assert_eq!(dump.to_string(), "Image file contents:\n11 00 D0 E0\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
}

impl<'a> HexDump<'a> {
    /// Creates a dump over `bytes`.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Formatted data lines, without the header.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        hex_lines(self.bytes).collect()
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DUMP_HEADER}")?;
        for line in hex_lines(self.bytes) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_byte() {
        assert_eq!(format_byte(0x00), "00");
        assert_eq!(format_byte(0x0A), "0A");
        assert_eq!(format_byte(0xD0), "D0");
        assert_eq!(format_byte(0xFF), "FF");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&[]), "");
        assert_eq!(format_line(&[0x01]), "01");
        assert_eq!(format_line(&[0x11, 0x00, 0xD0, 0xE0]), "11 00 D0 E0");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(0), 0);
        assert_eq!(line_count(1), 1);
        assert_eq!(line_count(16), 1);
        assert_eq!(line_count(17), 2);
        assert_eq!(line_count(32), 2);
    }

    #[test]
    fn test_hex_lines_boundary() {
        let bytes: Vec<u8> = (0..17).collect();
        let lines: Vec<String> = hex_lines(&bytes).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F"
        );
        assert_eq!(lines[1], "10");
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(HexDump::new(&[]).to_string(), "Image file contents:\n");
        assert!(HexDump::new(&[]).lines().is_empty());
    }

    #[test]
    fn test_dump_full_line() {
        let bytes = [0xFFu8; 16];
        let dump = HexDump::new(&bytes).to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], DUMP_HEADER);
        assert_eq!(lines[1].split(' ').count(), 16);
        assert!(!lines[1].ends_with(' '));
    }
}

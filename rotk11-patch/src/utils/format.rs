//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a byte offset the way disc image tools show them
pub fn format_offset(offset: u64) -> String {
    format!("0x{offset:X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1024), "1.02 kB");
        assert_eq!(format_bytes(467015680), "467.02 MB");
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0x699800), "0x699800");
        assert_eq!(format_offset(0), "0x0");
    }
}

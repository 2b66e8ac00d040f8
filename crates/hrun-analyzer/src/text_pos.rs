//! UTF-16 / byte offset conversions within a single line.
//!
//! LSP positions count UTF-16 code units; all regex scanning in this crate
//! works on byte offsets into `&str` line slices. These two helpers bridge
//! the gap at the classifier and index boundaries.

/// Convert a UTF-16 column in `line` to a byte offset.
///
/// Columns past the end of the line clamp to `line.len()`, which keeps
/// cursor-at-end-of-line checks inclusive.
pub fn byte_offset_of_utf16_column(
    line: &str,
    column: u32,
) -> usize {
    let mut utf16_offset = 0u32;
    let mut byte_offset = 0usize;
    for ch in line.chars() {
        if utf16_offset >= column {
            break;
        }
        utf16_offset += ch.len_utf16() as u32;
        byte_offset += ch.len_utf8();
    }
    byte_offset
}

/// Convert a byte offset in `line` to a UTF-16 column.
pub fn utf16_column_of_byte_offset(
    line: &str,
    byte_offset: usize,
) -> u32 {
    line[..byte_offset.min(line.len())].encode_utf16().count() as u32
}

/// UTF-16 length of a string slice.
pub fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

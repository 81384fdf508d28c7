//! Fixed-length text fields

use super::check_bounds;
use crate::error::Result;

/// Decode exactly `length` bytes at `offset` as UTF-8.
///
/// Invalid sequences become U+FFFD; NUL padding is kept as-is.
pub fn get_string_at(buf: &[u8], offset: usize, length: usize) -> Result<String> {
    let end = check_bounds(buf.len(), offset, length)?;
    Ok(String::from_utf8_lossy(&buf[offset..end]).into_owned())
}

//! Binary codec layer
//!
//! Pure read/write operations that interpret a byte range starting at an
//! offset as one encoded value. Every call borrows the caller's buffer for
//! its own duration; nothing here allocates a buffer, retains one, or grows
//! one.
//!
//! # Design Principles
//!
//! - **Bounds first**: every fixed-width access is checked before any byte is
//!   touched, so a failing write never leaves a partial value behind
//! - **Explicit endianness**: `Endian` is passed into each call, never global
//! - **Lossy paths are named**: clamping and precision-limited codecs say so
//!   in their names or docs and never raise

pub mod bcd;
pub mod bit_ops;
pub mod bit_string;
pub mod byte_order;
pub mod datetime;
pub mod float;
pub mod integer;
pub mod ipv4;
pub mod text;

pub use bcd::*;
pub use bit_ops::*;
pub use bit_string::*;
pub use byte_order::*;
pub use datetime::*;
pub use float::*;
pub use integer::*;
pub use ipv4::*;
pub use text::*;

use crate::error::{BinViewError, Result};

/// Validate that `width` bytes starting at `offset` fit inside a buffer of
/// `len` bytes, returning the exclusive end index.
#[inline]
pub(crate) fn check_bounds(len: usize, offset: usize, width: usize) -> Result<usize> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(end),
        _ => Err(BinViewError::OutOfBounds { offset, width, len }),
    }
}

/// Copy `N` bytes out of the buffer at `offset`.
#[inline]
pub(crate) fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = check_bounds(buf.len(), offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..end]);
    Ok(out)
}

/// Write `N` bytes into the buffer at `offset`.
#[inline]
pub(crate) fn write_array<const N: usize>(
    buf: &mut [u8],
    offset: usize,
    bytes: [u8; N],
) -> Result<()> {
    let end = check_bounds(buf.len(), offset, N)?;
    buf[offset..end].copy_from_slice(&bytes);
    Ok(())
}

//! IEEE-754 float codecs with decimal precision limiting
//!
//! Reads decode the native float and then round it to a fixed number of
//! decimal places by formatting and re-parsing, so consumers see the same
//! short decimal values regardless of float noise in the stored bits.
//! Writes store the value unchanged.

use super::{read_array, write_array, Endian};
use crate::error::Result;

/// Decimal places kept by 32-bit float reads
pub const FLOAT32_DEFAULT_PRECISION: usize = 3;

/// Decimal places kept by 64-bit float reads
pub const FLOAT64_DEFAULT_PRECISION: usize = 15;

/// Round `value` to `precision` decimal places.
///
/// Rounding happens on the exact binary value during fixed-point formatting,
/// so exact ties resolve to the even digit. NaN and the
/// infinities pass through.
pub fn round_f64(value: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, value)
        .parse()
        .unwrap_or(value)
}

/// 32-bit counterpart of [`round_f64`]
pub fn round_f32(value: f32, precision: usize) -> f32 {
    format!("{:.*}", precision, value)
        .parse()
        .unwrap_or(value)
}

/// Read an `f32` and round it to `precision` decimal places
pub fn get_f32_with_precision(
    buf: &[u8],
    offset: usize,
    precision: usize,
    endian: Endian,
) -> Result<f32> {
    let bytes = read_array::<4>(buf, offset)?;
    let raw = match endian {
        Endian::LittleEndian => f32::from_le_bytes(bytes),
        Endian::BigEndian => f32::from_be_bytes(bytes),
    };
    Ok(round_f32(raw, precision))
}

/// Read an `f32` rounded to [`FLOAT32_DEFAULT_PRECISION`] places
pub fn get_f32(buf: &[u8], offset: usize, endian: Endian) -> Result<f32> {
    get_f32_with_precision(buf, offset, FLOAT32_DEFAULT_PRECISION, endian)
}

pub fn set_f32(buf: &mut [u8], offset: usize, value: f32, endian: Endian) -> Result<()> {
    let bytes = match endian {
        Endian::LittleEndian => value.to_le_bytes(),
        Endian::BigEndian => value.to_be_bytes(),
    };
    write_array(buf, offset, bytes)
}

/// Read an `f64` and round it to `precision` decimal places
pub fn get_f64_with_precision(
    buf: &[u8],
    offset: usize,
    precision: usize,
    endian: Endian,
) -> Result<f64> {
    let bytes = read_array::<8>(buf, offset)?;
    let raw = match endian {
        Endian::LittleEndian => f64::from_le_bytes(bytes),
        Endian::BigEndian => f64::from_be_bytes(bytes),
    };
    Ok(round_f64(raw, precision))
}

/// Read an `f64` rounded to [`FLOAT64_DEFAULT_PRECISION`] places
pub fn get_f64(buf: &[u8], offset: usize, endian: Endian) -> Result<f64> {
    get_f64_with_precision(buf, offset, FLOAT64_DEFAULT_PRECISION, endian)
}

pub fn set_f64(buf: &mut [u8], offset: usize, value: f64, endian: Endian) -> Result<()> {
    let bytes = match endian {
        Endian::LittleEndian => value.to_le_bytes(),
        Endian::BigEndian => value.to_be_bytes(),
    };
    write_array(buf, offset, bytes)
}

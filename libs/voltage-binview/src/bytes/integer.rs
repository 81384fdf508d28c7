//! Fixed-width integer codecs
//!
//! Two's-complement integers of 8, 16, 32 and 64 bits, plus a variable-width
//! codec for 1..=8 byte fields and the lossy 64-bit path kept for records
//! written by consumers limited to 53-bit integer precision.

use tracing::debug;

use super::{check_bounds, read_array, write_array, Endian};
use crate::error::{BinViewError, Result};

/// Largest magnitude the lossy 64-bit path represents exactly (2^53)
pub const LOSSY_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// 8-bit
// ============================================================================

/// Read an unsigned byte. Endianness does not apply.
pub fn get_u8(buf: &[u8], offset: usize) -> Result<u8> {
    let [byte] = read_array::<1>(buf, offset)?;
    Ok(byte)
}

pub fn set_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<()> {
    write_array(buf, offset, [value])
}

/// Read a signed byte: raw values >= 128 become `value - 256`.
pub fn get_i8(buf: &[u8], offset: usize) -> Result<i8> {
    let [byte] = read_array::<1>(buf, offset)?;
    Ok(byte as i8)
}

/// Write a signed byte, clamping `value` into [-128, 127].
///
/// Lossy: out-of-range input is saturated, not rejected. Use
/// [`crate::ranged::Int8`] for strict validation.
pub fn set_i8(buf: &mut [u8], offset: usize, value: i32) -> Result<()> {
    let clamped = value.clamp(i8::MIN as i32, i8::MAX as i32);
    if clamped != value {
        debug!("int8 write clamped {} to {} at offset {}", value, clamped, offset);
    }
    write_array(buf, offset, [clamped as i8 as u8])
}

// ============================================================================
// 16/32/64-bit
// ============================================================================

macro_rules! int_codec {
    ($get:ident, $set:ident, $ty:ty, $width:literal) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at `offset` with the given byte order")]
        pub fn $get(buf: &[u8], offset: usize, endian: Endian) -> Result<$ty> {
            let bytes = read_array::<$width>(buf, offset)?;
            Ok(match endian {
                Endian::LittleEndian => <$ty>::from_le_bytes(bytes),
                Endian::BigEndian => <$ty>::from_be_bytes(bytes),
            })
        }

        #[doc = concat!("Write a `", stringify!($ty), "` at `offset` with the given byte order")]
        pub fn $set(buf: &mut [u8], offset: usize, value: $ty, endian: Endian) -> Result<()> {
            let bytes = match endian {
                Endian::LittleEndian => value.to_le_bytes(),
                Endian::BigEndian => value.to_be_bytes(),
            };
            write_array(buf, offset, bytes)
        }
    };
}

int_codec!(get_u16, set_u16, u16, 2);
int_codec!(get_i16, set_i16, i16, 2);
int_codec!(get_u32, set_u32, u32, 4);
int_codec!(get_i32, set_i32, i32, 4);
int_codec!(get_u64, set_u64, u64, 8);
int_codec!(get_i64, set_i64, i64, 8);

// ============================================================================
// Lossy 64-bit path
// ============================================================================

/// Read a signed 64-bit integer into an `f64` by accumulating one byte at a
/// time.
///
/// Lossy: magnitudes beyond 2^53 are rounded to the nearest representable
/// double. Use [`get_i64`] for exact values.
pub fn get_i64_lossy(buf: &[u8], offset: usize, endian: Endian) -> Result<f64> {
    let mut bytes = read_array::<8>(buf, offset)?;
    if endian.is_little_endian() {
        bytes.reverse();
    }

    // negative values accumulate the one's complement: -(!x + 1)
    let negative = bytes[0] & 0x80 != 0;
    let mut result = 0.0f64;
    for byte in bytes {
        let byte = if negative { !byte } else { byte };
        result = result * 256.0 + f64::from(byte);
    }
    if negative {
        result = -(result + 1.0);
    }

    if result.abs() > LOSSY_SAFE_INTEGER {
        debug!("lossy int64 read beyond 2^53 at offset {}", offset);
    }
    Ok(result)
}

/// Write an `f64` as a signed 64-bit integer.
///
/// Lossy: the fractional part is truncated and values outside the i64 range
/// saturate; NaN writes zero.
pub fn set_i64_lossy(buf: &mut [u8], offset: usize, value: f64, endian: Endian) -> Result<()> {
    if value.abs() > LOSSY_SAFE_INTEGER {
        debug!("lossy int64 write beyond 2^53 at offset {}", offset);
    }
    set_i64(buf, offset, value as i64, endian)
}

// ============================================================================
// Variable width
// ============================================================================

fn check_width(width: usize) -> Result<()> {
    if (1..=8).contains(&width) {
        Ok(())
    } else {
        Err(BinViewError::UnsupportedWidth { width })
    }
}

/// Read an unsigned integer of `width` bytes (1..=8)
pub fn get_uint_n(buf: &[u8], offset: usize, width: usize, endian: Endian) -> Result<u64> {
    check_width(width)?;
    let end = check_bounds(buf.len(), offset, width)?;
    let field = &buf[offset..end];

    let fold = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
    Ok(match endian {
        Endian::BigEndian => field.iter().fold(0, fold),
        Endian::LittleEndian => field.iter().rev().fold(0, fold),
    })
}

/// Read a signed integer of `width` bytes (1..=8), sign-extending the top bit
pub fn get_int_n(buf: &[u8], offset: usize, width: usize, endian: Endian) -> Result<i64> {
    let unsigned = get_uint_n(buf, offset, width, endian)?;
    let bits = width * 8;
    if bits == 64 {
        return Ok(unsigned as i64);
    }

    let sign_bit = 1u64 << (bits - 1);
    if unsigned & sign_bit != 0 {
        let mask = !((1u64 << bits) - 1);
        Ok((unsigned | mask) as i64)
    } else {
        Ok(unsigned as i64)
    }
}

/// Write the low `width` bytes (1..=8) of `value`. Higher bytes are dropped.
pub fn set_uint_n(
    buf: &mut [u8],
    offset: usize,
    width: usize,
    value: u64,
    endian: Endian,
) -> Result<()> {
    check_width(width)?;
    let end = check_bounds(buf.len(), offset, width)?;
    let field = &mut buf[offset..end];

    let le = value.to_le_bytes();
    match endian {
        Endian::LittleEndian => field.copy_from_slice(&le[..width]),
        Endian::BigEndian => {
            for (dst, src) in field.iter_mut().zip(le[..width].iter().rev()) {
                *dst = *src;
            }
        },
    }
    Ok(())
}

//! Binary-Coded Decimal codec
//!
//! One byte holds two decimal digits: tens in bits 7-4, ones in bits 3-0.
//! Common in industrial devices for displaying human-readable values.

use super::{get_byte_at, set_byte_at, Endian};
use crate::error::{BinViewError, Result};

/// Decode a packed BCD byte into its decimal value (0..=99)
pub fn bcd_to_decimal(byte: u8) -> Result<u8> {
    let high = (byte >> 4) & 0x0F;
    let low = byte & 0x0F;

    // Validate BCD digits
    if high > 9 || low > 9 {
        return Err(BinViewError::InvalidBcdDigit { byte });
    }

    Ok(high * 10 + low)
}

/// Encode a decimal value (0..=99) as a packed BCD byte
pub fn decimal_to_bcd(value: u8) -> Result<u8> {
    if value > 99 {
        return Err(BinViewError::out_of_range(value, 0, 99));
    }
    Ok(((value / 10) << 4) | (value % 10))
}

/// Read the BCD byte at `offset` as a decimal value
pub fn get_bcd_at(buf: &[u8], offset: usize, endian: Endian) -> Result<u8> {
    bcd_to_decimal(get_byte_at(buf, offset, endian)?)
}

/// Store a decimal value (0..=99) at `offset` as a BCD byte
pub fn set_bcd_at(buf: &mut [u8], offset: usize, value: u8, endian: Endian) -> Result<()> {
    let encoded = decimal_to_bcd(value)?;
    set_byte_at(buf, offset, encoded, endian)
}

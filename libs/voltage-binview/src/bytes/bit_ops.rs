//! Bit and nibble codecs
//!
//! Single-bit and 4-bit field access within one byte. Both read and write
//! through [`get_byte_at`]/[`set_byte_at`], so under `BigEndian` they address
//! the word-swapped view of the buffer.
//! Common use cases:
//! - Modbus coil/discrete input processing
//! - Status register bit manipulation
//! - Packed 4-bit mode selectors

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{get_byte_at, set_byte_at, Endian};
use crate::error::{BinViewError, Result};

/// Single-bit masks indexed by bit position (bit 0 = least significant)
pub const BIT_MASKS: [u8; 8] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

/// Clamp a bit index into 0..=7.
///
/// Out-of-range indices select the nearest valid bit instead of failing.
#[inline]
pub fn clamp_bit_index(bit: i32) -> usize {
    let clamped = bit.clamp(0, 7);
    if clamped != bit {
        debug!("bit index {} clamped to {}", bit, clamped);
    }
    clamped as usize
}

/// Test one bit of a byte value
#[inline]
pub fn byte_bit(byte: u8, bit: i32) -> bool {
    byte & BIT_MASKS[clamp_bit_index(bit)] != 0
}

/// Return `byte` with one bit set or cleared
#[inline]
pub fn with_byte_bit(byte: u8, bit: i32, value: bool) -> u8 {
    let mask = BIT_MASKS[clamp_bit_index(bit)];
    if value {
        byte | mask
    } else {
        byte & !mask
    }
}

/// Read bit `bit` of the byte at `offset`
pub fn get_bit(buf: &[u8], offset: usize, bit: i32, endian: Endian) -> Result<bool> {
    let byte = get_byte_at(buf, offset, endian)?;
    Ok(byte_bit(byte, bit))
}

/// Set or clear bit `bit` of the byte at `offset`
pub fn set_bit(buf: &mut [u8], offset: usize, bit: i32, value: bool, endian: Endian) -> Result<()> {
    let byte = get_byte_at(buf, offset, endian)?;
    set_byte_at(buf, offset, with_byte_bit(byte, bit, value), endian)
}

/// Invert bit `bit` of the byte at `offset`. Not atomic.
pub fn toggle_bit(buf: &mut [u8], offset: usize, bit: i32, endian: Endian) -> Result<()> {
    let current = get_bit(buf, offset, bit, endian)?;
    set_bit(buf, offset, bit, !current, endian)
}

// ============================================================================
// Nibbles
// ============================================================================

/// Which half of a byte a nibble occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NibbleSignificance {
    /// Bits 3-0
    Least,
    /// Bits 7-4
    Most,
}

impl NibbleSignificance {
    #[inline]
    fn shift(self) -> u32 {
        match self {
            Self::Least => 0,
            Self::Most => 4,
        }
    }
}

impl FromStr for NibbleSignificance {
    type Err = BinViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "least" | "low" => Ok(Self::Least),
            "most" | "high" => Ok(Self::Most),
            _ => Err(BinViewError::invalid_data(format!(
                "unknown nibble significance '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for NibbleSignificance {
    type Error = BinViewError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Extract one nibble (0..=15) of a byte value
#[inline]
pub fn byte_nibble(byte: u8, significance: NibbleSignificance) -> u8 {
    (byte >> significance.shift()) & 0x0F
}

/// Return `byte` with one nibble replaced, leaving the other half intact
pub fn with_byte_nibble(byte: u8, significance: NibbleSignificance, nibble: u8) -> Result<u8> {
    if nibble > 0x0F {
        return Err(BinViewError::out_of_range(nibble, 0, 15));
    }
    let shift = significance.shift();
    Ok((byte & !(0x0F << shift)) | (nibble << shift))
}

/// Read a nibble of the byte at `offset`
pub fn get_nibble(
    buf: &[u8],
    offset: usize,
    significance: NibbleSignificance,
    endian: Endian,
) -> Result<u8> {
    let byte = get_byte_at(buf, offset, endian)?;
    Ok(byte_nibble(byte, significance))
}

/// Replace a nibble of the byte at `offset`
pub fn set_nibble(
    buf: &mut [u8],
    offset: usize,
    significance: NibbleSignificance,
    nibble: u8,
    endian: Endian,
) -> Result<()> {
    let byte = get_byte_at(buf, offset, endian)?;
    set_byte_at(buf, offset, with_byte_nibble(byte, significance, nibble)?, endian)
}

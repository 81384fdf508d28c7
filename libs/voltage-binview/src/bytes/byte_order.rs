//! Endianness tag and byte-order utilities
//!
//! Provides the two-valued `Endian` tag threaded into every multi-byte codec,
//! whole-buffer element swaps, the 16-bit word-pair swap, and the
//! word-normalized byte accessor used by the bit, nibble and BCD codecs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::check_bounds;
use crate::error::{BinViewError, Result};

/// Byte order of multi-byte values
///
/// Uses the same ABCD notation as the Modbus point tables: for the 32-bit
/// value `0x12345678`
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
///
/// For single-byte codecs that read through [`get_byte_at`], `BigEndian` also
/// means "address the buffer as if every 16-bit word were byte-swapped".
///
/// Serializes as `"LE"`/`"BE"`; deserializes through [`Endian::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Endian {
    /// Least significant byte first
    #[default]
    #[serde(rename = "LE")]
    LittleEndian,

    /// Most significant byte first (network byte order)
    #[serde(rename = "BE")]
    BigEndian,
}

impl Endian {
    /// Byte order of the target platform
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Short name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LittleEndian => "LE",
            Self::BigEndian => "BE",
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl FromStr for Endian {
    type Err = BinViewError;

    /// Accepts "LE"/"BE", the ABCD notation ("DCBA"/"ABCD", dashes allowed)
    /// and the long forms ("little_endian", "BigEndian", ...).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_uppercase().replace('-', "");
        match normalized.as_str() {
            "LE" | "DCBA" | "BA" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Ok(Self::LittleEndian),
            "BE" | "ABCD" | "AB" | "BIG_ENDIAN" | "BIGENDIAN" => Ok(Self::BigEndian),
            _ => Err(BinViewError::invalid_data(format!(
                "unknown endianness '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Endian {
    type Error = BinViewError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Whole-buffer swaps
// ============================================================================

fn swap_elements(buf: &mut [u8], width: usize) -> Result<()> {
    if buf.len() % width != 0 {
        return Err(BinViewError::UnalignedLength {
            len: buf.len(),
            width,
        });
    }
    buf.chunks_exact_mut(width).for_each(<[u8]>::reverse);
    Ok(())
}

/// Reverse the bytes of every 16-bit element in place
pub fn swap16(buf: &mut [u8]) -> Result<()> {
    swap_elements(buf, 2)
}

/// Reverse the bytes of every 32-bit element in place
pub fn swap32(buf: &mut [u8]) -> Result<()> {
    swap_elements(buf, 4)
}

/// Reverse the bytes of every 64-bit element in place
pub fn swap64(buf: &mut [u8]) -> Result<()> {
    swap_elements(buf, 8)
}

/// Swap the bytes of every complete 16-bit pair, leaving a trailing odd byte
/// where it is.
pub fn swap16_pairs(buf: &mut [u8]) {
    for pair in buf.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

/// Swap adjacent 16-bit words: `[w0, w1, w2, w3] -> [w1, w0, w3, w2]`
///
/// Returns a new buffer. Bytes past the last complete 4-byte group are copied
/// unchanged.
pub fn swap_words(buf: &[u8]) -> Vec<u8> {
    let mut out = buf.to_vec();
    for group in out.chunks_exact_mut(4) {
        group.rotate_left(2);
    }
    out
}

// ============================================================================
// Word-normalized byte access
// ============================================================================

/// Physical index of logical byte `offset` under `endian`.
///
/// Big-endian addressing pairs each byte with its 16-bit word partner; an
/// unpaired trailing byte maps to itself.
pub fn byte_position(len: usize, offset: usize, endian: Endian) -> Result<usize> {
    check_bounds(len, offset, 1)?;
    match endian {
        Endian::LittleEndian => Ok(offset),
        Endian::BigEndian => {
            let partner = offset ^ 1;
            Ok(if partner < len { partner } else { offset })
        },
    }
}

/// Read the byte at `offset` through the endian word normalization
pub fn get_byte_at(buf: &[u8], offset: usize, endian: Endian) -> Result<u8> {
    let pos = byte_position(buf.len(), offset, endian)?;
    Ok(buf[pos])
}

/// Write the byte at `offset` through the endian word normalization
pub fn set_byte_at(buf: &mut [u8], offset: usize, value: u8, endian: Endian) -> Result<()> {
    let pos = byte_position(buf.len(), offset, endian)?;
    buf[pos] = value;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!("LE".parse::<Endian>().unwrap(), Endian::LittleEndian);
        assert_eq!("dcba".parse::<Endian>().unwrap(), Endian::LittleEndian);
        assert_eq!("little_endian".parse::<Endian>().unwrap(), Endian::LittleEndian);
        assert_eq!("BE".parse::<Endian>().unwrap(), Endian::BigEndian);
        assert_eq!("AB-CD".parse::<Endian>().unwrap(), Endian::BigEndian);
        assert_eq!("BigEndian".parse::<Endian>().unwrap(), Endian::BigEndian);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("CDAB".parse::<Endian>().is_err());
        assert!("".parse::<Endian>().is_err());
    }

    fn deserialize(name: &str) -> Result<Endian> {
        use figment::{providers::Serialized, Figment};
        Ok(Figment::from(Serialized::default("endian", name)).extract_inner("endian")?)
    }

    #[test]
    fn test_deserialize_accepts_every_parsed_form() {
        for name in ["LE", "le", "DCBA", "BA", "little_endian", "LittleEndian"] {
            assert_eq!(deserialize(name).unwrap(), Endian::LittleEndian, "{}", name);
        }
        for name in ["BE", "ABCD", "AB-CD", "big_endian", "BigEndian"] {
            assert_eq!(deserialize(name).unwrap(), Endian::BigEndian, "{}", name);
        }
        assert!(matches!(deserialize("CDAB"), Err(BinViewError::Config(_))));
    }

    #[test]
    fn test_default_is_little_endian() {
        assert_eq!(Endian::default(), Endian::LittleEndian);
        assert_eq!(Endian::default().to_string(), "LE");
    }

    #[test]
    fn test_swap16_32_64() {
        let mut data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

        swap16(&mut data).unwrap();
        assert_eq!(data, [0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07]);
        swap16(&mut data).unwrap();

        swap32(&mut data).unwrap();
        assert_eq!(data, [0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]);
        swap32(&mut data).unwrap();

        swap64(&mut data).unwrap();
        assert_eq!(data, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_swap_unaligned_rejected() {
        let mut data = [0x01, 0x02, 0x03];
        assert_eq!(
            swap16(&mut data),
            Err(BinViewError::UnalignedLength { len: 3, width: 2 })
        );
        assert_eq!(data, [0x01, 0x02, 0x03]);
        assert!(swap32(&mut [0u8; 6]).is_err());
        assert!(swap64(&mut [0u8; 12]).is_err());
    }

    #[test]
    fn test_swap16_pairs_keeps_tail() {
        let mut data = [0x01, 0x02, 0x03];
        swap16_pairs(&mut data);
        assert_eq!(data, [0x02, 0x01, 0x03]);
    }

    #[test]
    fn test_swap_words() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
        assert_eq!(
            swap_words(&data),
            vec![0x56, 0x78, 0x12, 0x34, 0xDE, 0xF0, 0x9A, 0xBC]
        );
    }

    #[test]
    fn test_swap_words_partial_group() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];
        assert_eq!(
            swap_words(&data),
            vec![0x56, 0x78, 0x12, 0x34, 0x9A, 0xBC]
        );
        assert!(swap_words(&[]).is_empty());
    }

    #[test]
    fn test_byte_position() {
        assert_eq!(byte_position(4, 0, Endian::LittleEndian).unwrap(), 0);
        assert_eq!(byte_position(4, 0, Endian::BigEndian).unwrap(), 1);
        assert_eq!(byte_position(4, 3, Endian::BigEndian).unwrap(), 2);
        // unpaired trailing byte
        assert_eq!(byte_position(5, 4, Endian::BigEndian).unwrap(), 4);
        assert!(byte_position(4, 4, Endian::BigEndian).is_err());
    }

    #[test]
    fn test_byte_access_matches_swapped_buffer() {
        let data = [0x11, 0x22, 0x33, 0x44];
        let mut swapped = data;
        swap16(&mut swapped).unwrap();

        for offset in 0..data.len() {
            assert_eq!(
                get_byte_at(&data, offset, Endian::BigEndian).unwrap(),
                swapped[offset]
            );
        }
    }

    #[test]
    fn test_set_byte_at_big_endian() {
        let mut data = [0u8; 2];
        set_byte_at(&mut data, 0, 0xAB, Endian::BigEndian).unwrap();
        assert_eq!(data, [0x00, 0xAB]);
        set_byte_at(&mut data, 0, 0xCD, Endian::LittleEndian).unwrap();
        assert_eq!(data, [0xCD, 0xAB]);
    }
}

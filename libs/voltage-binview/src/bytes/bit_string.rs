//! Bit-string debug rendering
//!
//! Renders bytes and words as `0`/`1` text. `Reversed` order (the default)
//! prints bit 0 first, so character `i` corresponds to bit index `i` of
//! [`get_bit`](super::get_bit).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{get_byte_at, get_u16, swap16_pairs, Endian};
use crate::error::{BinViewError, Result};

/// Character order of rendered bit strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BitOrder {
    /// Most significant bit first, as written positionally
    Normal,
    /// Least significant bit first (bit 0 is the first character)
    #[default]
    Reversed,
}

impl FromStr for BitOrder {
    type Err = BinViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "msb" => Ok(Self::Normal),
            "reversed" | "lsb" => Ok(Self::Reversed),
            _ => Err(BinViewError::invalid_data(format!("unknown bit order '{}'", s))),
        }
    }
}

impl TryFrom<String> for BitOrder {
    type Error = BinViewError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

fn render(positional: String, order: BitOrder) -> String {
    match order {
        BitOrder::Normal => positional,
        BitOrder::Reversed => positional.chars().rev().collect(),
    }
}

/// Render one byte as 8 characters
pub fn byte_to_bit_string(byte: u8, order: BitOrder) -> String {
    render(format!("{:08b}", byte), order)
}

/// Render one 16-bit word as 16 characters
pub fn word_to_bit_string(word: u16, order: BitOrder) -> String {
    render(format!("{:016b}", word), order)
}

/// Render every byte of the buffer.
///
/// Under `BigEndian` the bytes are first taken in 16-bit-swapped order, the
/// same view [`get_byte_at`] exposes, so entry `i` always describes logical
/// byte `i`.
pub fn buffer_to_bit_strings(buf: &[u8], endian: Endian, order: BitOrder) -> Vec<String> {
    let mut normalized = buf.to_vec();
    if endian.is_big_endian() {
        swap16_pairs(&mut normalized);
    }
    normalized
        .into_iter()
        .map(|byte| byte_to_bit_string(byte, order))
        .collect()
}

/// Render the (word-normalized) byte at `offset`
pub fn get_byte_bit_string_at(
    buf: &[u8],
    offset: usize,
    order: BitOrder,
    endian: Endian,
) -> Result<String> {
    Ok(byte_to_bit_string(get_byte_at(buf, offset, endian)?, order))
}

/// Render the `u16` at `offset`, read with `endian`
pub fn get_u16_bit_string_at(
    buf: &[u8],
    offset: usize,
    order: BitOrder,
    endian: Endian,
) -> Result<String> {
    Ok(word_to_bit_string(get_u16(buf, offset, endian)?, order))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_bit_string() {
        assert_eq!(byte_to_bit_string(0b1011_0110, BitOrder::Normal), "10110110");
        assert_eq!(byte_to_bit_string(0b1011_0110, BitOrder::Reversed), "01101101");
        assert_eq!(byte_to_bit_string(0x01, BitOrder::Normal), "00000001");
        assert_eq!(byte_to_bit_string(0x01, BitOrder::default()), "10000000");
    }

    #[test]
    fn test_reversed_matches_bit_index() {
        let byte = 0x5C;
        let rendered = byte_to_bit_string(byte, BitOrder::Reversed);
        for (bit, ch) in rendered.chars().enumerate() {
            assert_eq!(ch == '1', crate::bytes::byte_bit(byte, bit as i32));
        }
    }

    #[test]
    fn test_word_to_bit_string() {
        assert_eq!(word_to_bit_string(0x8001, BitOrder::Normal), "1000000000000001");
        assert_eq!(word_to_bit_string(0x0003, BitOrder::Reversed), "1100000000000000");
    }

    #[test]
    fn test_buffer_to_bit_strings_little_endian() {
        let buf = [0x01, 0x80];
        assert_eq!(
            buffer_to_bit_strings(&buf, Endian::LittleEndian, BitOrder::Normal),
            vec!["00000001", "10000000"]
        );
    }

    #[test]
    fn test_buffer_to_bit_strings_big_endian_swaps_words() {
        let buf = [0x01, 0x80, 0xFF];
        assert_eq!(
            buffer_to_bit_strings(&buf, Endian::BigEndian, BitOrder::Normal),
            vec!["10000000", "00000001", "11111111"]
        );
    }

    #[test]
    fn test_at_helpers() {
        let buf = [0x0F, 0xF0];
        assert_eq!(
            get_byte_bit_string_at(&buf, 0, BitOrder::Normal, Endian::BigEndian).unwrap(),
            "11110000"
        );
        assert_eq!(
            get_u16_bit_string_at(&buf, 0, BitOrder::Normal, Endian::BigEndian).unwrap(),
            "0000111111110000"
        );
        assert!(get_u16_bit_string_at(&buf, 1, BitOrder::Normal, Endian::BigEndian).is_err());
    }

    #[test]
    fn test_bit_order_from_str() {
        assert_eq!("NORMAL".parse::<BitOrder>().unwrap(), BitOrder::Normal);
        assert_eq!("reversed".parse::<BitOrder>().unwrap(), BitOrder::Reversed);
        assert!("sideways".parse::<BitOrder>().is_err());
    }
}

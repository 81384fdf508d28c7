//! Position-relative view over a byte buffer
//!
//! `BinView` borrows a buffer mutably and carries the [`ViewConfig`] settings
//! so callers address fields by offset alone. Every method forwards to the
//! codec functions in [`crate::bytes`].

use chrono::NaiveDateTime;

use crate::bytes::{self, BitOrder, Endian, Ipv4Source, NibbleSignificance};
use crate::config::ViewConfig;
use crate::error::Result;

/// Typed view over `&mut [u8]`
#[derive(Debug)]
pub struct BinView<'a> {
    buf: &'a mut [u8],
    config: ViewConfig,
}

impl<'a> BinView<'a> {
    /// View with default precisions and bit order
    pub fn new(buf: &'a mut [u8], endian: Endian) -> Self {
        Self {
            buf,
            config: ViewConfig::default().with_endian(endian),
        }
    }

    pub fn with_config(buf: &'a mut [u8], config: &ViewConfig) -> Self {
        Self {
            buf,
            config: config.clone(),
        }
    }

    pub fn endian(&self) -> Endian {
        self.config.endian
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf
    }

    // ------------------------------------------------------------------
    // Byte order
    // ------------------------------------------------------------------

    pub fn swap16(&mut self) -> Result<()> {
        bytes::swap16(self.buf)
    }

    pub fn swap32(&mut self) -> Result<()> {
        bytes::swap32(self.buf)
    }

    pub fn swap64(&mut self) -> Result<()> {
        bytes::swap64(self.buf)
    }

    /// Copy of the buffer with adjacent 16-bit words swapped
    pub fn swap_words(&self) -> Vec<u8> {
        bytes::swap_words(self.buf)
    }

    // ------------------------------------------------------------------
    // Bits and nibbles
    // ------------------------------------------------------------------

    pub fn get_bit_at(&self, offset: usize, bit: i32) -> Result<bool> {
        bytes::get_bit(self.buf, offset, bit, self.config.endian)
    }

    pub fn set_bit_at(&mut self, offset: usize, bit: i32, value: bool) -> Result<()> {
        bytes::set_bit(self.buf, offset, bit, value, self.config.endian)
    }

    pub fn toggle_bit_at(&mut self, offset: usize, bit: i32) -> Result<()> {
        bytes::toggle_bit(self.buf, offset, bit, self.config.endian)
    }

    pub fn get_nibble_at(&self, offset: usize, significance: NibbleSignificance) -> Result<u8> {
        bytes::get_nibble(self.buf, offset, significance, self.config.endian)
    }

    pub fn set_nibble_at(
        &mut self,
        offset: usize,
        significance: NibbleSignificance,
        nibble: u8,
    ) -> Result<()> {
        bytes::set_nibble(self.buf, offset, significance, nibble, self.config.endian)
    }

    // ------------------------------------------------------------------
    // Integers
    // ------------------------------------------------------------------

    pub fn get_u8_at(&self, offset: usize) -> Result<u8> {
        bytes::get_u8(self.buf, offset)
    }

    pub fn set_u8_at(&mut self, offset: usize, value: u8) -> Result<()> {
        bytes::set_u8(self.buf, offset, value)
    }

    pub fn get_i8_at(&self, offset: usize) -> Result<i8> {
        bytes::get_i8(self.buf, offset)
    }

    /// Clamps into [-128, 127]
    pub fn set_i8_at(&mut self, offset: usize, value: i32) -> Result<()> {
        bytes::set_i8(self.buf, offset, value)
    }

    /// Word-normalized byte, as seen by the bit and BCD accessors
    pub fn get_byte_at(&self, offset: usize) -> Result<u8> {
        bytes::get_byte_at(self.buf, offset, self.config.endian)
    }

    pub fn set_byte_at(&mut self, offset: usize, value: u8) -> Result<()> {
        bytes::set_byte_at(self.buf, offset, value, self.config.endian)
    }

    pub fn get_u16_at(&self, offset: usize) -> Result<u16> {
        bytes::get_u16(self.buf, offset, self.config.endian)
    }

    pub fn set_u16_at(&mut self, offset: usize, value: u16) -> Result<()> {
        bytes::set_u16(self.buf, offset, value, self.config.endian)
    }

    pub fn get_i16_at(&self, offset: usize) -> Result<i16> {
        bytes::get_i16(self.buf, offset, self.config.endian)
    }

    pub fn set_i16_at(&mut self, offset: usize, value: i16) -> Result<()> {
        bytes::set_i16(self.buf, offset, value, self.config.endian)
    }

    pub fn get_u32_at(&self, offset: usize) -> Result<u32> {
        bytes::get_u32(self.buf, offset, self.config.endian)
    }

    pub fn set_u32_at(&mut self, offset: usize, value: u32) -> Result<()> {
        bytes::set_u32(self.buf, offset, value, self.config.endian)
    }

    pub fn get_i32_at(&self, offset: usize) -> Result<i32> {
        bytes::get_i32(self.buf, offset, self.config.endian)
    }

    pub fn set_i32_at(&mut self, offset: usize, value: i32) -> Result<()> {
        bytes::set_i32(self.buf, offset, value, self.config.endian)
    }

    pub fn get_u64_at(&self, offset: usize) -> Result<u64> {
        bytes::get_u64(self.buf, offset, self.config.endian)
    }

    pub fn set_u64_at(&mut self, offset: usize, value: u64) -> Result<()> {
        bytes::set_u64(self.buf, offset, value, self.config.endian)
    }

    pub fn get_i64_at(&self, offset: usize) -> Result<i64> {
        bytes::get_i64(self.buf, offset, self.config.endian)
    }

    pub fn set_i64_at(&mut self, offset: usize, value: i64) -> Result<()> {
        bytes::set_i64(self.buf, offset, value, self.config.endian)
    }

    /// Lossy beyond 2^53, see [`bytes::get_i64_lossy`]
    pub fn get_i64_lossy_at(&self, offset: usize) -> Result<f64> {
        bytes::get_i64_lossy(self.buf, offset, self.config.endian)
    }

    pub fn set_i64_lossy_at(&mut self, offset: usize, value: f64) -> Result<()> {
        bytes::set_i64_lossy(self.buf, offset, value, self.config.endian)
    }

    pub fn get_uint_n_at(&self, offset: usize, width: usize) -> Result<u64> {
        bytes::get_uint_n(self.buf, offset, width, self.config.endian)
    }

    pub fn get_int_n_at(&self, offset: usize, width: usize) -> Result<i64> {
        bytes::get_int_n(self.buf, offset, width, self.config.endian)
    }

    pub fn set_uint_n_at(&mut self, offset: usize, width: usize, value: u64) -> Result<()> {
        bytes::set_uint_n(self.buf, offset, width, value, self.config.endian)
    }

    // ------------------------------------------------------------------
    // Floats
    // ------------------------------------------------------------------

    /// Rounded to the view's `float32_precision`
    pub fn get_f32_at(&self, offset: usize) -> Result<f32> {
        let precision = self.config.float32_precision;
        bytes::get_f32_with_precision(self.buf, offset, precision, self.config.endian)
    }

    pub fn get_f32_with_precision_at(&self, offset: usize, precision: usize) -> Result<f32> {
        bytes::get_f32_with_precision(self.buf, offset, precision, self.config.endian)
    }

    pub fn set_f32_at(&mut self, offset: usize, value: f32) -> Result<()> {
        bytes::set_f32(self.buf, offset, value, self.config.endian)
    }

    /// Rounded to the view's `float64_precision`
    pub fn get_f64_at(&self, offset: usize) -> Result<f64> {
        let precision = self.config.float64_precision;
        bytes::get_f64_with_precision(self.buf, offset, precision, self.config.endian)
    }

    pub fn get_f64_with_precision_at(&self, offset: usize, precision: usize) -> Result<f64> {
        bytes::get_f64_with_precision(self.buf, offset, precision, self.config.endian)
    }

    pub fn set_f64_at(&mut self, offset: usize, value: f64) -> Result<()> {
        bytes::set_f64(self.buf, offset, value, self.config.endian)
    }

    // ------------------------------------------------------------------
    // Derived formats
    // ------------------------------------------------------------------

    pub fn get_bcd_at(&self, offset: usize) -> Result<u8> {
        bytes::get_bcd_at(self.buf, offset, self.config.endian)
    }

    pub fn set_bcd_at(&mut self, offset: usize, value: u8) -> Result<()> {
        bytes::set_bcd_at(self.buf, offset, value, self.config.endian)
    }

    pub fn get_s7_datetime_at(&self, offset: usize) -> Result<NaiveDateTime> {
        bytes::get_s7_datetime(self.buf, offset)
    }

    pub fn set_s7_datetime_at(&mut self, offset: usize, datetime: &NaiveDateTime) -> Result<()> {
        bytes::set_s7_datetime(self.buf, offset, datetime)
    }

    pub fn get_ipv4_at(&self, offset: usize) -> Result<[u8; 4]> {
        bytes::get_ipv4(self.buf, offset)
    }

    pub fn get_ipv4_string_at(&self, offset: usize) -> Result<String> {
        bytes::get_ipv4_string(self.buf, offset)
    }

    pub fn set_ipv4_at<'s>(
        &mut self,
        offset: usize,
        address: impl Into<Ipv4Source<'s>>,
    ) -> Result<()> {
        bytes::set_ipv4(self.buf, offset, address)
    }

    pub fn get_string_at(&self, offset: usize, length: usize) -> Result<String> {
        bytes::get_string_at(self.buf, offset, length)
    }

    // ------------------------------------------------------------------
    // Debug rendering
    // ------------------------------------------------------------------

    /// Bit string of the byte at `offset` in the view's bit order
    pub fn get_byte_bit_string_at(&self, offset: usize) -> Result<String> {
        bytes::get_byte_bit_string_at(self.buf, offset, self.config.bit_order, self.config.endian)
    }

    pub fn get_u16_bit_string_at(&self, offset: usize) -> Result<String> {
        bytes::get_u16_bit_string_at(self.buf, offset, self.config.bit_order, self.config.endian)
    }

    /// One bit string per byte, in the view's bit order
    pub fn bit_strings(&self) -> Vec<String> {
        bytes::buffer_to_bit_strings(self.buf, self.config.endian, self.config.bit_order)
    }

    pub fn bit_strings_with_order(&self, order: BitOrder) -> Vec<String> {
        bytes::buffer_to_bit_strings(self.buf, self.config.endian, order)
    }
}

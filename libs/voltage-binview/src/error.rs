//! Binary View Error Types
//!
//! Errors raised by the codec layer propagate unchanged to the caller.
//! The only locally recovered failure is the S7 date-time calendar
//! fallback, which never surfaces here.

use thiserror::Error;

/// Result type for voltage-binview operations
pub type Result<T> = std::result::Result<T, BinViewError>;

/// Binary view errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinViewError {
    /// Offset plus field width runs past the end of the buffer
    #[error("Addressing error: offset {offset} with width {width} exceeds buffer length {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// A nibble above 9 was found while decoding BCD
    #[error("Invalid BCD digit in byte 0x{byte:02X}")]
    InvalidBcdDigit { byte: u8 },

    /// Integer width the codec cannot represent
    #[error("Unsupported integer width: {width} bytes")]
    UnsupportedWidth { width: usize },

    /// Strict range validation failed
    #[error("Number {value} falls out of range [{min}, {max}]")]
    OutOfRange { value: i128, min: i128, max: i128 },

    /// Whole-buffer element swap on a buffer that does not divide evenly
    #[error("Buffer length {len} is not a multiple of {width} bytes")]
    UnalignedLength { len: usize, width: usize },

    /// Input that could not be parsed into the requested form
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for BinViewError {
    fn from(err: figment::Error) -> Self {
        BinViewError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl BinViewError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        BinViewError::InvalidData(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        BinViewError::Config(msg.into())
    }

    pub fn out_of_range(value: impl Into<i128>, min: impl Into<i128>, max: impl Into<i128>) -> Self {
        BinViewError::OutOfRange {
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Check if this error came from addressing outside the buffer
    pub fn is_addressing(&self) -> bool {
        matches!(self, BinViewError::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = BinViewError::out_of_range(129, -128, 127);
        assert_eq!(err.to_string(), "Number 129 falls out of range [-128, 127]");
    }

    #[test]
    fn test_is_addressing() {
        let err = BinViewError::OutOfBounds {
            offset: 3,
            width: 2,
            len: 4,
        };
        assert!(err.is_addressing());
        assert!(!BinViewError::InvalidBcdDigit { byte: 0xAF }.is_addressing());
    }

    #[test]
    fn test_bcd_message_is_hex() {
        let err = BinViewError::InvalidBcdDigit { byte: 0x1A };
        assert_eq!(err.to_string(), "Invalid BCD digit in byte 0x1A");
    }
}

//! Range-checked integer values
//!
//! One generic value type parameterized by its inclusive bounds. Unlike the
//! clamping `set_i8` codec, these reject out-of-range input with
//! [`BinViewError::OutOfRange`].

use crate::error::{BinViewError, Result};

/// Validate that `value` lies in `[min, max]`
pub fn check_in_range(value: i128, min: i128, max: i128) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BinViewError::out_of_range(value, min, max))
    }
}

/// Integer constrained to `MIN..=MAX`
///
/// `MIN <= MAX` is checked at compile time when a constructor or `default`
/// is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ranged<const MIN: i128, const MAX: i128> {
    value: i128,
}

impl<const MIN: i128, const MAX: i128> Ranged<MIN, MAX> {
    pub const MIN: i128 = MIN;
    pub const MAX: i128 = MAX;

    const BOUNDS_ORDERED: () = assert!(MIN <= MAX, "Ranged requires MIN <= MAX");

    pub fn new(value: impl Into<i128>) -> Result<Self> {
        let () = Self::BOUNDS_ORDERED;
        let value = value.into();
        check_in_range(value, MIN, MAX)?;
        Ok(Self { value })
    }

    pub fn value(&self) -> i128 {
        self.value
    }

    /// Replace the value; the old value is kept on failure
    pub fn set(&mut self, value: impl Into<i128>) -> Result<()> {
        let value = value.into();
        check_in_range(value, MIN, MAX)?;
        self.value = value;
        Ok(())
    }

    pub fn contains(value: impl Into<i128>) -> bool {
        (MIN..=MAX).contains(&value.into())
    }
}

impl<const MIN: i128, const MAX: i128> Default for Ranged<MIN, MAX> {
    fn default() -> Self {
        let () = Self::BOUNDS_ORDERED;
        Self {
            value: 0i128.clamp(MIN, MAX),
        }
    }
}

impl<const MIN: i128, const MAX: i128> TryFrom<i128> for Ranged<MIN, MAX> {
    type Error = BinViewError;

    fn try_from(value: i128) -> Result<Self> {
        Self::new(value)
    }
}

impl<const MIN: i128, const MAX: i128> std::fmt::Display for Ranged<MIN, MAX> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub type Int8 = Ranged<{ i8::MIN as i128 }, { i8::MAX as i128 }>;
pub type UInt8 = Ranged<0, { u8::MAX as i128 }>;
pub type Int16 = Ranged<{ i16::MIN as i128 }, { i16::MAX as i128 }>;
pub type UInt16 = Ranged<0, { u16::MAX as i128 }>;
pub type Int32 = Ranged<{ i32::MIN as i128 }, { i32::MAX as i128 }>;
pub type UInt32 = Ranged<0, { u32::MAX as i128 }>;
pub type Int64 = Ranged<{ i64::MIN as i128 }, { i64::MAX as i128 }>;
pub type UInt64 = Ranged<0, { u64::MAX as i128 }>;

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_bounds_per_width() {
        assert_eq!(Int8::MIN, -128);
        assert_eq!(Int8::MAX, 127);
        assert_eq!(UInt16::MAX, 65535);
        assert_eq!(Int64::MIN, i64::MIN as i128);
        assert_eq!(UInt64::MAX, u64::MAX as i128);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Int8::new(127).is_ok());
        let err = Int8::new(129).unwrap_err();
        assert_eq!(err.to_string(), "Number 129 falls out of range [-128, 127]");
        assert!(UInt8::new(-1).is_err());
        assert!(UInt32::new(u32::MAX).is_ok());
    }

    #[test]
    fn test_set_keeps_old_value_on_failure() {
        let mut value = Int16::new(42).unwrap();
        assert!(value.set(40_000).is_err());
        assert_eq!(value.value(), 42);
        value.set(-40).unwrap();
        assert_eq!(value.value(), -40);
    }

    #[test]
    fn test_default_and_contains() {
        assert_eq!(Int32::default().value(), 0);
        assert_eq!(Ranged::<5, 10>::default().value(), 5);
        assert_eq!(Ranged::<-9, -3>::default().value(), -3);
        assert_eq!(Ranged::<7, 7>::default().value(), 7);
        assert!(Ranged::<7, 7>::new(7).is_ok());
        assert!(UInt8::contains(255));
        assert!(!UInt8::contains(256));
    }

    #[test]
    fn test_try_from_and_display() {
        let value = Int8::try_from(-5i128).unwrap();
        assert_eq!(value.to_string(), "-5");
        assert!(UInt16::try_from(70_000i128).is_err());
    }
}

//! Raw bit patterns for the binary32 and binary64 formats.
//!
//! The patterns are plain fixed-width integers and all field addressing is
//! done with shifts and masks, so the types carry no byte-order or memory
//! layout assumptions.

use crate::decompose::{self, DecodedFloat, BINARY32, BINARY64};

/// 4-byte bit pattern interpreted as an IEEE-754 binary32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBits32(pub u32);

impl RawBits32 {
    /// Bit pattern of the nearest binary32 to `value`.
    pub fn from_value(value: f64) -> Self {
        Self((value as f32).to_bits())
    }

    /// The value the host assigns to this pattern, widened to f64 for display.
    pub fn to_value(self) -> f64 {
        f32::from_bits(self.0) as f64
    }

    /// Bytes most-significant first; byte 0 holds the sign bit.
    pub fn bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Break the pattern into sign, exponent, and mantissa fields.
    pub fn decompose(self) -> DecodedFloat {
        decompose::decompose(u64::from(self.0), BINARY32)
    }
}

/// 8-byte bit pattern interpreted as an IEEE-754 binary64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBits64(pub u64);

impl RawBits64 {
    /// Bit pattern of `value`.
    pub fn from_value(value: f64) -> Self {
        Self(value.to_bits())
    }

    /// The value the host assigns to this pattern.
    pub fn to_value(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Bytes most-significant first; byte 0 holds the sign bit.
    pub fn bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Break the pattern into sign, exponent, and mantissa fields.
    pub fn decompose(self) -> DecodedFloat {
        decompose::decompose(self.0, BINARY64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_narrows_to_binary32() {
        assert_eq!(RawBits32::from_value(1.0), RawBits32(0x3f80_0000));
        assert_eq!(RawBits32::from_value(-2.0), RawBits32(0xc000_0000));
    }

    #[test]
    fn test_from_value_binary64() {
        assert_eq!(RawBits64::from_value(1.0), RawBits64(0x3ff0_0000_0000_0000));
    }

    #[test]
    fn test_bytes_most_significant_first() {
        assert_eq!(RawBits32(0x3f80_0000).bytes(), [0x3f, 0x80, 0x00, 0x00]);
        assert_eq!(
            RawBits64(0x3ff0_0000_0000_0000).bytes(),
            [0x3f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_to_value_round_trips() {
        assert_eq!(RawBits32(0x3fc0_0000).to_value(), 1.5);
        assert_eq!(RawBits64::from_value(0.1).to_value(), 0.1);
    }
}

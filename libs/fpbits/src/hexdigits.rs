//! Hex digit strings to raw bit patterns.

use tracing::debug;

use crate::error::{FpBitsError, Result};
use crate::raw::{RawBits32, RawBits64};

/// Parse a string of hex digits into the 32-bit and 64-bit views.
///
/// Digit pairs are consumed from the end of the string, least-significant
/// pair first, into at most 8 bytes; a lone leftover digit fills only the
/// high nibble of its byte. Digits past the 16th are ignored, shorter
/// strings are zero-padded on the most-significant side. The 32-bit view is
/// the low-order 4 bytes, so inputs longer than 8 digits give the float and
/// double views different values. That asymmetry is kept on purpose.
pub fn parse_hex_digits(digits: &str) -> Result<(RawBits32, RawBits64)> {
    for ch in digits.chars() {
        if !ch.is_ascii_hexdigit() {
            return Err(FpBitsError::IllegalHexDigit(ch));
        }
    }

    let raw = digits.as_bytes();
    let mut bits: u64 = 0;
    let mut end = raw.len();
    for byte_pos in 0..8 {
        if end == 0 {
            break;
        }
        let byte = if end >= 2 {
            let assembled = (hex_value(raw[end - 2]) << 4) | hex_value(raw[end - 1]);
            end -= 2;
            assembled
        } else {
            // Lone leading digit fills the high nibble only.
            let assembled = hex_value(raw[end - 1]) << 4;
            end -= 1;
            assembled
        };
        bits |= u64::from(byte) << (8 * byte_pos);
    }

    debug!(digits, bits, "assembled hex digits");

    Ok((RawBits32(bits as u32), RawBits64(bits)))
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        // Unreachable: digits are validated before assembly.
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_digits_fill_both_views() {
        let (single, double) = parse_hex_digits("3f800000").unwrap();
        assert_eq!(single, RawBits32(0x3f80_0000));
        assert_eq!(double, RawBits64(0x3f80_0000));
    }

    #[test]
    fn test_sixteen_digits() {
        let (single, double) = parse_hex_digits("3ff0000000000000").unwrap();
        assert_eq!(double, RawBits64(0x3ff0_0000_0000_0000));
        // Float view only sees the low-order 8 digits.
        assert_eq!(single, RawBits32(0));
    }

    #[test]
    fn test_mixed_case_digits() {
        let (_, double) = parse_hex_digits("3FF0000000000000").unwrap();
        assert_eq!(double, RawBits64(0x3ff0_0000_0000_0000));
    }

    #[test]
    fn test_odd_digit_count_sets_high_nibble() {
        // "3f8": pair "f8" lands in the low byte, leftover "3" fills the
        // high nibble of the next byte.
        let (single, double) = parse_hex_digits("3f8").unwrap();
        assert_eq!(double, RawBits64(0x30f8));
        assert_eq!(single, RawBits32(0x30f8));
    }

    #[test]
    fn test_short_input_zero_padded_on_most_significant_side() {
        let (single, double) = parse_hex_digits("7f").unwrap();
        assert_eq!(single, RawBits32(0x7f));
        assert_eq!(double, RawBits64(0x7f));
    }

    #[test]
    fn test_excess_digits_ignored() {
        let (_, double) = parse_hex_digits("ff3ff0000000000000").unwrap();
        assert_eq!(double, RawBits64(0x3ff0_0000_0000_0000));
    }

    #[test]
    fn test_long_input_view_asymmetry() {
        let (single, double) = parse_hex_digits("11113f800000").unwrap();
        assert_eq!(double, RawBits64(0x1111_3f80_0000));
        assert_eq!(single, RawBits32(0x3f80_0000));
    }

    #[test]
    fn test_empty_string_is_all_zero() {
        let (single, double) = parse_hex_digits("").unwrap();
        assert_eq!(single, RawBits32(0));
        assert_eq!(double, RawBits64(0));
    }

    #[test]
    fn test_illegal_digit() {
        assert_eq!(
            parse_hex_digits("3f8g").unwrap_err(),
            FpBitsError::IllegalHexDigit('g')
        );
    }
}

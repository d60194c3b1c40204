//! Sign/exponent/mantissa field extraction.
//!
//! The mantissa value is rebuilt by binary-fraction summation: start at the
//! implicit 1.0 and walk the stored bits most-significant first, halving the
//! weight term before testing each bit. That halve-then-test order is the
//! contract, not an implementation detail.

use tracing::trace;

/// Field widths and bias of one IEEE-754 binary interchange format.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub mantissa_bits: u32,
    pub exponent_bits: u32,
    pub bias: i32,
}

/// binary32: 1 sign bit, 8 exponent bits (bias 127), 23 mantissa bits.
pub const BINARY32: Layout = Layout {
    mantissa_bits: 23,
    exponent_bits: 8,
    bias: 127,
};

/// binary64: 1 sign bit, 11 exponent bits (bias 1023), 52 mantissa bits.
pub const BINARY64: Layout = Layout {
    mantissa_bits: 52,
    exponent_bits: 11,
    bias: 1023,
};

/// Read-only field breakdown of one bit pattern.
///
/// `mantissa` is 1.0 plus the summed weights of the stored bits; it stays in
/// [1.0, 2.0) for normalized inputs. Subnormal and all-ones exponent fields
/// run through the same sum and are not special-cased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedFloat {
    pub sign: u8,
    pub biased_exponent: u32,
    pub exponent: i32,
    pub mantissa: f64,
}

/// One set mantissa bit: its power of two and the weight it contributed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MantissaTerm {
    pub power: i32,
    pub weight: f64,
}

/// Decompose `bits` according to `layout`.
///
/// Never fails; every fixed-width pattern has a breakdown.
pub fn decompose(bits: u64, layout: Layout) -> DecodedFloat {
    let sign_shift = layout.exponent_bits + layout.mantissa_bits;
    let sign = ((bits >> sign_shift) & 1) as u8;
    let exponent_mask = (1u64 << layout.exponent_bits) - 1;
    let biased_exponent = ((bits >> layout.mantissa_bits) & exponent_mask) as u32;
    let exponent = biased_exponent as i32 - layout.bias;

    let mut mantissa = 1.0_f64;
    let mut term = 1.0_f64;
    for bit in (0..layout.mantissa_bits).rev() {
        term /= 2.0;
        if (bits >> bit) & 1 == 1 {
            mantissa += term;
        }
    }

    trace!(sign, biased_exponent, exponent, mantissa, "decomposed bit pattern");

    DecodedFloat {
        sign,
        biased_exponent,
        exponent,
        mantissa,
    }
}

/// The set mantissa bits of `bits`, most-significant first.
pub fn mantissa_terms(bits: u64, layout: Layout) -> Vec<MantissaTerm> {
    let mut terms = Vec::new();
    let mut term = 1.0_f64;
    let mut power = 0_i32;
    for bit in (0..layout.mantissa_bits).rev() {
        term /= 2.0;
        power -= 1;
        if (bits >> bit) & 1 == 1 {
            terms.push(MantissaTerm {
                power,
                weight: term,
            });
        }
    }
    terms
}

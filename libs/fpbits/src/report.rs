//! Report formatting for decomposed bit patterns.
//!
//! Builds the fixed report line and the optional per-bit mantissa breakdown
//! as strings; callers decide where the text goes.

use std::fmt::Write;

use crate::decompose::{mantissa_terms, Layout, BINARY32, BINARY64};
use crate::gformat::significant;
use crate::raw::{RawBits32, RawBits64};

/// Report options, threaded explicitly instead of living in process state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportConfig {
    /// Emit the per-bit mantissa breakdown ahead of the report line.
    pub verbose: bool,
}

/// Report for the binary32 view of a pattern.
///
/// The line is `0x(<bytes>) (s=<sign> e=<exponent> m=<mantissa>) (<value>)`
/// with bytes most-significant first, the mantissa at 20 decimals, and the
/// value at 20 significant digits.
pub fn single_report(bits: RawBits32, config: &ReportConfig) -> String {
    let decoded = bits.decompose();
    let value = bits.to_value();
    let mut out = String::new();

    if config.verbose {
        breakdown(&mut out, u64::from(bits.0), BINARY32, &significant(value, 10));
    }

    let bytes = bits.bytes();
    // Writing to a String buffer is infallible.
    let _ = writeln!(
        out,
        "0x({:02x} {:02x} {:02x} {:02x}) (s={} e={} m={:.20}) ({})",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        decoded.sign,
        decoded.exponent,
        decoded.mantissa,
        significant(value, 20),
    );
    out
}

/// Report for the binary64 view of a pattern; same shape at 8 bytes.
pub fn double_report(bits: RawBits64, config: &ReportConfig) -> String {
    let decoded = bits.decompose();
    let value = bits.to_value();
    let mut out = String::new();

    if config.verbose {
        breakdown(&mut out, bits.0, BINARY64, &significant(value, 20));
    }

    let bytes = bits.bytes();
    let _ = writeln!(
        out,
        "0x({:02x} {:02x} {:02x} {:02x} {:02x} {:02x} {:02x} {:02x}) (s={} e={} m={:.20}) ({})",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        bytes[4],
        bytes[5],
        bytes[6],
        bytes[7],
        decoded.sign,
        decoded.exponent,
        decoded.mantissa,
        significant(value, 20),
    );
    out
}

/// One line for the implicit 2^0 plus one per set mantissa bit, MSB first,
/// in the same order the decomposition walks them.
fn breakdown(out: &mut String, bits: u64, layout: Layout, shown_value: &str) {
    let _ = writeln!(out, "breakdown of mantissa for {shown_value}");
    let _ = writeln!(out, "     2^{:>3} = {:.20}", 0, 1.0_f64);
    for term in mantissa_terms(bits, layout) {
        let _ = writeln!(out, "     2^{:>3} = {:.20}", term.power, term.weight);
    }
}

/// Host numeric-limits constants, printed by `dumpfloat -debug`.
///
/// Descriptive diagnostics only, not part of the codec contract. Rust has no
/// long double, so the extended section lists the x87 80-bit format's
/// documented values.
pub fn limits_report(include_single: bool, include_double: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RADIX: {}", f32::RADIX);

    if include_single {
        let _ = writeln!(out, "Single constants:");
        let _ = writeln!(out, "    MANTISSA_DIGITS: {}", f32::MANTISSA_DIGITS);
        let _ = writeln!(out, "    DIGITS:          {}", f32::DIGITS);
        let _ = writeln!(out, "    MIN_EXP:         {}", f32::MIN_EXP);
        let _ = writeln!(out, "    MIN_10_EXP:      {}", f32::MIN_10_EXP);
        let _ = writeln!(out, "    MAX_EXP:         {}", f32::MAX_EXP);
        let _ = writeln!(out, "    MAX_10_EXP:      {}", f32::MAX_10_EXP);
    }

    if include_double {
        let _ = writeln!(out, "Double constants:");
        let _ = writeln!(out, "    MANTISSA_DIGITS: {}", f64::MANTISSA_DIGITS);
        let _ = writeln!(out, "    DIGITS:          {}", f64::DIGITS);
        let _ = writeln!(out, "    MIN_EXP:         {}", f64::MIN_EXP);
        let _ = writeln!(out, "    MIN_10_EXP:      {}", f64::MIN_10_EXP);
        let _ = writeln!(out, "    MAX_EXP:         {}", f64::MAX_EXP);
        let _ = writeln!(out, "    MAX_10_EXP:      {}", f64::MAX_10_EXP);

        let _ = writeln!(out, "Extended (x87) constants:");
        let _ = writeln!(out, "    MANTISSA_DIGITS: {X87_MANTISSA_DIGITS}");
        let _ = writeln!(out, "    DIGITS:          {X87_DIGITS}");
        let _ = writeln!(out, "    MIN_EXP:         {X87_MIN_EXP}");
        let _ = writeln!(out, "    MIN_10_EXP:      {X87_MIN_10_EXP}");
        let _ = writeln!(out, "    MAX_EXP:         {X87_MAX_EXP}");
        let _ = writeln!(out, "    MAX_10_EXP:      {X87_MAX_10_EXP}");
    }

    out
}

// x87 80-bit extended format reference values.
const X87_MANTISSA_DIGITS: u32 = 64;
const X87_DIGITS: u32 = 18;
const X87_MIN_EXP: i32 = -16381;
const X87_MIN_10_EXP: i32 = -4931;
const X87_MAX_EXP: i32 = 16384;
const X87_MAX_10_EXP: i32 = 4932;

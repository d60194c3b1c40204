//! fpbits - IEEE-754 bit-field codec
//!
//! Decomposes binary32/binary64 bit patterns into sign, biased exponent, and
//! mantissa fields, rebuilds the mantissa value by binary-fraction summation,
//! and formats the fixed report lines printed by the `dumpfloat` tool.
//!
//! # Example
//!
//! ```rust
//! use fpbits::{parse_hex_digits, ReportConfig};
//!
//! let (single, _double) = parse_hex_digits("3f800000").unwrap();
//! let decoded = single.decompose();
//! assert_eq!(decoded.sign, 0);
//! assert_eq!(decoded.exponent, 0);
//! assert_eq!(decoded.mantissa, 1.0);
//!
//! let report = fpbits::single_report(single, &ReportConfig::default());
//! assert!(report.starts_with("0x(3f 80 00 00)"));
//! ```

pub mod decompose;
pub mod error;
pub mod gformat;
pub mod hexdigits;
pub mod raw;
pub mod report;

pub use decompose::{
    decompose, mantissa_terms, DecodedFloat, Layout, MantissaTerm, BINARY32, BINARY64,
};
pub use error::{FpBitsError, Result};
pub use gformat::significant;
pub use hexdigits::parse_hex_digits;
pub use raw::{RawBits32, RawBits64};
pub use report::{double_report, limits_report, single_report, ReportConfig};

//! Argument handling for the legacy dumpfloat surface.
//!
//! The flag spellings (`-hex`, `-single`, ...) and the exit-code table are
//! pinned by the original tool, so the scan is a small hand loop rather than
//! a derive-based parser. Options come out as one immutable value; nothing
//! lives in process-global state.

use thiserror::Error;

/// How the value string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Hex,
    Dec,
}

/// Which format views get dumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Single,
    Double,
    /// Single view first, then double. The default, and also what an
    /// explicit `-single -double` selects.
    Both,
}

impl Width {
    pub fn includes_single(self) -> bool {
        matches!(self, Width::Single | Width::Both)
    }

    pub fn includes_double(self) -> bool {
        matches!(self, Width::Double | Width::Both)
    }
}

/// Parsed command line, threaded into the codec calls as plain data.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub base: Base,
    pub width: Width,
    pub debug: bool,
    pub value: String,
}

/// Usage errors; each variant owns one process exit code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("bad arg \"{0}\"")]
    UnknownFlag(String),

    #[error("missing value")]
    MissingValue,

    #[error("can't specify both -dec and -hex")]
    ConflictingBase,

    #[error("illegal {0} digit in string")]
    IllegalDigit(&'static str),
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        match self {
            UsageError::UnknownFlag(_) => 1,
            UsageError::MissingValue => 2,
            UsageError::ConflictingBase => 3,
            UsageError::IllegalDigit(_) => 4,
        }
    }
}

pub const USAGE: &str = "usage: dumpfloat [-hex]|[-dec] [-single]|[-double] [-debug] <value>";

/// Scan the arguments into `DumpOptions`.
///
/// Flags are read until the first argument that does not start with `-`;
/// that argument is the value and anything after it is ignored. A leading
/// `-` on the value itself is indistinguishable from a flag, so negative
/// decimals are rejected (a quirk kept from the original tool).
pub fn parse_args<I>(args: I) -> Result<DumpOptions, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut hex = false;
    let mut dec = false;
    let mut single = false;
    let mut double = false;
    let mut debug = false;
    let mut value = None;

    for arg in args {
        if !arg.starts_with('-') {
            value = Some(arg);
            break;
        }
        match arg.as_str() {
            "-hex" => hex = true,
            "-dec" => dec = true,
            "-single" => single = true,
            "-double" => double = true,
            "-debug" => debug = true,
            _ => return Err(UsageError::UnknownFlag(arg)),
        }
    }

    let value = value.ok_or(UsageError::MissingValue)?;

    let base = match (hex, dec) {
        (true, true) => return Err(UsageError::ConflictingBase),
        (true, false) => Base::Hex,
        (false, true) => Base::Dec,
        // No flag given: a decimal point marks a decimal value.
        (false, false) if value.contains('.') => Base::Dec,
        (false, false) => Base::Hex,
    };

    syntax_check(&value, base)?;

    let width = match (single, double) {
        (true, false) => Width::Single,
        (false, true) => Width::Double,
        _ => Width::Both,
    };

    Ok(DumpOptions {
        base,
        width,
        debug,
        value,
    })
}

/// Reject characters outside the numeral alphabet of `base`.
fn syntax_check(value: &str, base: Base) -> Result<(), UsageError> {
    match base {
        Base::Dec => {
            if value
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'e' | 'E'))
            {
                Ok(())
            } else {
                Err(UsageError::IllegalDigit("decimal"))
            }
        },
        Base::Hex => {
            if value.chars().all(|c| c.is_ascii_hexdigit()) {
                Ok(())
            } else {
                Err(UsageError::IllegalDigit("hex"))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_detect_decimal_on_point() {
        let options = parse_args(args(&["1.5"])).unwrap();
        assert_eq!(options.base, Base::Dec);
        assert_eq!(options.width, Width::Both);
        assert_eq!(options.value, "1.5");
    }

    #[test]
    fn test_auto_detect_hex_without_point() {
        let options = parse_args(args(&["3f800000"])).unwrap();
        assert_eq!(options.base, Base::Hex);
    }

    #[test]
    fn test_unknown_flag_exits_one() {
        let err = parse_args(args(&["-bogus", "1"])).unwrap_err();
        assert_eq!(err, UsageError::UnknownFlag("-bogus".to_string()));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_negative_value_reads_as_flag() {
        let err = parse_args(args(&["-1.5"])).unwrap_err();
        assert_eq!(err, UsageError::UnknownFlag("-1.5".to_string()));
    }

    #[test]
    fn test_missing_value_exits_two() {
        let err = parse_args(args(&[])).unwrap_err();
        assert_eq!(err, UsageError::MissingValue);
        assert_eq!(err.exit_code(), 2);

        let err = parse_args(args(&["-hex", "-single"])).unwrap_err();
        assert_eq!(err, UsageError::MissingValue);
    }

    #[test]
    fn test_conflicting_base_exits_three() {
        let err = parse_args(args(&["-hex", "-dec", "1"])).unwrap_err();
        assert_eq!(err, UsageError::ConflictingBase);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_illegal_hex_digit_exits_four() {
        let err = parse_args(args(&["-hex", "12xz"])).unwrap_err();
        assert_eq!(err, UsageError::IllegalDigit("hex"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_illegal_decimal_digit_exits_four() {
        let err = parse_args(args(&["-dec", "1.5f"])).unwrap_err();
        assert_eq!(err, UsageError::IllegalDigit("decimal"));
    }

    #[test]
    fn test_scientific_decimal_allowed() {
        let options = parse_args(args(&["-dec", "1.5e3"])).unwrap();
        assert_eq!(options.base, Base::Dec);
    }

    #[test]
    fn test_width_flags() {
        assert_eq!(parse_args(args(&["-single", "1.5"])).unwrap().width, Width::Single);
        assert_eq!(parse_args(args(&["-double", "1.5"])).unwrap().width, Width::Double);
        assert_eq!(
            parse_args(args(&["-single", "-double", "1.5"])).unwrap().width,
            Width::Both
        );
    }

    #[test]
    fn test_arguments_after_value_ignored() {
        let options = parse_args(args(&["1.5", "-bogus", "zz"])).unwrap();
        assert_eq!(options.value, "1.5");
    }

    #[test]
    fn test_debug_flag() {
        assert!(parse_args(args(&["-debug", "1.5"])).unwrap().debug);
        assert!(!parse_args(args(&["1.5"])).unwrap().debug);
    }
}

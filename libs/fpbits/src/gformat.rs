//! Significant-digit float formatting.
//!
//! The report prints values the way C's `%.*g` does; Rust's formatter has no
//! direct equivalent, so this rebuilds the C99 rules: fixed notation when
//! the decimal exponent is in [-4, precision), scientific otherwise,
//! trailing zeros stripped, exponent printed sign-always with at least two
//! digits.

/// Format `value` with `precision` significant decimal digits, `%.*g` style.
pub fn significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return if value.is_sign_negative() {
            "-nan".into()
        } else {
            "nan".into()
        };
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf".into() } else { "inf".into() };
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0".into()
        } else {
            "0".into()
        };
    }

    // Round to the requested digits first; the exponent of the rounded value
    // decides the notation (9.99e-5 rounded up must print as 1e-04).
    let rounded = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = rounded.split_once('e') else {
        return rounded;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent >= -4 && exponent < precision as i32 {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_fraction(format!("{:.*}", decimals, value))
    } else {
        let mantissa = strip_fraction(mantissa.to_string());
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Remove trailing fractional zeros, and the point itself if nothing is left.
fn strip_fraction(mut formatted: String) -> String {
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    formatted
}

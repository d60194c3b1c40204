//! dumpfloat - print out a breakdown of floating point numbers.
//!
//! A value with a decimal point is parsed as a decimal number; anything else
//! is read as a raw hex bit pattern. `-hex`/`-dec` force the interpretation,
//! `-single`/`-double` select the views, `-debug` adds the per-bit mantissa
//! breakdown and the host numeric-limits constants.

mod cli;

use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Base, DumpOptions, UsageError, USAGE};
use fpbits::{
    double_report, limits_report, parse_hex_digits, single_report, RawBits32, RawBits64,
    ReportConfig,
};

fn main() {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => fail(&err),
    };

    init_logging(options.debug);
    debug!(?options, "parsed command line");

    if let Err(err) = run(&options) {
        fail(&err);
    }
}

fn run(options: &DumpOptions) -> Result<(), UsageError> {
    let (bits32, bits64) = match options.base {
        Base::Hex => {
            parse_hex_digits(&options.value).map_err(|_| UsageError::IllegalDigit("hex"))?
        },
        Base::Dec => {
            // The host's conversion does the decimal-to-binary work; the
            // single view narrows the parsed double.
            let value: f64 = options
                .value
                .parse()
                .map_err(|_| UsageError::IllegalDigit("decimal"))?;
            (RawBits32::from_value(value), RawBits64::from_value(value))
        },
    };

    let config = ReportConfig {
        verbose: options.debug,
    };

    if options.width.includes_single() {
        print!("{}", single_report(bits32, &config));
    }
    if options.width.includes_double() {
        print!("{}", double_report(bits64, &config));
    }

    if options.debug {
        print!(
            "{}",
            limits_report(
                options.width.includes_single(),
                options.width.includes_double()
            )
        );
    }

    Ok(())
}

/// Report a usage error the way the original tool does and exit.
fn fail(err: &UsageError) -> ! {
    eprintln!("dumpfloat: {err}");
    eprintln!("{USAGE}");
    process::exit(err.exit_code());
}

/// Diagnostics go to stderr through tracing; stdout carries only the report.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

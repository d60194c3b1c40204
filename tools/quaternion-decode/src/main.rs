//! quaternion_decode - decode a 4-value quaternion into Euler angles.

use std::process;

use tracing_subscriber::EnvFilter;

use attitude::{EulerAngles, Quaternion};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        eprintln!("usage: quaternion_decode <q0> <q1> <q2> <q3>");
        process::exit(1);
    }

    init_logging();

    let quaternion = Quaternion::from(parse_terms(&args));
    let angles = EulerAngles::from(&quaternion);
    let degrees = angles.to_degrees();

    println!(
        "Decode of quaternion: ({:.6}, {:.6}, {:.6}, {:.6})",
        quaternion.w, quaternion.x, quaternion.y, quaternion.z
    );
    println!(
        "Pitch angle: {:.6} radians = {:.6} degrees",
        angles.pitch, degrees.pitch
    );
    println!(
        "Roll angle: {:.6} radians = {:.6} degrees",
        angles.roll, degrees.roll
    );
    println!(
        "Heading angle: {:.6} radians = {:.6} degrees",
        angles.heading, degrees.heading
    );
}

/// atof semantics: unparseable terms read as 0.0.
fn parse_terms(args: &[String]) -> [f64; 4] {
    let mut terms = [0.0; 4];
    for (term, arg) in terms.iter_mut().zip(args) {
        *term = arg.parse().unwrap_or(0.0);
    }
    terms
}

/// Diagnostics go to stderr through tracing; stdout carries only the decode.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

//! Command-line interface for superfluous
//! Adds superfluous comments to a C source file.
//!
//! Usage:
//!   superfluous [INFILE] [OUTFILE]
//!
//! `-` or a missing argument stands for standard input / standard output.

use std::process::ExitCode;

use clap::{Arg, Command};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use superfluous::driver::{self, Input, Output, STDIO_ARG};

fn main() -> ExitCode {
    let matches = Command::new("superfluous")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A utility to add superfluous comments to C code")
        .arg(
            Arg::new("infile")
                .help("C source file to annotate ('-' for standard input)")
                .default_value(STDIO_ARG)
                .index(1),
        )
        .arg(
            Arg::new("outfile")
                .help("Where to write the annotated source ('-' for standard output)")
                .default_value(STDIO_ARG)
                .index(2),
        )
        .get_matches();

    init_logging();

    let input = matches
        .get_one::<String>("infile")
        .map_or(Input::Stdin, |arg| Input::from_arg(arg));
    let output = matches
        .get_one::<String>("outfile")
        .map_or(Output::Stdout, |arg| Output::from_arg(arg));

    match driver::run(&input, &output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; stdout may carry the annotated source
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("superfluous=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

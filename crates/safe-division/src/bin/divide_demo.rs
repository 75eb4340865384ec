//! Divides ten by zero and prints the outcome.
//!
//! The inputs are fixed; see `safe_division::demo` for the rendering.

use std::io::{self, Write};
use std::process::ExitCode;

use safe_division::demo::{self, DEMO_DIVIDEND, DEMO_DIVISOR};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match demo::run(&mut io::stdout().lock(), DEMO_DIVIDEND, DEMO_DIVISOR) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

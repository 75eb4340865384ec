//! Emits TypeScript interface declarations for the profile records.
//!
//! This binary delegates to `profile_models::typegen_cli` for settings and
//! output handling, keeping the behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use profile_models::typegen_cli::{TypegenError, load_settings, run, success_message};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match generate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "typegen failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn generate() -> Result<(), TypegenError> {
    let settings = load_settings(env::args_os())?;
    let outcome = run(&settings, &mut io::stdout().lock())?;
    if let Some(message) = success_message(&outcome) {
        if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
            drop(err);
        }
    }
    Ok(())
}

//! Error types for the typegen flow.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced while loading settings or emitting declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypegenError {
    /// Settings could not be assembled from flags, environment, or files.
    #[error("failed to load typegen settings: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// The output path is not valid UTF-8.
    #[error("output path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The rejected path.
        path: PathBuf,
    },
    /// The existing output could not be read for `--check`.
    #[error("failed to read '{path}': {message}")]
    ReadError {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The declarations could not be written.
    #[error("failed to write '{path}': {message}")]
    WriteError {
        /// Path that was being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// `--check` found the output out of date.
    #[error("'{path}' is out of date; rerun model-typegen without --check")]
    Stale {
        /// Path of the stale file.
        path: Utf8PathBuf,
    },
    /// `--check` was requested without an output file to compare.
    #[error("--check requires --output (or MODEL_TYPEGEN_OUTPUT) naming the file to verify")]
    CheckWithoutOutput,
    /// Writing to standard output failed.
    #[error("failed to write declarations to stdout: {message}")]
    Stdout {
        /// Description of the I/O error.
        message: String,
    },
}

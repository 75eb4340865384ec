//! Settings and orchestration for the `model-typegen` binary.
//!
//! The binary delegates to these functions so the flow can be exercised in
//! tests without spawning a subprocess. Settings come from `ortho_config`:
//! `--output`/`--check` flags, `MODEL_TYPEGEN_*` environment variables, and
//! configuration files.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::{debug, info};

use crate::atomic_io::write_atomic;
use crate::typescript::render_module;

mod error;

pub use error::TypegenError;

/// Settings controlling where generated declarations go.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MODEL_TYPEGEN")]
pub struct TypegenSettings {
    /// Destination file. Declarations are written to stdout when absent.
    pub output: Option<PathBuf>,
    /// Verify the destination is current instead of rewriting it.
    #[ortho_config(default = false)]
    pub check: bool,
}

/// What [`run`] did with the rendered module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The module was written to the supplied writer.
    Printed,
    /// The destination file was replaced.
    Written {
        /// Destination that was written.
        path: Utf8PathBuf,
    },
    /// The destination already matched the rendered module.
    UpToDate {
        /// Destination that was checked.
        path: Utf8PathBuf,
    },
}

/// Loads settings from an argument list plus the environment.
///
/// The first item is treated as the program name.
///
/// # Errors
///
/// Returns [`TypegenError::Config`] when flags, environment values, or
/// configuration files cannot be parsed.
pub fn load_settings<I>(args: I) -> Result<TypegenSettings, TypegenError>
where
    I: IntoIterator<Item = OsString>,
{
    TypegenSettings::load_from_iter(args).map_err(|err| TypegenError::Config {
        message: err.to_string(),
    })
}

/// Renders the TypeScript module and delivers it according to `settings`.
///
/// Without an output path the module goes to `stdout`. With one, the file is
/// replaced atomically, or compared against the rendered module when
/// `check` is set.
///
/// # Errors
///
/// Returns [`TypegenError::CheckWithoutOutput`] when `check` is set without
/// an output path, and other [`TypegenError`] variants when the output path
/// is not UTF-8, the file cannot be read or written, or `check` finds it
/// stale.
///
/// # Example
///
/// ```
/// use profile_models::typegen_cli::{Outcome, TypegenSettings, run};
///
/// let settings = TypegenSettings { output: None, check: false };
/// let mut stdout = Vec::new();
///
/// let outcome = run(&settings, &mut stdout).expect("render to buffer");
///
/// assert_eq!(outcome, Outcome::Printed);
/// assert!(String::from_utf8(stdout).expect("utf-8").contains("export interface User"));
/// ```
pub fn run<W: Write>(settings: &TypegenSettings, stdout: &mut W) -> Result<Outcome, TypegenError> {
    if settings.check && settings.output.is_none() {
        return Err(TypegenError::CheckWithoutOutput);
    }

    let rendered = render_module();
    let Some(output) = settings.output.as_deref() else {
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|err| TypegenError::Stdout {
                message: err.to_string(),
            })?;
        debug!(bytes = rendered.len(), "typescript declarations printed");
        return Ok(Outcome::Printed);
    };

    let path = utf8_path(output)?;
    if settings.check {
        check_current(&path, &rendered)?;
        info!(path = %path, "typescript declarations up to date");
        return Ok(Outcome::UpToDate { path });
    }

    let (dir, file_name) = open_parent(&path).map_err(|err| TypegenError::WriteError {
        path: path.clone(),
        message: err.to_string(),
    })?;
    write_atomic(&dir, file_name, &path, &rendered)?;
    info!(path = %path, "typescript declarations written");
    Ok(Outcome::Written { path })
}

/// Formats the message printed after a file-based run.
///
/// Returns `None` for [`Outcome::Printed`], where stdout already carries the
/// declarations.
#[must_use]
pub fn success_message(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Printed => None,
        Outcome::Written { path } => Some(format!("Wrote TypeScript declarations to {path}")),
        Outcome::UpToDate { path } => Some(format!("{path} is up to date")),
    }
}

fn utf8_path(path: &Path) -> Result<Utf8PathBuf, TypegenError> {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .map_err(|rejected| TypegenError::NonUtf8Path { path: rejected })
}

fn check_current(path: &Utf8Path, rendered: &str) -> Result<(), TypegenError> {
    let read_error = |err: std::io::Error| TypegenError::ReadError {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let (dir, file_name) = open_parent(path).map_err(read_error)?;
    let current = dir.read_to_string(file_name).map_err(read_error)?;
    if current != rendered {
        return Err(TypegenError::Stale {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn open_parent(path: &Utf8Path) -> std::io::Result<(Dir, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path must name a file",
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

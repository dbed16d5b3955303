use crate::manifest::RouteFormat;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure raised while scaffolding a controller or its route entries.
///
/// Every failure aborts the whole generation request immediately; nothing is
/// retried and artifacts already written for earlier actions stay on disk.
#[derive(Debug)]
pub enum GenerateError {
    /// The controller source file is already present; generation never
    /// merges into or overwrites an existing controller.
    AlreadyExists {
        /// The conflicting controller path
        path: PathBuf,
    },
    /// A route format other than `yml` or `annotation` was requested.
    UnsupportedFormat {
        /// The rejected format token
        format: RouteFormat,
    },
    /// An action name does not end in the `Action` suffix, or is nothing
    /// but the suffix, so no basename can be derived from it.
    InvalidActionName {
        /// The offending action name
        name: String,
    },
    /// A directory on the output path could not be created.
    DirectoryCreate {
        /// The directory that failed to materialize
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// An existing route file could not be read back for appending.
    Read {
        /// The unreadable file
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// A route file or rendered source file could not be written.
    Write {
        /// The target file
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// The template engine failed to render a controller or test stub.
    Render {
        /// Underlying template failure
        source: askama::Error,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::AlreadyExists { path } => {
                write!(f, "controller file {} already exists", path.display())
            }
            GenerateError::UnsupportedFormat { format } => {
                write!(
                    f,
                    "route format `{format}` is not implemented; only `yml` route files \
                    and in-source `annotation` routes are supported"
                )
            }
            GenerateError::InvalidActionName { name } => {
                write!(
                    f,
                    "action name `{name}` must end in the `Action` suffix with a non-empty basename"
                )
            }
            GenerateError::DirectoryCreate { path, source } => {
                write!(
                    f,
                    "could not create directory {}: {source}",
                    path.display()
                )
            }
            GenerateError::Read { path, source } => {
                write!(f, "could not read route file {}: {source}", path.display())
            }
            GenerateError::Write { path, source } => {
                write!(f, "could not write file {}: {source}", path.display())
            }
            GenerateError::Render { source } => {
                write!(f, "template rendering failed: {source}")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::DirectoryCreate { source, .. }
            | GenerateError::Read { source, .. }
            | GenerateError::Write { source, .. } => Some(source),
            GenerateError::Render { source } => Some(source),
            _ => None,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// condprint error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Printer configuration not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error (config file or file target)
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A named printer from a config file failed to build
    #[error("printer `{name}`: {source}")]
    Printer {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Path of the file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Config { path, .. } => path.as_deref(),
            Error::Io { path, .. } => Some(path),
            Error::Printer { source, .. } => source.path(),
        }
    }

    /// Attach `path` to config errors that do not name a file yet.
    pub(crate) fn or_path(self, path: &std::path::Path) -> Self {
        match self {
            Error::Config {
                message,
                path: None,
            } => Error::Config {
                message,
                path: Some(path.to_path_buf()),
            },
            Error::Printer { name, source } => Error::Printer {
                name,
                source: Box::new(source.or_path(path)),
            },
            other => other,
        }
    }
}

/// Result type using condprint Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

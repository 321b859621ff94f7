//! Error types for the converter.

use std::path::PathBuf;

use protoconv_description::errors::DescriptionError;
use thiserror::Error;

/// Errors raised while planning or writing a plugin.
///
/// A failing write aborts the run; files written before the failure stay on
/// disk.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Settings are incomplete or malformed.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A planned file exists and overwriting is disabled.
    #[error("file \"{}\" already exists", path.display())]
    FileExists { path: PathBuf },

    /// An input file named by the settings is missing.
    #[error("file \"{}\" does not exist", path.display())]
    MissingResource { path: PathBuf },

    /// The source dump could not be read.
    #[error("cannot load source {}: {message}", path.display())]
    Source { path: PathBuf, message: String },

    #[error(transparent)]
    Description(#[from] DescriptionError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be read or written.
    #[error("settings error: {0}")]
    Settings(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors reported while loading meshes and shader sources
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open '{path}': {source}")]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is empty")]
    EmptyInput { path: PathBuf },

    #[error("could not allocate {requested} bytes")]
    AllocationFailure { requested: usize },

    #[error("'{path}' is {len} bytes, more than the {max} byte limit")]
    TruncatedInput { path: PathBuf, len: u64, max: usize },

    #[error("malformed geometry on line {line}: {reason}")]
    MalformedGeometry { line: usize, reason: String },
}

impl LoadError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        LoadError::MalformedGeometry {
            line,
            reason: reason.into(),
        }
    }
}

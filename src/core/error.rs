//! Errors returned by document session operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a session operation
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the file failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Save-as target does not end in a markdown extension
    #[error("{} is not a markdown file (expected .md or .markdown)", .path.display())]
    InvalidExtension { path: PathBuf },

    /// `save` was called before the buffer had a backing file
    #[error("Document has no backing file; use save as first")]
    NoBackingFile,
}

impl SessionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error should be presented as a plain notice rather than a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::InvalidExtension { .. })
    }
}

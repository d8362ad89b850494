//! Everything that can go wrong in a pipeline.
//!
//! Combinators can't fail. Only the I/O engine and the front end produce
//! errors, and a failing pipeline surfaces exactly one of them: the first.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A failure raised by folio itself, like a bad write destination.
    #[error("{0}")]
    Message(String),

    /// A filesystem failure, tagged with the path that caused it.
    #[error("{}: {}", path.display(), source)]
    Platform {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    pub fn platform(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Platform {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The path involved, if this came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Message(_) => None,
            Self::Platform { path, .. } => Some(path),
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        let kind = match &e {
            Error::Message(_) => std::io::ErrorKind::Other,
            Error::Platform { source, .. } => source.kind(),
        };
        Self::new(kind, e)
    }
}

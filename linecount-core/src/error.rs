//! Error types for linecount core.

use std::path::{Path, PathBuf};
use std::{error::Error, fmt, io};

/// Error type for linecount core operations.
#[derive(Debug)]
pub enum LineCountError {
    /// A file could not be found or read when it was counted.
    NotFound(PathBuf),
    /// A caller supplied a malformed argument.
    InvalidArgument(String),
    /// An underlying I/O error.
    Io(io::Error),
}

impl LineCountError {
    /// Classify an error raised while reading `path`.
    ///
    /// Missing and permission-denied files become [`LineCountError::NotFound`];
    /// everything else stays an I/O error.
    pub fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                Self::NotFound(path.to_path_buf())
            }
            _ => Self::Io(err),
        }
    }
}

impl fmt::Display for LineCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl Error for LineCountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LineCountError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Convenience result type for linecount core.
pub type Result<T> = std::result::Result<T, LineCountError>;

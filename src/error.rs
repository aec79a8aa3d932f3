use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the FontFix utilities
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Font parsing or rebuilding errors
    Font(String),
    /// Invalid font file path
    InvalidPath(PathBuf),
    /// Command-line usage errors
    Usage(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Font(msg) => write!(f, "Font error: {}", msg),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Usage(msg) => write!(f, "Usage error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for FontFix operations
pub type Result<T> = std::result::Result<T, Error>;

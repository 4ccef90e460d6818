use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for rustoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for rustoc operations
#[derive(Debug)]
pub enum RustocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Document processing error
    Document(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for RustocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustocError::Io(err) => write!(f, "IO error: {}", err),
            RustocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RustocError::Document(msg) => write!(f, "Document error: {}", msg),
            RustocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RustocError {}

impl From<io::Error> for RustocError {
    fn from(err: io::Error) -> Self {
        RustocError::Io(err)
    }
}

impl From<String> for RustocError {
    fn from(msg: String) -> Self {
        RustocError::Generic(msg)
    }
}

impl From<&str> for RustocError {
    fn from(msg: &str) -> Self {
        RustocError::Generic(msg.to_string())
    }
}

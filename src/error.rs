use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for fontprop operations
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Font file path does not resolve to an existing file
    NotFound(PathBuf),
    /// A .ttc file failed to parse as a valid collection
    CollectionParse(String),
    /// A single font failed to parse as a valid font
    FontParse(String),
    /// File extension is not one of ttc, ttf, otf
    UnsupportedContainer(String),
    /// Scan completed with zero matches for the requested name field
    PropertyNotFound(&'static str),
    /// A record's platform ID is outside the modeled set
    UnsupportedPlatform(u16),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::NotFound(path) => write!(f, "Font file not found: {}", path.display()),
            Error::CollectionParse(msg) => write!(f, "Font collection parse error: {}", msg),
            Error::FontParse(msg) => write!(f, "Font parse error: {}", msg),
            Error::UnsupportedContainer(ext) => {
                write!(f, "Unsupported font file format: .{}", ext)
            }
            Error::PropertyNotFound(name) => write!(f, "Property '{}' not found", name),
            Error::UnsupportedPlatform(id) => {
                write!(f, "Unsupported platform included, platform ID: {}", id)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Whether this condition is reported at warning level rather than
    /// error level. Warnings never indicate a failed extraction.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedContainer(_)
                | Error::PropertyNotFound(_)
                | Error::UnsupportedPlatform(_)
        )
    }
}

/// Result type alias for fontprop operations
pub type Result<T> = std::result::Result<T, Error>;

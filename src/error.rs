//! Vocabulary error types.

use std::fmt;

/// Errors for vocabulary lookups.
///
/// Holders and their accessors never fail; errors only arise when turning
/// free-form input into a vocabulary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not a recognized HTTP method name.
    UnknownMethod(String),

    /// The integer is not a status code in the registry.
    UnknownStatus(u16),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownMethod(name) => write!(f, "unknown HTTP method: {}", name),
            Error::UnknownStatus(code) => write!(f, "unknown HTTP status code: {}", code),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Persistence errors
//!
//! Failures the file store can report. Callers in the state service treat
//! every variant as "no data", but the distinction is kept so logs and tests
//! can tell a corrupt file from an unreadable one.

use std::fmt;
use std::fmt::Display;

#[derive(Debug)]
pub enum StoreError {
    /// The backing file could not be read, written or renamed
    Io(std::io::Error),

    /// The backing file exists but does not decode into a complete record
    ///
    /// Occurs when:
    /// - the content is not valid JSON
    /// - a required field is missing or has the wrong type
    Corrupt(serde_json::Error),

    /// The record could not be encoded before writing
    Encode(serde_json::Error),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Corrupt(e) | StoreError::Encode(e) => Some(e),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(fmt, "storage io failed: {}", e),
            StoreError::Corrupt(e) => write!(fmt, "stored record is corrupt: {}", e),
            StoreError::Encode(e) => write!(fmt, "record encoding failed: {}", e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

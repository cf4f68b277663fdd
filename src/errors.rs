//! Typed error definitions for mediadir.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaDirError {
    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Prefix to strip must not be empty")]
    EmptyPrefix,

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl MediaDirError {
    /// Stable numeric code, emitted as a structured field in logs.
    pub fn code(&self) -> u16 {
        match self {
            MediaDirError::DirectoryNotFound(_) => 10,
            MediaDirError::NotADirectory(_) => 11,
            MediaDirError::InvalidConfig(_) => 20,
            MediaDirError::EmptyPrefix => 21,
            MediaDirError::Interrupted => 130,
        }
    }
}

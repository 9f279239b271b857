//! Preference storage error types.

use thiserror::Error;

/// Storage error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to read record `{key}`: {message}")]
    ReadFailed { key: String, message: String },

    #[error("failed to write record `{key}`: {message}")]
    WriteFailed { key: String, message: String },

    #[error("malformed record `{key}`: {message}")]
    Malformed { key: String, message: String },

    #[error("storage location unavailable: {message}")]
    Unavailable { message: String },
}

impl StorageError {
    /// Creates read failed error.
    #[must_use]
    pub fn read_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates write failed error.
    #[must_use]
    pub fn write_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates malformed record error.
    #[must_use]
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

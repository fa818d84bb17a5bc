//! The public error type.
//!
//! Internally, helpers return `anyhow::Result` with plenty of context. At module boundaries those
//! errors are tagged with an `ErrorType` using `pub_result` so that callers can react to the kind
//! of failure (for example, the store distinguishes an unreadable deals file from one with the
//! wrong shape).

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

/// The broad category of an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A value entered by the operator was rejected.
    Validation,
    /// The deals file could not be read, or it is not valid JSON.
    StorageRead,
    /// The deals file could not be written.
    StorageWrite,
    /// The deals file is valid JSON but it is not a list of deals.
    StorageSchema,
    /// A position did not refer to a stored deal.
    NotFound,
    /// The configuration file could not be loaded.
    Config,
    /// Reading from or writing to the console failed.
    Console,
    Internal,
}

serde_plain::derive_display_from_serialize!(ErrorType);
serde_plain::derive_fromstr_from_deserialize!(ErrorType);

/// An error with an `ErrorType` attached.
pub struct Error {
    kind: ErrorType,
    source: anyhow::Error,
}

impl Error {
    pub fn new(kind: ErrorType, source: impl Into<anyhow::Error>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    /// Creates an error of `kind` from a plain message.
    pub fn msg(kind: ErrorType, message: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::new(kind, anyhow::Error::msg(message))
    }

    pub fn kind(&self) -> ErrorType {
        self.kind
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {:?}", self.kind, self.source)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Self::new(ErrorType::Internal, value)
    }
}

/// Converts any result into a `crate::Result` tagged with an `ErrorType`.
pub(crate) trait IntoResult<T> {
    fn pub_result(self, kind: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn pub_result(self, kind: ErrorType) -> Result<T> {
        self.map_err(|e| Error::new(kind, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_pub_result_keeps_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk on fire"));
        let err = result
            .context("Unable to write deals.json")
            .pub_result(ErrorType::StorageWrite)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorType::StorageWrite);
        assert_eq!(err.to_string(), "Unable to write deals.json: disk on fire");
    }

    #[test]
    fn test_error_type_display() {
        assert_eq!(ErrorType::StorageSchema.to_string(), "storage_schema");
        assert_eq!(
            "not_found".parse::<ErrorType>().unwrap(),
            ErrorType::NotFound
        );
    }
}

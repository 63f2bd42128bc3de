use std::error::Error;
use std::fmt;

use thiserror::Error;

use crate::failure::{BoxedFailure, Failure};

/// Uniform failure surfaced when a backing service could not serve a call.
///
/// The interesting information usually lives in [`cause`](Self::cause); the
/// message is often empty.
#[derive(Debug)]
pub struct ServiceUnavailable {
    message: String,
    cause: Option<BoxedFailure>,
}

impl ServiceUnavailable {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Wrap `cause` with an empty message.
    pub fn caused_by(cause: BoxedFailure) -> Self {
        Self::with_cause("", cause)
    }

    pub fn with_cause(message: impl Into<String>, cause: BoxedFailure) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Failure + 'static)> {
        self.cause.as_deref()
    }

    pub fn into_cause(self) -> Option<BoxedFailure> {
        self.cause
    }
}

impl fmt::Display for ServiceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("service unavailable")
        } else {
            write!(f, "service unavailable: {}", self.message)
        }
    }
}

impl Error for ServiceUnavailable {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause.as_error() as &(dyn Error + 'static))
    }
}

/// Generic persistence failure raised by storage-backed services.
#[derive(Debug, Default, Error)]
#[error("{message}")]
pub struct PersistenceError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Wrap `source`, reusing its display text as the message.
    pub fn from_source(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

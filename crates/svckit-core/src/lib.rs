//! # svckit-core
//!
//! Shared vocabulary for the svckit crates: the workspace error type, the
//! failure-kind machinery used by call interception, and the concrete failure
//! kinds services surface to their callers.

pub mod error;
pub mod failure;
pub mod kinds;

pub use error::{Result, ServiceError};
pub use failure::{BoxedFailure, Failure, FailureKind};
pub use kinds::{PersistenceError, ServiceUnavailable};

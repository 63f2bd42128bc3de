//! # svckit-aop
//!
//! Call interception for service implementations. Wrapping a call in a
//! [`ServiceUnavailableWrapper`] narrows its failure surface to either a small
//! set of excepted failure kinds or a uniform [`ServiceUnavailable`].
//!
//! [`ServiceUnavailable`]: svckit_core::ServiceUnavailable

pub mod wrapper;

pub use wrapper::ServiceUnavailableWrapper;

use std::collections::HashSet;

use svckit_core::{BoxedFailure, Failure, FailureKind, ServiceUnavailable};

/// Intercepts every failure of a wrapped call and rethrows it as a
/// [`ServiceUnavailable`] carrying the original as its cause, except for the
/// excepted failure kinds which are returned untouched.
///
/// Matching is by exact type. Excepting a type does not except the types
/// that wrap it. Panics are never intercepted.
#[derive(Debug, Clone, Default)]
pub struct ServiceUnavailableWrapper {
    excepted: HashSet<FailureKind>,
}

impl ServiceUnavailableWrapper {
    /// Every failure will be wrapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps every failure except the given kinds. Duplicates collapse.
    pub fn excepting(kinds: impl IntoIterator<Item = FailureKind>) -> Self {
        Self {
            excepted: kinds.into_iter().collect(),
        }
    }

    /// Wraps every failure except `E`.
    pub fn excepting_kind<E: Failure>() -> Self {
        Self::excepting([FailureKind::of::<E>()])
    }

    pub fn is_excepted(&self, kind: &FailureKind) -> bool {
        self.excepted.contains(kind)
    }

    pub fn excepted(&self) -> impl Iterator<Item = &FailureKind> {
        self.excepted.iter()
    }

    /// Run `operation` once and translate its failure, if any.
    pub fn invoke<T, F>(&self, operation: F) -> Result<T, BoxedFailure>
    where
        F: FnOnce() -> Result<T, BoxedFailure>,
    {
        operation().map_err(|failure| self.translate(failure))
    }

    /// Pass an excepted failure through unchanged, wrap anything else.
    pub fn translate(&self, failure: BoxedFailure) -> BoxedFailure {
        if self.is_excepted(&failure.as_ref().kind()) {
            failure
        } else {
            ServiceUnavailable::caused_by(failure).boxed()
        }
    }
}

use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A failure raised by an intercepted operation.
pub type BoxedFailure = Box<dyn Failure>;

/// Identity of a concrete failure type.
///
/// Two kinds are equal only when they name the exact same type. A type that
/// wraps another (the closest Rust gets to a subtype) has a kind of its own.
#[derive(Clone, Copy)]
pub struct FailureKind {
    id: TypeId,
    name: &'static str,
}

impl FailureKind {
    pub fn of<E: Failure>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    /// Fully qualified type name, for diagnostics only.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for FailureKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FailureKind {}

impl Hash for FailureKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FailureKind").field(&self.name).finish()
    }
}

/// Object-safe view over any error that can cross an interception boundary.
///
/// Implemented for every `Error + Send + Sync + 'static` type; `kind()` is
/// dispatched to the concrete type behind a `dyn Failure`.
pub trait Failure: Error + Send + Sync + 'static {
    fn kind(&self) -> FailureKind;

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static);

    fn as_any(&self) -> &(dyn Any + Send + Sync);

    fn boxed(self) -> BoxedFailure
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl<E> Failure for E
where
    E: Error + Send + Sync + 'static,
{
    fn kind(&self) -> FailureKind {
        FailureKind::of::<E>()
    }

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }
}

impl dyn Failure {
    /// True when the concrete type behind this failure is exactly `T`.
    pub fn is<T: Failure>(&self) -> bool {
        self.kind() == FailureKind::of::<T>()
    }

    pub fn downcast_ref<T: Failure>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

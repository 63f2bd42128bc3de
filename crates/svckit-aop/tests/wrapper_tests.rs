#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use svckit_aop::ServiceUnavailableWrapper;
    use svckit_core::{BoxedFailure, Failure, FailureKind, PersistenceError, ServiceUnavailable};
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("illegal argument: {0}")]
    struct IllegalArgument(String);

    #[derive(Debug, Error)]
    #[error("generic failure: {0}")]
    struct GenericFailure(String);

    /// Refines `IllegalArgument` the way a subclass would.
    #[derive(Debug, Error)]
    #[error(transparent)]
    struct InvalidRange(#[from] IllegalArgument);

    fn failing<E: Failure>(err: E) -> impl FnOnce() -> Result<(), BoxedFailure> {
        move || Err(err.boxed())
    }

    fn addr(failure: &dyn Failure) -> *const () {
        std::ptr::from_ref(failure).cast::<()>()
    }

    // ── Default (wrap everything) ──────────────────────────────

    #[test]
    fn test_failure_is_wrapped() {
        let wrapper = ServiceUnavailableWrapper::new();
        let err = wrapper
            .invoke(failing(GenericFailure("Test Exception".into())))
            .unwrap_err();
        assert!(err.is::<ServiceUnavailable>());
    }

    #[test]
    fn test_no_failure_returns_result() {
        let wrapper = ServiceUnavailableWrapper::new();
        let value = vec![1, 2, 3];
        let result = wrapper.invoke(|| Ok(value.clone())).unwrap();
        assert_eq!(result, value);
    }

    #[test]
    fn test_wrapped_cause_is_original_instance() {
        let wrapper = ServiceUnavailableWrapper::new();
        let original = GenericFailure("boom".into()).boxed();
        let original_addr = addr(original.as_ref());

        let err = wrapper.invoke::<(), _>(move || Err(original)).unwrap_err();
        let unavailable = err.downcast_ref::<ServiceUnavailable>().unwrap();

        assert_eq!(unavailable.message(), "");
        let cause = unavailable.cause().unwrap();
        assert!(std::ptr::addr_eq(addr(cause), original_addr));
        assert_eq!(cause.downcast_ref::<GenericFailure>().unwrap().0, "boom");
    }

    #[test]
    fn test_wrapped_failure_exposes_cause_as_source() {
        let wrapper = ServiceUnavailableWrapper::new();
        let err = wrapper
            .invoke(failing(PersistenceError::new("disk full")))
            .unwrap_err();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "disk full");
        assert!(source.is::<PersistenceError>());
    }

    #[test]
    fn test_empty_wrapper_wraps_every_kind() {
        let wrapper = ServiceUnavailableWrapper::new();
        assert_eq!(wrapper.excepted().count(), 0);

        let failures: Vec<BoxedFailure> = vec![
            IllegalArgument("a".into()).boxed(),
            GenericFailure("b".into()).boxed(),
            PersistenceError::new("c").boxed(),
            std::io::Error::other("d").boxed(),
        ];
        for failure in failures {
            let err = wrapper.invoke::<(), _>(move || Err(failure)).unwrap_err();
            assert!(err.is::<ServiceUnavailable>());
        }
    }

    #[test]
    fn test_service_unavailable_is_wrapped_again() {
        let wrapper = ServiceUnavailableWrapper::new();
        let err = wrapper
            .invoke(failing(ServiceUnavailable::new("upstream")))
            .unwrap_err();
        let outer = err.downcast_ref::<ServiceUnavailable>().unwrap();
        let inner = outer.cause().unwrap();
        assert_eq!(inner.downcast_ref::<ServiceUnavailable>().unwrap().message(), "upstream");
    }

    // ── Excepted kinds ─────────────────────────────────────────

    #[test]
    fn test_excepted_failure_passes_through() {
        let wrapper = ServiceUnavailableWrapper::excepting_kind::<IllegalArgument>();
        let original = IllegalArgument("Foo".into()).boxed();
        let original_addr = addr(original.as_ref());

        let err = wrapper.invoke::<(), _>(move || Err(original)).unwrap_err();
        assert!(err.is::<IllegalArgument>());
        assert!(std::ptr::addr_eq(addr(err.as_ref()), original_addr));
        assert_eq!(err.to_string(), "illegal argument: Foo");
    }

    #[test]
    fn test_non_excepted_failure_still_wrapped() {
        let wrapper = ServiceUnavailableWrapper::excepting_kind::<IllegalArgument>();
        let err = wrapper
            .invoke(failing(GenericFailure("Foo".into())))
            .unwrap_err();
        assert!(err.is::<ServiceUnavailable>());
    }

    #[test]
    fn test_subtype_of_excepted_kind_is_wrapped() {
        let wrapper = ServiceUnavailableWrapper::excepting_kind::<IllegalArgument>();
        let err = wrapper
            .invoke(failing(InvalidRange(IllegalArgument("out of range".into()))))
            .unwrap_err();
        assert!(err.is::<ServiceUnavailable>());
        let cause = err
            .downcast_ref::<ServiceUnavailable>()
            .unwrap()
            .cause()
            .unwrap();
        assert!(cause.is::<InvalidRange>());
    }

    #[test]
    fn test_subtype_passes_when_listed_itself() {
        let wrapper = ServiceUnavailableWrapper::excepting([FailureKind::of::<InvalidRange>()]);
        let err = wrapper
            .invoke(failing(InvalidRange(IllegalArgument("x".into()))))
            .unwrap_err();
        assert!(err.is::<InvalidRange>());

        let err = wrapper
            .invoke(failing(IllegalArgument("y".into())))
            .unwrap_err();
        assert!(err.is::<ServiceUnavailable>());
    }

    #[test]
    fn test_excepting_many_kinds() {
        let wrapper = ServiceUnavailableWrapper::excepting([
            FailureKind::of::<IllegalArgument>(),
            FailureKind::of::<PersistenceError>(),
        ]);
        assert!(wrapper
            .invoke(failing(IllegalArgument("a".into())))
            .unwrap_err()
            .is::<IllegalArgument>());
        assert!(wrapper
            .invoke(failing(PersistenceError::new("b")))
            .unwrap_err()
            .is::<PersistenceError>());
        assert!(wrapper
            .invoke(failing(GenericFailure("c".into())))
            .unwrap_err()
            .is::<ServiceUnavailable>());
    }

    #[test]
    fn test_duplicate_kinds_collapse() {
        let wrapper = ServiceUnavailableWrapper::excepting([
            FailureKind::of::<IllegalArgument>(),
            FailureKind::of::<IllegalArgument>(),
        ]);
        assert_eq!(wrapper.excepted().count(), 1);
        assert!(wrapper.is_excepted(&FailureKind::of::<IllegalArgument>()));
    }

    // ── Invocation contract ────────────────────────────────────

    #[test]
    fn test_operation_invoked_exactly_once() {
        let wrapper = ServiceUnavailableWrapper::new();
        let mut calls = 0;
        let _ = wrapper.invoke::<(), _>(|| {
            calls += 1;
            Err(GenericFailure("once".into()).boxed())
        });
        assert_eq!(calls, 1);
    }

    #[test]
    #[should_panic(expected = "unrecoverable")]
    fn test_panics_are_not_intercepted() {
        let wrapper = ServiceUnavailableWrapper::new();
        let _ = wrapper.invoke::<(), _>(|| panic!("unrecoverable"));
    }

    #[test]
    fn test_shared_across_threads() {
        let wrapper = Arc::new(ServiceUnavailableWrapper::excepting_kind::<IllegalArgument>());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let wrapper = Arc::clone(&wrapper);
                std::thread::spawn(move || {
                    let result = if i % 2 == 0 {
                        wrapper.invoke(failing(IllegalArgument(i.to_string())))
                    } else {
                        wrapper.invoke(failing(GenericFailure(i.to_string())))
                    };
                    let err = result.unwrap_err();
                    (i, err.is::<IllegalArgument>())
                })
            })
            .collect();

        for handle in handles {
            let (i, passed_through) = handle.join().unwrap();
            assert_eq!(passed_through, i % 2 == 0);
        }
    }
}

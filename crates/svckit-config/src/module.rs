use svckit_core::{Result, ServiceError};
use tracing::debug;

use crate::binder::Binder;
use crate::properties::{Properties, filter_properties};

/// The slice of a shared configuration table owned by one service module.
///
/// All properties have to be prefixed with a shared portion, for example
/// `checklistbank.db.` as in `checklistbank.db.JDBC.driver`. The scoped table
/// holds those keys with the prefix removed; the verbatim table is kept for
/// modules that need to compose with other prefixes.
#[derive(Debug, Clone)]
pub struct ServiceScope {
    prefix: String,
    properties: Properties,
    verbatim: Properties,
}

impl ServiceScope {
    pub fn new(prefix: impl Into<String>, verbatim: Properties) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(ServiceError::InvalidArgument(
                "service module requires a non-blank property prefix".into(),
            ));
        }
        let properties = filter_properties(&verbatim, &prefix)?;
        Ok(Self {
            prefix,
            properties,
            verbatim,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Properties under the prefix, with the prefix stripped.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The table the scope was built from, before any filtering.
    pub fn verbatim_properties(&self) -> &Properties {
        &self.verbatim
    }
}

/// Module-specific wiring run after the scoped properties are bound.
pub trait ConfigureService {
    fn configure_service(&self, scope: &ServiceScope, binder: &mut dyn Binder) -> Result<()>;
}

/// A private service module configured from a prefixed slice of properties.
///
/// [`configure`](Self::configure) binds every scoped property as a named
/// string and then runs the module's [`ConfigureService`] hook. Custom
/// bindings belong in the hook.
#[derive(Debug)]
pub struct PrivateServiceModule<S> {
    scope: ServiceScope,
    service: S,
}

impl<S: ConfigureService> PrivateServiceModule<S> {
    pub fn new(prefix: impl Into<String>, verbatim: Properties, service: S) -> Result<Self> {
        Ok(Self {
            scope: ServiceScope::new(prefix, verbatim)?,
            service,
        })
    }

    pub fn configure(&self, binder: &mut dyn Binder) -> Result<()> {
        debug!(
            prefix = %self.scope.prefix(),
            keys = self.scope.properties().len(),
            "binding scoped service properties"
        );
        binder.bind_properties(self.scope.properties())?;
        self.service.configure_service(&self.scope, binder)
    }

    pub fn scope(&self) -> &ServiceScope {
        &self.scope
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

use std::collections::HashMap;

use svckit_core::{Result, ServiceError};

use crate::properties::Properties;

/// Sink for named string constants, provided by the component-wiring runtime.
pub trait Binder {
    fn bind_constant(&mut self, name: &str, value: &str) -> Result<()>;

    /// Bind every entry of `properties` once, under its own key.
    fn bind_properties(&mut self, properties: &Properties) -> Result<()> {
        for (name, value) in properties.iter() {
            self.bind_constant(name, value)?;
        }
        Ok(())
    }
}

/// In-memory [`Binder`] for a single private scope.
///
/// Binding the same name twice is an error.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    constants: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.constants.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl Binder for Bindings {
    fn bind_constant(&mut self, name: &str, value: &str) -> Result<()> {
        if self.constants.contains_key(name) {
            return Err(ServiceError::DuplicateBinding(name.to_string()));
        }
        self.constants.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

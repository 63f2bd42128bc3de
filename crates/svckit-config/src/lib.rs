//! # svckit-config
//!
//! Prefix-scoped configuration for independently packaged service modules.
//! A shared flat [`Properties`] table is sliced per module by prefix; each
//! [`PrivateServiceModule`] binds only its own unprefixed keys and then hands
//! over to its [`ConfigureService`] extension.
//!
//! Flat tables can be loaded from TOML files with environment overrides via
//! [`PropertiesLoader`].

pub mod binder;
pub mod loader;
pub mod module;
pub mod properties;

pub use binder::{Binder, Bindings};
pub use loader::PropertiesLoader;
pub use module::{ConfigureService, PrivateServiceModule, ServiceScope};
pub use properties::{Properties, filter_properties};

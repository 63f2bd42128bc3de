use std::ffi::OsString;
use std::path::{Path, PathBuf};

use svckit_core::{Result, ServiceError};
use toml::{Table, Value};
use tracing::{debug, info, warn};

use crate::properties::Properties;

/// Names the properties file when no explicit path is given.
pub const PROPERTIES_PATH_ENV: &str = "SVCKIT_PROPERTIES";

/// Environment variables with this prefix override single properties:
/// `SVCKIT_PROP__CHECKLISTBANK__DB__URL` sets `checklistbank.db.url`.
pub const OVERRIDE_PREFIX: &str = "SVCKIT_PROP__";

/// Loads the shared flat properties table that service modules are scoped from.
pub struct PropertiesLoader;

impl PropertiesLoader {
    /// Resolve the properties path: explicit path > SVCKIT_PROPERTIES env > <config dir>/svckit/service.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var(PROPERTIES_PATH_ENV) {
            return PathBuf::from(p);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("svckit")
            .join("service.toml")
    }

    /// Load the properties from disk, falling back to an empty table, then
    /// apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Properties> {
        let properties = Self::read(path)?;
        Ok(Self::apply_os_overrides(properties, std::env::vars_os()))
    }

    /// Read and flatten the properties file without environment overrides.
    /// A missing file yields an empty table.
    pub fn read(path: Option<&Path>) -> Result<Properties> {
        let path = Self::resolve_path(path);
        if !path.exists() {
            warn!(?path, "properties file not found, starting from an empty table");
            return Ok(Properties::new());
        }

        info!(?path, "loading properties");
        let raw = std::fs::read_to_string(&path)?;
        Self::parse(&raw).map_err(|e| match e {
            ServiceError::Config(reason) => ServiceError::Config(format!(
                "failed to parse {}: {}",
                path.display(),
                reason
            )),
            other => other,
        })
    }

    /// Flatten a TOML document into dotted keys.
    ///
    /// Strings are taken verbatim, other scalars use their TOML rendering and
    /// arrays of scalars are joined with `,`.
    pub fn parse(raw: &str) -> Result<Properties> {
        let table = toml::from_str::<Table>(raw).map_err(|e| ServiceError::Config(e.to_string()))?;
        let mut properties = Properties::new();
        flatten("", &table, &mut properties)?;
        Ok(properties)
    }

    /// Apply `SVCKIT_PROP__*` overrides from name/value pairs.
    pub fn apply_overrides<I, K, V>(mut properties: Properties, vars: I) -> Properties
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in vars {
            let Some(rest) = name.as_ref().strip_prefix(OVERRIDE_PREFIX) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            let key = rest.to_lowercase().replace("__", ".");
            debug!(%key, "applying environment override");
            properties.set(key, value);
        }
        properties
    }

    /// Like [`apply_overrides`](Self::apply_overrides) for `std::env::vars_os()`.
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn apply_os_overrides<I>(properties: Properties, vars: I) -> Properties
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = vars
            .into_iter()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
        Self::apply_overrides(properties, vars)
    }
}

fn flatten(prefix: &str, table: &Table, out: &mut Properties) -> Result<()> {
    for (key, value) in table {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(inner) => flatten(&name, inner, out)?,
            Value::Array(items) => {
                let rendered = items
                    .iter()
                    .map(render_scalar)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| {
                        ServiceError::Config(format!(
                            "{name}: only arrays of plain values can be flattened"
                        ))
                    })?;
                out.set(name, rendered.join(","));
            }
            scalar => {
                if let Some(rendered) = render_scalar(scalar) {
                    out.set(name, rendered);
                }
            }
        }
    }
    Ok(())
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Table(_) => None,
        other => Some(other.to_string()),
    }
}

//! Declarative cycle definitions
//!
//! A named cycle can be described in configuration instead of code:
//!
//! ```yaml
//! keys: [NOT_STARTED, IN_PROGRESS, COMPLETE]
//! options:
//!   can_cycle: false
//! ```
//!
//! Keys are kept as untyped values until [`CycleDefinition::build()`], which
//! rejects non-string keys with `CycleError::InvalidKeyType`.
//!
//! # Example
//!
//! ```
//! use selekta::config::CycleDefinition;
//!
//! let definition = CycleDefinition::from_yaml_str("keys: [light, dark]").unwrap();
//! let theme = definition.build().unwrap();
//! assert_eq!(theme.value(), "light");
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::domain::cycle::NamedCycle;
use crate::domain::foundation::CycleOptions;

/// Keys and options for one named cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleDefinition {
    /// Ordered keys, validated as unique strings by `build()`
    pub keys: Vec<Value>,

    /// Construction options
    #[serde(default)]
    pub options: CycleOptions,
}

impl CycleDefinition {
    /// Parse a definition from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a definition from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a definition from a file
    ///
    /// The format (YAML, JSON, TOML, ...) is picked from the file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if the file is missing, unreadable,
    /// or does not match the definition shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading cycle definition");

        let definition = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;

        Ok(definition)
    }

    /// Build the cycle this definition describes
    pub fn build(&self) -> Result<NamedCycle, ConfigError> {
        Ok(NamedCycle::from_values(&self.keys, self.options.clone())?)
    }
}

//! Security configuration: which module factories to install and which
//! context factories to try, in declared order.
//!
//! The configuration is immutable once built. The orchestrator reads it;
//! factories receive it unmodified, including the opaque [`settings`]
//! entries they were configured with.
//!
//! [`settings`]: SecurityConfiguration::settings

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SecurityError;

/// Supported configuration input formats.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// YAML format (`.yaml` / `.yml`).
    Yaml,
    /// JSON format (`.json`).
    Json,
}

/// Declarative security provisioning configuration.
///
/// Holds an ordered list of module-factory identifiers (all are installed,
/// in order), an ordered list of context-factory identifiers (candidates
/// tried in order, first success wins), and an opaque settings map passed
/// through to every factory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfiguration {
    #[serde(default)]
    module_factories: Vec<String>,
    #[serde(default)]
    context_factories: Vec<String>,
    #[serde(default)]
    settings: HashMap<String, Value>,
}

impl SecurityConfiguration {
    /// Starts building a configuration.
    pub fn builder() -> SecurityConfigurationBuilder {
        SecurityConfigurationBuilder::default()
    }

    /// Module-factory identifiers, in install order. Duplicates are allowed.
    pub fn module_factories(&self) -> &[String] {
        &self.module_factories
    }

    /// Context-factory identifiers, in priority order.
    pub fn context_factories(&self) -> &[String] {
        &self.context_factories
    }

    /// All opaque settings.
    pub fn settings(&self) -> &HashMap<String, Value> {
        &self.settings
    }

    /// Looks up a single opaque setting.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    fn validate(self) -> Result<Self, SecurityError> {
        for id in self.module_factories.iter().chain(&self.context_factories) {
            if id.trim().is_empty() {
                return Err(SecurityError::InvalidConfig(
                    "factory identifiers must not be blank".into(),
                ));
            }
        }
        Ok(self)
    }
}

/// Parse configuration text into a [`SecurityConfiguration`].
pub fn parse_config(
    content: &str,
    format: ConfigFormat,
) -> Result<SecurityConfiguration, SecurityError> {
    let config: SecurityConfiguration = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| SecurityError::InvalidConfig(e.to_string()))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| SecurityError::InvalidConfig(e.to_string()))?,
    };
    config.validate()
}

/// Builder for [`SecurityConfiguration`].
#[derive(Debug, Default)]
pub struct SecurityConfigurationBuilder {
    module_factories: Vec<String>,
    context_factories: Vec<String>,
    settings: HashMap<String, Value>,
}

impl SecurityConfigurationBuilder {
    /// Appends a module-factory identifier. Order is significant.
    pub fn module_factory(mut self, id: impl Into<String>) -> Self {
        self.module_factories.push(id.into());
        self
    }

    /// Appends a context-factory identifier. Order is priority.
    pub fn context_factory(mut self, id: impl Into<String>) -> Self {
        self.context_factories.push(id.into());
        self
    }

    /// Adds an opaque setting passed through to every factory.
    pub fn setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Finalizes the configuration, rejecting blank factory identifiers.
    pub fn build(self) -> Result<SecurityConfiguration, SecurityError> {
        SecurityConfiguration {
            module_factories: self.module_factories,
            context_factories: self.context_factories,
            settings: self.settings,
        }
        .validate()
    }
}

//! Client configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use socialize_api::ApiConfig;
use std::collections::BTreeMap;
use std::path::Path;

/// Property name for [`SocializeConfig::notifications_enabled`].
pub const NOTIFICATIONS_ENABLED: &str = "SOCIALIZE_NOTIFICATIONS_ENABLED";
/// Property name for [`SocializeConfig::entity_loader_check_enabled`].
pub const ENTITY_LOADER_CHECK_ENABLED: &str = "SOCIALIZE_ENTITY_LOADER_CHECK_ENABLED";

/// Configuration for a [`crate::Socialize`] client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocializeConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub api: ApiConfig,
    /// Push notifications may be used at all.
    pub notifications_enabled: bool,
    /// Notifications also require the host to have set an entity loader.
    pub entity_loader_check_enabled: bool,
    /// Free-form host properties, read through [`SocializeConfig::flag`].
    /// Must not contain the names of the settings above.
    pub properties: BTreeMap<String, String>,
}

impl Default for SocializeConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            api: ApiConfig::default(),
            notifications_enabled: true,
            entity_loader_check_enabled: true,
            properties: BTreeMap::new(),
        }
    }
}

impl SocializeConfig {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            ..Default::default()
        }
    }

    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The named settings live in their own fields. A `properties` entry
    /// under one of those names would never be read, so it is refused.
    pub fn validate(&self) -> Result<()> {
        for name in [NOTIFICATIONS_ENABLED, ENTITY_LOADER_CHECK_ENABLED] {
            if self.properties.contains_key(name) {
                return Err(Error::Config(format!(
                    "{name} is a config field, not a property"
                )));
            }
        }
        Ok(())
    }

    /// Boolean property lookup. The named settings map to their fields;
    /// anything else is read from `properties`, falling back to `default`
    /// when absent or not a boolean.
    pub fn flag(&self, name: &str, default: bool) -> bool {
        match name {
            NOTIFICATIONS_ENABLED => self.notifications_enabled,
            ENTITY_LOADER_CHECK_ENABLED => self.entity_loader_check_enabled,
            _ => self
                .properties
                .get(name)
                .and_then(|v| v.trim().to_ascii_lowercase().parse::<bool>().ok())
                .unwrap_or(default),
        }
    }
}

//! Configuration loaded from `~/.config/embedurl/config.toml`.
//!
//! Only one setting exists today, the Google Maps Embed API key. Values are
//! layered: file, then the `GOOGLE_MAPS_API_KEY` environment variable, then
//! whatever the caller sets explicitly.
//!
//! ```toml
//! google_maps_api_key = "AIza..."
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Lookup key (and environment variable) for the Google Maps API key.
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

/// Synchronous key/value lookup for secrets and settings.
pub trait ConfigSource {
    /// Return the value stored under `key`, or `None` if unset or empty.
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).filter(|v| !v.is_empty()).cloned()
    }
}

/// Settings consumed by the embed providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmbedConfig {
    /// Key for the Google Maps Embed API. Without it Google Maps URLs are
    /// recognized but never embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_api_key: Option<String>,
}

impl EmbedConfig {
    /// Load from the default path, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Ok(Self::from_path(&config_path())?.with_env_overrides())
    }

    /// Load from `path`. A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or unexpected value types.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(GOOGLE_MAPS_API_KEY).filter(|k| !k.is_empty()) {
            self.google_maps_api_key = Some(key);
        }
        self
    }

    /// Set the Google Maps API key explicitly.
    #[must_use]
    pub fn with_google_maps_api_key(mut self, key: impl Into<String>) -> Self {
        self.google_maps_api_key = Some(key.into());
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.google_maps_api_key = self.google_maps_api_key.filter(|k| !k.is_empty());
        self
    }
}

impl ConfigSource for EmbedConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            GOOGLE_MAPS_API_KEY => self.google_maps_api_key.clone(),
            _ => None,
        }
    }
}

/// Return the path to the default config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("embedurl")
        .join("config.toml")
}

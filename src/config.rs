//! Harness settings: a static key-value file with environment overrides.
//!
//! Settings are loaded once into an explicitly constructed [`HarnessConfig`]
//! and passed to client constructors; there is no process-wide state. At
//! lookup time a non-empty environment variable named exactly like the key
//! takes precedence over the file store.

use crate::HarnessError;
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Key of the required base URL setting.
pub const BASE_URL_KEY: &str = "base.url";

/// Settings file path the binaries fall back to when `--settings` is absent.
pub const DEFAULT_SETTINGS_PATH: &str = "harness.yaml";

/// Immutable key-value settings resolved from a file at construction time.
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    settings: HashMap<String, String>,
}

impl HarnessConfig {
    /// Load the settings file. JSON (`.json`) and YAML (`.yaml`/`.yml`) are
    /// selected by extension; any other extension is tried as JSON first,
    /// then YAML. A read or parse failure is fatal for the harness.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| HarnessError::from_io_error(e, "settings loading"))?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        let settings = match extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(&content)
                .map_err(|e| HarnessError::from_parse_error(e, "JSON settings parsing"))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| HarnessError::from_parse_error(e, "YAML settings parsing"))?,
            _ => serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| {
                    HarnessError::from_parse_error(e, "settings parsing (tried both JSON and YAML)")
                })?,
        };

        Ok(Self { settings })
    }

    /// Build settings from in-memory pairs, bypassing the file store.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            settings: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve a setting. A non-empty environment variable named exactly
    /// `key` wins; otherwise the file store answers.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        self.settings.get(key).cloned()
    }

    /// The API base address. Required: a missing or empty value aborts the
    /// harness before any request is attempted.
    pub fn base_url(&self) -> Result<String, HarnessError> {
        match self.get(BASE_URL_KEY) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(HarnessError::SettingMissing {
                key: BASE_URL_KEY.to_string(),
            }),
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable settings source.
//!
//! Loader settings use dotted names (`test.environment.config.file`). Shells
//! cannot export those, so by default `TEST_ENVIRONMENT_CONFIG_FILE` is
//! lowercased and its underscores are turned into dots.

use crate::domain::Result;
use crate::ports::SettingsSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Settings source backed by environment variables.
///
/// The environment is read on every lookup, so changes made between two calls
/// are visible.
///
/// # Priority
///
/// Environment variables have a priority of 2: they are overridden by
/// command-line arguments (priority 3).
///
/// # Examples
///
/// ```rust
/// use pagecfg::adapters::EnvVarSettings;
/// use pagecfg::ports::SettingsSource;
///
/// // COMMON_YAML_CONFIG_FILE answers "common.yaml.config.file"
/// let source = EnvVarSettings::new();
///
/// // Only PAGECFG_* variables, prefix stripped
/// let source = EnvVarSettings::with_prefix("PAGECFG_");
/// assert_eq!(source.name(), "env");
/// ```
#[derive(Debug)]
pub struct EnvVarSettings {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Fixed values used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarSettings {
    /// Creates a source over the whole process environment.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: true,
            replace_underscores: true,
            values: None,
        }
    }

    /// Creates a source that only sees variables starting with `prefix`.
    ///
    /// The prefix is stripped before the key is transformed.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Sets whether to convert keys to lowercase (default `true`).
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots (default `true`).
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Creates a source with fixed, already-transformed values.
    ///
    /// Intended for tests that must not touch the process environment.
    ///
    /// ```rust
    /// use pagecfg::adapters::EnvVarSettings;
    /// use pagecfg::ports::SettingsSource;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("common.yaml.config.file".to_string(), "test-common".to_string());
    ///
    /// let source = EnvVarSettings::with_values(values);
    /// assert_eq!(
    ///     source.get("common.yaml.config.file").unwrap().as_deref(),
    ///     Some("test-common")
    /// );
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: false,
            values: Some(values),
        }
    }

    /// Maps a raw variable name to a setting name, or `None` if filtered out.
    fn transform_key(&self, key: &str) -> Option<String> {
        let key = match &self.prefix {
            Some(prefix) => key.strip_prefix(prefix.as_str())?,
            None => key,
        };

        let mut transformed = key.to_string();
        if self.lowercase_keys {
            transformed = transformed.to_lowercase();
        }
        if self.replace_underscores {
            transformed = transformed.replace('_', ".");
        }
        Some(transformed)
    }

    /// Reads the environment into a map of setting name to value.
    fn load(&self) -> HashMap<String, String> {
        if let Some(values) = &self.values {
            return values.clone();
        }

        let mut settings = HashMap::new();
        for (key, value) in env::vars() {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={}",
                    key.len(),
                    value.len()
                );
                continue;
            }
            if let Some(transformed) = self.transform_key(&key) {
                settings.insert(transformed, value);
            }
        }
        settings
    }
}

impl Default for EnvVarSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsSource for EnvVarSettings {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load().remove(key))
    }

    fn all_keys(&self) -> Result<Vec<String>> {
        Ok(self.load().into_keys().collect())
    }
}

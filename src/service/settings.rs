// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader settings: which two resources make up a configuration.

use crate::domain::ResourceId;
use crate::ports::SettingsSource;
use serde::{Deserialize, Serialize};

/// Setting name of the common file.
pub const COMMON_FILE_PROPERTY: &str = "common.yaml.config.file";
/// Setting name of the environment file.
pub const ENVIRONMENT_FILE_PROPERTY: &str = "test.environment.config.file";

/// Common file used when no setting names one.
pub const DEFAULT_COMMON_FILE: &str = "common";
/// Environment file used when no setting names one.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "localhost";

/// Names of the common and environment files, without extension.
///
/// Passed to the store at construction; there is no process-wide state.
///
/// # Examples
///
/// ```
/// use pagecfg::service::LoaderSettings;
///
/// let settings = LoaderSettings::default();
/// assert_eq!(settings.common_resource().as_str(), "/common.yaml");
/// assert_eq!(settings.environment_resource().as_str(), "/localhost.yaml");
///
/// let settings = LoaderSettings::default().with_environment_file("discworld");
/// assert_eq!(settings.environment_resource().as_str(), "/discworld.yaml");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Baseline file loaded for every environment.
    pub common_file: String,
    /// Overrides for the environment under test.
    pub environment_file: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            common_file: DEFAULT_COMMON_FILE.to_string(),
            environment_file: DEFAULT_ENVIRONMENT_FILE.to_string(),
        }
    }
}

impl LoaderSettings {
    /// Creates settings naming both files explicitly.
    pub fn new(common_file: impl Into<String>, environment_file: impl Into<String>) -> Self {
        Self {
            common_file: common_file.into(),
            environment_file: environment_file.into(),
        }
    }

    /// Replaces the common file name.
    pub fn with_common_file(mut self, name: impl Into<String>) -> Self {
        self.common_file = name.into();
        self
    }

    /// Replaces the environment file name.
    pub fn with_environment_file(mut self, name: impl Into<String>) -> Self {
        self.environment_file = name.into();
        self
    }

    /// Resolves settings from `sources`, falling back to the defaults.
    ///
    /// See [`LoaderSettings::overridden_by`].
    pub fn from_sources(sources: &[&dyn SettingsSource]) -> Self {
        Self::default().overridden_by(sources)
    }

    /// Resolves settings from the process environment only.
    ///
    /// `COMMON_YAML_CONFIG_FILE` and `TEST_ENVIRONMENT_CONFIG_FILE` are read.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        let env = crate::adapters::EnvVarSettings::new();
        Self::from_sources(&[&env])
    }

    /// Replaces each setting that one of `sources` knows.
    ///
    /// The source with the highest priority wins. Empty values count as unset.
    /// A source that fails to answer is logged and skipped.
    pub fn overridden_by(mut self, sources: &[&dyn SettingsSource]) -> Self {
        let mut ordered: Vec<&dyn SettingsSource> = sources.to_vec();
        ordered.sort_by_key(|s| std::cmp::Reverse(s.priority()));

        if let Some(value) = lookup(&ordered, COMMON_FILE_PROPERTY) {
            self.common_file = value;
        }
        if let Some(value) = lookup(&ordered, ENVIRONMENT_FILE_PROPERTY) {
            self.environment_file = value;
        }
        self
    }

    /// Resource id of the common file, e.g. `/common.yaml`.
    pub fn common_resource(&self) -> ResourceId {
        ResourceId::for_file_name(&self.common_file)
    }

    /// Resource id of the environment file, e.g. `/localhost.yaml`.
    pub fn environment_resource(&self) -> ResourceId {
        ResourceId::for_file_name(&self.environment_file)
    }
}

fn lookup(sources: &[&dyn SettingsSource], key: &str) -> Option<String> {
    for source in sources {
        match source.get(key) {
            Ok(Some(value)) if !value.is_empty() => {
                tracing::debug!("Setting '{}' = '{}' from source '{}'", key, value, source.name());
                return Some(value);
            }
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!(
                    "Error querying source '{}' for setting '{}': {}",
                    source.name(),
                    key,
                    e
                );
                continue;
            }
        }
    }
    None
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! String-keyed configuration mapping with defaulting accessors.
//!
//! `ConfigDocument` is both the root of a loaded file and every nested mapping
//! inside it. The three primitive accessors (`mapping`, `string`, `sequence`)
//! never fail: a missing key or a value of the wrong shape yields an empty
//! value of the requested type and a debug log line.

use crate::domain::config_value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

static EMPTY_DOCUMENT: ConfigDocument = ConfigDocument(BTreeMap::new());

/// A mapping from string keys to [`ConfigValue`]s.
///
/// # Examples
///
/// ```
/// use pagecfg::domain::{ConfigDocument, ConfigValue};
///
/// let mut client = ConfigDocument::new();
/// client.insert("base_url", "localhost:8700");
///
/// let mut root = ConfigDocument::new();
/// root.insert("webpage_client", client);
///
/// assert_eq!(root.mapping("webpage_client").string("base_url"), "localhost:8700");
/// assert_eq!(root.string("webpage_client"), "");
/// assert!(root.mapping("missing").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(BTreeMap<String, ConfigValue>);

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        ConfigDocument(BTreeMap::new())
    }

    /// Returns a reference to a shared empty document.
    pub fn empty() -> &'static ConfigDocument {
        &EMPTY_DOCUMENT
    }

    /// Returns the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns `true` if the document has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over the top-level entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }

    /// Overlays `other` onto this document, one level deep.
    ///
    /// Every top-level key of `other` replaces the same key here. Nested
    /// mappings are replaced whole, never merged field by field.
    pub fn overlay(&mut self, other: ConfigDocument) {
        self.0.extend(other.0);
    }

    /// Reads a nested mapping, or the shared empty document.
    pub fn mapping(&self, key: &str) -> &ConfigDocument {
        match self.0.get(key) {
            Some(ConfigValue::Mapping(doc)) => doc,
            Some(other) => {
                log_mismatch(key, "mapping", other);
                ConfigDocument::empty()
            }
            None => {
                log_missing(key);
                ConfigDocument::empty()
            }
        }
    }

    /// Reads a string, or `""`.
    pub fn string(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(ConfigValue::String(s)) => s,
            Some(other) => {
                log_mismatch(key, "string", other);
                ""
            }
            None => {
                log_missing(key);
                ""
            }
        }
    }

    /// Reads a sequence, or an empty slice.
    pub fn sequence(&self, key: &str) -> &[ConfigValue] {
        match self.0.get(key) {
            Some(ConfigValue::Sequence(items)) => items,
            Some(other) => {
                log_mismatch(key, "sequence", other);
                &[]
            }
            None => {
                log_missing(key);
                &[]
            }
        }
    }

    /// Reads a sequence and keeps only its string elements.
    pub fn string_list(&self, key: &str) -> Vec<&str> {
        self.sequence(key)
            .iter()
            .filter_map(ConfigValue::as_str)
            .collect()
    }
}

fn log_missing(key: &str) {
    tracing::debug!("No value found for key '{}'", key);
}

fn log_mismatch(key: &str, wanted: &str, found: &ConfigValue) {
    tracing::debug!(
        "Couldn't convert to {} for key '{}', type was '{}'",
        wanted,
        key,
        found.type_name()
    );
}

/// Overlays `environment` onto `common` at the top level and returns the result.
///
/// # Examples
///
/// ```
/// use pagecfg::domain::{merge, ConfigDocument};
///
/// let mut common = ConfigDocument::new();
/// common.insert("messages", ConfigDocument::new());
/// common.insert("json_schema", "common");
///
/// let mut environment = ConfigDocument::new();
/// environment.insert("json_schema", "override");
///
/// let merged = merge(common, environment);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged.string("json_schema"), "override");
/// ```
pub fn merge(mut common: ConfigDocument, environment: ConfigDocument) -> ConfigDocument {
    common.overlay(environment);
    common
}

impl FromIterator<(String, ConfigValue)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        ConfigDocument(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConfigDocument {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ConfigDocument {
    type Item = (String, ConfigValue);
    type IntoIter = btree_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

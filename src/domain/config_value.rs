// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic configuration value tree.
//!
//! A loaded YAML document is turned into a tree of `ConfigValue`s. Every node is
//! one of four shapes, so accessors match on the variant instead of inspecting
//! types at runtime.

use crate::domain::config_document::ConfigDocument;
use serde::de::{self, EnumAccess, IgnoredAny, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single node of a configuration document.
///
/// Scalars are kept as text. A YAML reader that does not apply a schema sees
/// `port: 8700` as the string `"8700"`, and so does this type.
///
/// # Examples
///
/// ```
/// use pagecfg::domain::ConfigValue;
///
/// let value = ConfigValue::from("FIREFOX");
/// assert_eq!(value.as_str(), Some("FIREFOX"));
/// assert_eq!(value.type_name(), "string");
/// assert!(value.as_sequence().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit `null`, `~`, or a key with no value.
    Null,
    /// Any scalar, in its textual form.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<ConfigValue>),
    /// A nested mapping.
    Mapping(ConfigDocument),
}

impl ConfigValue {
    /// Returns the name of this value's shape, as used in log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    /// Returns the string content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence value.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested document if this is a mapping value.
    pub fn as_mapping(&self) -> Option<&ConfigDocument> {
        match self {
            ConfigValue::Mapping(doc) => Some(doc),
            _ => None,
        }
    }

    /// Returns `true` for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(items)
    }
}

impl From<ConfigDocument> for ConfigValue {
    fn from(doc: ConfigDocument) -> Self {
        ConfigValue::Mapping(doc)
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConfigValue::Null, Into::into)
    }
}

/// Booleans and numbers become their textual form and tags are dropped, so
/// any self-describing format can produce a tree. The text is whatever the
/// format hands over: `serde_yaml` reports `1.10` as the float `1.1`. Use
/// `YamlParser` to keep YAML scalars exactly as written.
impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

struct ConfigValueVisitor;

impl<'de> Visitor<'de> for ConfigValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a scalar, sequence or mapping")
    }

    fn visit_unit<E: de::Error>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<ConfigValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        ConfigValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ConfigValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<ConfigValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut doc = ConfigDocument::new();
        while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
            doc.insert(key, value);
        }
        Ok(ConfigValue::Mapping(doc))
    }

    fn visit_enum<A>(self, data: A) -> Result<ConfigValue, A::Error>
    where
        A: EnumAccess<'de>,
    {
        // a tagged node; keep the value, drop the tag
        let (_, variant) = data.variant::<IgnoredAny>()?;
        variant.newtype_variant()
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.
//!
//! Converts YAML text into a [`ConfigValue`] tree. Scalars are kept exactly as
//! written, so `1.10`, `007` and `True` stay `"1.10"`, `"007"` and `"True"`.
//! Tags are dropped and `<<` merge keys are applied.
//!
//! `serde_yaml` resolves plain scalars to booleans and numbers before a visitor
//! sees them, and only hands out the raw text to `deserialize_str`. Parsing
//! therefore runs twice over the same document: once into a
//! [`serde_yaml::Value`] to learn the shape of every node, and once guided by
//! that shape so each scalar is read through `deserialize_str`.

use crate::domain::{ConfigDocument, ConfigError, ConfigValue, Result};
use crate::ports::DocumentParser;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_yaml::Value;
use std::fmt;

/// Key whose mapping (or sequence of mappings) is merged into its parent.
const MERGE_KEY: &str = "<<";

/// YAML parser implementation.
///
/// Only the first document of a multi-document stream is read. Empty input
/// parses to [`ConfigValue::Null`].
///
/// # Examples
///
/// ```rust
/// use pagecfg::adapters::YamlParser;
/// use pagecfg::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let root = parser.parse("webpage_client:\n  base_url: localhost:8700\n  version: 1.10").unwrap();
/// let client = root.as_mapping().unwrap().mapping("webpage_client");
/// assert_eq!(client.string("base_url"), "localhost:8700");
/// assert_eq!(client.string("version"), "1.10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        if content.trim().is_empty() {
            return Ok(ConfigValue::Null);
        }

        let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
            return Ok(ConfigValue::Null);
        };
        let shape = Value::deserialize(document).map_err(parse_error)?;

        let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
            return Ok(ConfigValue::Null);
        };
        Shaped(&shape).deserialize(document).map_err(parse_error)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

fn parse_error(e: serde_yaml::Error) -> ConfigError {
    ConfigError::ParseError {
        resource: String::new(),
        message: format!("Failed to parse YAML: {}", e),
        source: Some(Box::new(e)),
    }
}

/// Reads one node whose shape is already known.
struct Shaped<'v>(&'v Value);

impl<'de, 'v> DeserializeSeed<'de> for Shaped<'v> {
    type Value = ConfigValue;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<ConfigValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.0 {
            Value::Null => {
                IgnoredAny::deserialize(deserializer)?;
                Ok(ConfigValue::Null)
            }
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                String::deserialize(deserializer).map(ConfigValue::String)
            }
            Value::Sequence(items) => deserializer.deserialize_seq(SequenceVisitor(items)),
            Value::Mapping(entries) => deserializer.deserialize_map(MappingVisitor(entries)),
            Value::Tagged(tagged) => Shaped(&tagged.value).deserialize(deserializer),
        }
    }
}

/// Reads a mapping key as written, or skips it if it is a container.
struct KeyText<'v>(&'v Value);

impl<'de, 'v> DeserializeSeed<'de> for KeyText<'v> {
    type Value = Option<String>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.0 {
            Value::Tagged(tagged) => KeyText(&tagged.value).deserialize(deserializer),
            Value::Sequence(_) | Value::Mapping(_) => {
                IgnoredAny::deserialize(deserializer)?;
                Ok(None)
            }
            _ => String::deserialize(deserializer).map(Some),
        }
    }
}

struct SequenceVisitor<'v>(&'v [Value]);

impl<'de, 'v> Visitor<'de> for SequenceVisitor<'v> {
    type Value = ConfigValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} items", self.0.len())
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<ConfigValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(self.0.len());
        for shape in self.0 {
            match seq.next_element_seed(Shaped(shape))? {
                Some(item) => items.push(item),
                None => return Err(de::Error::invalid_length(items.len(), &self)),
            }
        }
        Ok(ConfigValue::Sequence(items))
    }
}

struct MappingVisitor<'v>(&'v serde_yaml::Mapping);

impl<'de, 'v> Visitor<'de> for MappingVisitor<'v> {
    type Value = ConfigValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a mapping of {} entries", self.0.len())
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<ConfigValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut doc = ConfigDocument::new();
        let mut merged = Vec::new();
        for (read, (key, value)) in self.0.iter().enumerate() {
            let Some(text) = map.next_key_seed(KeyText(key))? else {
                return Err(de::Error::invalid_length(read, &self));
            };
            let value = map.next_value_seed(Shaped(value))?;
            match text {
                Some(text) if text == MERGE_KEY => merged.push(value),
                Some(text) => {
                    doc.insert(text, value);
                }
                None => {
                    tracing::debug!("Skipping mapping entry with non-scalar key");
                }
            }
        }
        for source in merged {
            merge_into(&mut doc, source);
        }
        Ok(ConfigValue::Mapping(doc))
    }
}

/// Adds the entries of a `<<` value that `doc` does not already define.
///
/// In a sequence of mappings, earlier mappings win over later ones.
fn merge_into(doc: &mut ConfigDocument, source: ConfigValue) {
    match source {
        ConfigValue::Mapping(entries) => {
            for (key, value) in entries {
                if !doc.contains_key(&key) {
                    doc.insert(key, value);
                }
            }
        }
        ConfigValue::Sequence(items) => {
            for item in items {
                merge_into(doc, item);
            }
        }
        other => {
            tracing::debug!(
                "Couldn't merge into mapping, '{}' value type was '{}'",
                MERGE_KEY,
                other.type_name()
            );
        }
    }
}

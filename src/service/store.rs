// SPDX-License-Identifier: MIT OR Apache-2.0

//! The layered configuration store.
//!
//! The store resolves the common and environment resources from its settings,
//! loads each one, overlays the environment document on the common document,
//! and serves the result through [`TestConfiguration`].

use crate::domain::{
    merge, ConfigDocument, ConfigError, ConfigValue, ResourceId, Result, TestConfiguration,
};
use crate::ports::{DocumentParser, ResourceLocator, ResourceStream, SettingsSource};
use crate::service::settings::LoaderSettings;
use std::io::Read;
use std::path::Path;

/// Loads and holds a merged test-suite configuration.
///
/// Accessors return empty values until [`load_configuration`] has succeeded.
///
/// [`load_configuration`]: LayeredConfigStore::load_configuration
///
/// # Examples
///
/// ```rust
/// use pagecfg::adapters::MemoryLocator;
/// use pagecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let locator = MemoryLocator::new()
///     .with_file("common", "webpage_client:\n  base_url: localhost:8700\n")
///     .with_file("discworld", "webpage_client:\n  base_url: ankhmorpork:8700\n");
///
/// let mut store = LayeredConfigStore::builder()
///     .with_environment_file("discworld")
///     .with_locator(Box::new(locator))
///     .build()?;
///
/// store.load_configuration()?;
/// assert_eq!(store.base_url(), "ankhmorpork:8700");
/// # Ok(())
/// # }
/// ```
pub struct LayeredConfigStore {
    settings: LoaderSettings,
    locator: Box<dyn ResourceLocator>,
    parser: Box<dyn DocumentParser>,
    merged: ConfigDocument,
}

impl LayeredConfigStore {
    /// Creates a store. Nothing is read until `load_configuration` is called.
    pub fn new(
        settings: LoaderSettings,
        locator: Box<dyn ResourceLocator>,
        parser: Box<dyn DocumentParser>,
    ) -> Self {
        tracing::debug!(
            "Creating store over '{}' with common='{}' environment='{}'",
            locator.name(),
            settings.common_file,
            settings.environment_file
        );
        Self {
            settings,
            locator,
            parser,
            merged: ConfigDocument::new(),
        }
    }

    /// Creates a new store builder.
    pub fn builder() -> LayeredConfigStoreBuilder {
        LayeredConfigStoreBuilder::new()
    }

    /// Creates a YAML store reading resources from a directory.
    #[cfg(feature = "yaml")]
    pub fn from_directory(root: impl AsRef<Path>, settings: LoaderSettings) -> Self {
        use crate::adapters::{DirectoryLocator, YamlParser};
        Self::new(
            settings,
            Box::new(DirectoryLocator::new(root)),
            Box::new(YamlParser::new()),
        )
    }

    /// Returns the settings this store was built with.
    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Returns the resource id of the common file.
    pub fn common_resource(&self) -> ResourceId {
        let resource = self.settings.common_resource();
        tracing::debug!("Common resource is '{}'", resource);
        resource
    }

    /// Returns the resource id of the environment file.
    pub fn environment_resource(&self) -> ResourceId {
        let resource = self.settings.environment_resource();
        tracing::debug!("Environment resource is '{}'", resource);
        resource
    }

    /// Opens a resource through the store's locator.
    ///
    /// A resource that does not exist yields `Ok(None)`.
    pub fn open_resource(&self, resource: &ResourceId) -> Result<Option<ResourceStream<'_>>> {
        self.locator.open(resource)
    }

    /// Loads and parses one resource.
    ///
    /// A missing resource, an empty resource, and a resource whose root is not
    /// a mapping all yield an empty document. Read failures and malformed
    /// content are returned as errors. The stream is closed before this returns.
    pub fn load_document(&self, resource: &ResourceId) -> Result<ConfigDocument> {
        let Some(stream) = self.open_resource(resource)? else {
            tracing::debug!("No resource found for '{}'", resource);
            return Ok(ConfigDocument::new());
        };

        let content = read_and_close(stream).map_err(|e| {
            tracing::debug!("Failed to read resource '{}': {}", resource, e);
            ConfigError::from(e)
        })?;

        let root = self
            .parser
            .parse(&content)
            .map_err(|e| e.for_resource(resource.as_str()))?;

        Ok(match root {
            ConfigValue::Mapping(doc) => doc,
            ConfigValue::Null => {
                tracing::debug!("Resource '{}' has no content", resource);
                ConfigDocument::new()
            }
            other => {
                tracing::debug!(
                    "Couldn't use resource '{}' as a mapping, type was '{}'",
                    resource,
                    other.type_name()
                );
                ConfigDocument::new()
            }
        })
    }

    /// Loads the common and environment resources and merges them.
    ///
    /// The environment document's top-level keys replace the common ones. On
    /// error the previously loaded configuration is kept.
    pub fn load_configuration(&mut self) -> Result<&ConfigDocument> {
        tracing::debug!("Loading configuration ...");
        let common = self.load_document(&self.common_resource())?;
        let environment = self.load_document(&self.environment_resource())?;
        self.merged = merge(common, environment);
        tracing::debug!("... loaded {} top-level keys", self.merged.len());
        Ok(&self.merged)
    }
}

impl TestConfiguration for LayeredConfigStore {
    fn document(&self) -> &ConfigDocument {
        &self.merged
    }
}

impl std::fmt::Debug for LayeredConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredConfigStore")
            .field("settings", &self.settings)
            .field("locator", &self.locator.name())
            .field("merged", &self.merged)
            .finish()
    }
}

/// Reads a stream to the end. The stream is dropped on every path.
fn read_and_close(mut stream: ResourceStream<'_>) -> std::io::Result<String> {
    let mut content = String::new();
    stream.read_to_string(&mut content)?;
    Ok(content)
}

/// Builder for constructing a `LayeredConfigStore`.
///
/// Settings are resolved in this order, later steps winning: defaults (or
/// [`with_settings`](Self::with_settings)), settings sources by priority,
/// then explicit `with_common_file` / `with_environment_file` calls.
///
/// # Examples
///
/// ```rust,no_run
/// use pagecfg::service::LayeredConfigStoreBuilder;
///
/// # fn main() -> pagecfg::domain::Result<()> {
/// let mut store = LayeredConfigStoreBuilder::new()
///     .with_resource_dir("tests/resources")
///     .with_env_vars()
///     .with_cli_args(std::env::args().skip(1).collect())
///     .build()?;
/// store.load_configuration()?;
/// # Ok(())
/// # }
/// ```
pub struct LayeredConfigStoreBuilder {
    settings: LoaderSettings,
    sources: Vec<Box<dyn SettingsSource>>,
    common_file: Option<String>,
    environment_file: Option<String>,
    locator: Option<Box<dyn ResourceLocator>>,
    parser: Option<Box<dyn DocumentParser>>,
}

impl LayeredConfigStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            settings: LoaderSettings::default(),
            sources: Vec::new(),
            common_file: None,
            environment_file: None,
            locator: None,
            parser: None,
        }
    }

    /// Replaces the base settings.
    pub fn with_settings(mut self, settings: LoaderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Names the common file, overriding any settings source.
    pub fn with_common_file(mut self, name: impl Into<String>) -> Self {
        self.common_file = Some(name.into());
        self
    }

    /// Names the environment file, overriding any settings source.
    pub fn with_environment_file(mut self, name: impl Into<String>) -> Self {
        self.environment_file = Some(name.into());
        self
    }

    /// Adds a settings source.
    pub fn with_settings_source(mut self, source: Box<dyn SettingsSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds the process environment as a settings source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarSettings;
        self.with_settings_source(Box::new(EnvVarSettings::new()))
    }

    /// Adds command-line arguments as a settings source.
    #[cfg(feature = "cli")]
    pub fn with_cli_args<S: AsRef<str>>(self, args: Vec<S>) -> Self {
        use crate::adapters::CommandLineSettings;
        self.with_settings_source(Box::new(CommandLineSettings::from_args(args)))
    }

    /// Sets the resource locator.
    pub fn with_locator(mut self, locator: Box<dyn ResourceLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Reads resources from a directory.
    pub fn with_resource_dir(self, root: impl AsRef<Path>) -> Self {
        use crate::adapters::DirectoryLocator;
        self.with_locator(Box::new(DirectoryLocator::new(root)))
    }

    /// Sets the document parser.
    pub fn with_parser(mut self, parser: Box<dyn DocumentParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Builds the store.
    ///
    /// Without a locator, resources are read from the current directory.
    /// Without a parser, YAML is used; if the `yaml` feature is disabled a
    /// parser must be supplied.
    pub fn build(self) -> Result<LayeredConfigStore> {
        let sources: Vec<&dyn SettingsSource> = self.sources.iter().map(|s| s.as_ref()).collect();
        let mut settings = self.settings.overridden_by(&sources);
        if let Some(name) = self.common_file {
            settings.common_file = name;
        }
        if let Some(name) = self.environment_file {
            settings.environment_file = name;
        }

        let locator = match self.locator {
            Some(locator) => locator,
            None => Box::new(crate::adapters::DirectoryLocator::new(".")),
        };

        let parser = match self.parser {
            Some(parser) => parser,
            None => default_parser()?,
        };

        Ok(LayeredConfigStore::new(settings, locator, parser))
    }
}

#[cfg(feature = "yaml")]
fn default_parser() -> Result<Box<dyn DocumentParser>> {
    Ok(Box::new(crate::adapters::YamlParser::new()))
}

#[cfg(not(feature = "yaml"))]
fn default_parser() -> Result<Box<dyn DocumentParser>> {
    Err(ConfigError::SourceError {
        source_name: "builder".to_string(),
        message: "No document parser configured and the yaml feature is disabled".to_string(),
        source: None,
    })
}

impl Default for LayeredConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use crate::adapters::{MemoryLocator, YamlParser};
    use std::io;

    const COMMON: &str = r#"
webpage_client:
  base_url: localhost:8700
  selenium:
    browser: CHROME
json_schema: schema.json
messages:
  greeting: hello
"#;

    const ENVIRONMENT: &str = r#"
webpage_client:
  base_url: ankhmorpork:8700
"#;

    fn store(locator: MemoryLocator, settings: LoaderSettings) -> LayeredConfigStore {
        LayeredConfigStore::new(settings, Box::new(locator), Box::new(YamlParser::new()))
    }

    // Locator whose only resource fails halfway through reading
    struct BrokenLocator;

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"))
        }
    }

    impl ResourceLocator for BrokenLocator {
        fn name(&self) -> &str {
            "broken"
        }

        fn open(&self, _resource: &ResourceId) -> Result<Option<ResourceStream<'_>>> {
            Ok(Some(Box::new(BrokenReader)))
        }
    }

    #[test]
    fn test_resources_from_default_settings() {
        let store = store(MemoryLocator::new(), LoaderSettings::default());
        assert_eq!(store.common_resource().as_str(), "/common.yaml");
        assert_eq!(store.environment_resource().as_str(), "/localhost.yaml");
    }

    #[test]
    fn test_open_missing_resource_is_none() {
        let store = store(MemoryLocator::new(), LoaderSettings::default());
        assert!(store
            .open_resource(&store.common_resource())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_load_document_missing_is_empty() {
        let store = store(MemoryLocator::new(), LoaderSettings::default());
        let doc = store.load_document(&ResourceId::new("/nope.yaml")).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_load_document_non_mapping_roots_are_empty() {
        let locator = MemoryLocator::new()
            .with_file("string", "just a string")
            .with_file("list", "- a\n- b\n")
            .with_file("blank", "");
        let store = store(locator, LoaderSettings::default());

        for name in ["string", "list", "blank"] {
            let doc = store.load_document(&ResourceId::for_file_name(name)).unwrap();
            assert!(doc.is_empty(), "expected empty document for {}", name);
        }
    }

    #[test]
    fn test_load_document_parse_error_names_resource() {
        let locator = MemoryLocator::new().with_file("common", "invalid: yaml: content:");
        let store = store(locator, LoaderSettings::default());
        let err = store.load_document(&store.common_resource()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("/common.yaml"));
    }

    #[test]
    fn test_read_failure_propagates() {
        let mut store = LayeredConfigStore::new(
            LoaderSettings::default(),
            Box::new(BrokenLocator),
            Box::new(YamlParser::new()),
        );
        let err = store.load_configuration().unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
        assert!(store.document().is_empty());
    }

    #[test]
    fn test_load_only_common() {
        let locator = MemoryLocator::new().with_file("common", COMMON);
        let mut store = store(locator, LoaderSettings::default());

        let merged = store.load_configuration().unwrap().clone();
        let common = store.load_document(&store.common_resource()).unwrap();
        assert_eq!(merged, common);
        assert_eq!(store.base_url(), "localhost:8700");
        assert_eq!(store.browser(), "CHROME");
    }

    #[test]
    fn test_environment_replaces_top_level_key() {
        let locator = MemoryLocator::new()
            .with_file("common", COMMON)
            .with_file("discworld", ENVIRONMENT);
        let mut store = store(locator, LoaderSettings::default().with_environment_file("discworld"));

        store.load_configuration().unwrap();
        assert_eq!(store.base_url(), "ankhmorpork:8700");
        // webpage_client was replaced whole, so selenium is gone
        assert!(store.selenium().is_empty());
        assert_eq!(store.browser(), "");
        // untouched keys survive
        assert_eq!(store.message("greeting"), "hello");
        assert_eq!(store.document().string("json_schema"), "schema.json");
    }

    #[test]
    fn test_failed_reload_keeps_previous_configuration() {
        let locator = MemoryLocator::new()
            .with_file("common", COMMON)
            .with_file("broken", "invalid: yaml: content:");
        let mut store = store(locator, LoaderSettings::default());
        store.load_configuration().unwrap();

        store.settings = LoaderSettings::default().with_environment_file("broken");
        assert!(store.load_configuration().is_err());
        assert_eq!(store.base_url(), "localhost:8700");
    }

    #[test]
    fn test_accessors_before_load_are_empty() {
        let store = store(MemoryLocator::new().with_file("common", COMMON), LoaderSettings::default());
        assert_eq!(store.base_url(), "");
        assert!(store.screens().is_empty());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_builder_explicit_names_beat_sources() {
        let store = LayeredConfigStore::builder()
            .with_cli_args(vec![
                "-Dcommon.yaml.config.file=from-cli",
                "-Dtest.environment.config.file=from-cli",
            ])
            .with_environment_file("explicit")
            .with_locator(Box::new(MemoryLocator::new()))
            .build()
            .unwrap();
        assert_eq!(store.settings().common_file, "from-cli");
        assert_eq!(store.settings().environment_file, "explicit");
    }

    #[test]
    fn test_builder_defaults() {
        let store = LayeredConfigStoreBuilder::default().build().unwrap();
        assert_eq!(store.settings(), &LoaderSettings::default());
        assert!(format!("{:?}", store).contains("directory"));
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory resource locator.
//!
//! Useful for tests and for suites that embed their configuration with
//! `include_str!`.

use crate::domain::{ResourceId, Result};
use crate::ports::{ResourceLocator, ResourceStream};
use std::collections::HashMap;
use std::io::Cursor;

/// Resource locator over a fixed set of named strings.
///
/// # Examples
///
/// ```rust
/// use pagecfg::adapters::MemoryLocator;
/// use pagecfg::domain::ResourceId;
/// use pagecfg::ports::ResourceLocator;
///
/// let locator = MemoryLocator::new()
///     .with_file("common", "webpage_client:\n  base_url: localhost:8700\n");
///
/// assert!(locator.exists(&ResourceId::new("/common.yaml")).unwrap());
/// assert!(!locator.exists(&ResourceId::new("/localhost.yaml")).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    resources: HashMap<ResourceId, String>,
}

impl MemoryLocator {
    /// Creates an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource under a full id such as `/common.yaml`.
    pub fn with_resource(mut self, resource: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(ResourceId::new(resource), content);
        self
    }

    /// Adds a configuration file by name, without extension.
    pub fn with_file(mut self, name: &str, content: impl Into<String>) -> Self {
        self.insert(ResourceId::for_file_name(name), content);
        self
    }

    /// Adds or replaces a resource.
    pub fn insert(&mut self, resource: ResourceId, content: impl Into<String>) {
        self.resources.insert(resource, content.into());
    }

    /// Returns the number of resources held.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if no resources are held.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceLocator for MemoryLocator {
    fn name(&self) -> &str {
        "memory"
    }

    fn open(&self, resource: &ResourceId) -> Result<Option<ResourceStream<'_>>> {
        Ok(self
            .resources
            .get(resource)
            .map(|content| Box::new(Cursor::new(content.as_bytes())) as ResourceStream<'_>))
    }
}

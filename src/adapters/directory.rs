// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem resource locator.
//!
//! A directory acts as the resource root: `/common.yaml` is looked up as
//! `<root>/common.yaml`.

use crate::domain::{ConfigError, ResourceId, Result};
use crate::ports::{ResourceLocator, ResourceStream};
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

/// Maximum allowed size of a resource file (10MB)
const MAX_RESOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Resource locator over a directory on disk.
///
/// Resource ids that would leave the root (`..` components) are treated as not
/// found.
///
/// # Examples
///
/// ```rust,no_run
/// use pagecfg::adapters::DirectoryLocator;
///
/// // Resources next to the test suite
/// let locator = DirectoryLocator::new("tests/resources");
///
/// // Resources in the OS config directory, e.g. ~/.config/pagecfg on Linux
/// let locator = DirectoryLocator::from_default_location("pagecfg", "org.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    root: PathBuf,
}

impl DirectoryLocator {
    /// Creates a locator rooted at `root`. The directory need not exist yet.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Creates a locator rooted at the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "checkout-tests")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "directory".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir()))
    }

    /// Returns the resource root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a resource id to a path under the root, or `None` if it escapes.
    fn resolve(&self, resource: &ResourceId) -> Option<PathBuf> {
        let relative = Path::new(resource.relative_path());
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            tracing::debug!("Resource '{}' is outside the resource root", resource);
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceLocator for DirectoryLocator {
    fn name(&self) -> &str {
        "directory"
    }

    fn open(&self, resource: &ResourceId) -> Result<Option<ResourceStream<'_>>> {
        let Some(path) = self.resolve(resource) else {
            return Ok(None);
        };

        let metadata = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => {
                tracing::debug!("Resource '{}' is not a file", resource);
                return Ok(None);
            }
            Err(e) => {
                tracing::debug!("Resource '{}' not found: {}", resource, e);
                return Ok(None);
            }
        };

        if metadata.len() > MAX_RESOURCE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "directory".to_string(),
                message: format!(
                    "Resource '{}' too large: {} bytes (max {} bytes)",
                    resource,
                    metadata.len(),
                    MAX_RESOURCE_SIZE
                ),
                source: None,
            });
        }

        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)))),
            Err(e) => {
                tracing::debug!("Couldn't open resource '{}': {}", resource, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn read_all(mut stream: ResourceStream<'_>) -> String {
        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_directory_open_existing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("common.yaml"), "key: value\n").unwrap();

        let locator = DirectoryLocator::new(dir.path());
        let stream = locator
            .open(&ResourceId::for_file_name("common"))
            .unwrap()
            .unwrap();
        assert_eq!(read_all(stream), "key: value\n");
    }

    #[test]
    fn test_directory_open_nested() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("envs")).unwrap();
        fs::write(dir.path().join("envs").join("ci.yaml"), "a: b").unwrap();

        let locator = DirectoryLocator::new(dir.path());
        assert!(locator.exists(&ResourceId::new("/envs/ci.yaml")).unwrap());
    }

    #[test]
    fn test_directory_open_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let locator = DirectoryLocator::new(dir.path());
        let stream = locator.open(&ResourceId::for_file_name("localhost")).unwrap();
        assert!(stream.is_none());
    }

    #[test]
    fn test_directory_missing_root_is_none() {
        let locator = DirectoryLocator::new("/nonexistent/resource/root");
        assert!(locator
            .open(&ResourceId::for_file_name("common"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_directory_is_not_a_resource() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("common.yaml")).unwrap();

        let locator = DirectoryLocator::new(dir.path());
        assert!(!locator.exists(&ResourceId::for_file_name("common")).unwrap());
    }

    #[test]
    fn test_directory_rejects_parent_components() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("inner");
        fs::create_dir(&inner).unwrap();
        fs::write(dir.path().join("secret.yaml"), "a: b").unwrap();

        let locator = DirectoryLocator::new(&inner);
        assert!(!locator.exists(&ResourceId::new("/../secret.yaml")).unwrap());
    }

    #[test]
    fn test_directory_rejects_oversized_resource() {
        let dir = TempDir::new().unwrap();
        let file = File::create(dir.path().join("big.yaml")).unwrap();
        file.set_len(MAX_RESOURCE_SIZE + 1).unwrap();

        let locator = DirectoryLocator::new(dir.path());
        let result = locator.open(&ResourceId::for_file_name("big"));
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_directory_root() {
        let locator = DirectoryLocator::new("/tmp/resources");
        assert_eq!(locator.root(), Path::new("/tmp/resources"));
        assert_eq!(locator.name(), "directory");
    }
}

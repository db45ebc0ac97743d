// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource identifier newtype.
//!
//! Configuration files are addressed relative to a resource root, always with a
//! leading `/` and the `.yaml` extension, e.g. `/common.yaml`.

use std::fmt;

/// Extension appended to every configuration file name.
pub const FILE_EXTENSION: &str = ".yaml";

/// A type-safe wrapper for resource paths.
///
/// # Examples
///
/// ```
/// use pagecfg::domain::ResourceId;
///
/// let id = ResourceId::for_file_name("common");
/// assert_eq!(id.as_str(), "/common.yaml");
/// assert_eq!(id.relative_path(), "common.yaml");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a `ResourceId` from a full resource path.
    ///
    /// A leading `/` is added if missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagecfg::domain::ResourceId;
    ///
    /// assert_eq!(ResourceId::new("data/test.yaml").as_str(), "/data/test.yaml");
    /// assert_eq!(ResourceId::new("/test.yaml").as_str(), "/test.yaml");
    /// ```
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with('/') {
            ResourceId(path)
        } else {
            ResourceId(format!("/{}", path))
        }
    }

    /// Builds the resource path for a configuration file name without extension.
    pub fn for_file_name(name: &str) -> Self {
        ResourceId(format!("/{}{}", name, FILE_EXTENSION))
    }

    /// Returns the resource path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path without its leading `/`, relative to a resource root.
    pub fn relative_path(&self) -> &str {
        self.0.trim_start_matches('/')
    }

    /// Converts the `ResourceId` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_for_file_name() {
        assert_eq!(ResourceId::for_file_name("common").as_str(), "/common.yaml");
        assert_eq!(
            ResourceId::for_file_name("localhost").as_str(),
            "/localhost.yaml"
        );
    }

    #[test]
    fn test_for_file_name_keeps_dots() {
        assert_eq!(
            ResourceId::for_file_name("test.discworld").as_str(),
            "/test.discworld.yaml"
        );
    }

    #[test]
    fn test_new_adds_leading_slash() {
        assert_eq!(ResourceId::new("a.yaml").as_str(), "/a.yaml");
        assert_eq!(ResourceId::new("/a.yaml").as_str(), "/a.yaml");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(ResourceId::new("/nested/a.yaml").relative_path(), "nested/a.yaml");
    }

    #[test]
    fn test_display_and_into_string() {
        let id = ResourceId::for_file_name("common");
        assert_eq!(format!("{}", id), "/common.yaml");
        let s: String = id.clone().into();
        assert_eq!(s, "/common.yaml");
        assert_eq!(id.into_string(), "/common.yaml");
    }

    #[test]
    fn test_hash() {
        let mut set = HashSet::new();
        set.insert(ResourceId::for_file_name("common"));
        assert!(set.contains(&ResourceId::new("/common.yaml")));
        assert!(!set.contains(&ResourceId::new("/localhost.yaml")));
    }
}

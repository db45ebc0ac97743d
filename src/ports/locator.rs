// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource locator trait definition.
//!
//! A `ResourceLocator` plays the part of a classpath: it maps a
//! [`ResourceId`] such as `/common.yaml` to a readable stream, or reports that
//! no such resource exists.

use crate::domain::{ResourceId, Result};
use std::io::Read;

/// A readable resource handle. The resource is released when it is dropped.
pub type ResourceStream<'a> = Box<dyn Read + 'a>;

/// A trait for opening named resources.
///
/// # Not found is not an error
///
/// `open` returns `Ok(None)` when the resource does not exist. `Err` is reserved
/// for resources that exist but cannot be handed out.
///
/// # Examples
///
/// ```rust
/// use pagecfg::domain::{ResourceId, Result};
/// use pagecfg::ports::{ResourceLocator, ResourceStream};
///
/// struct Nothing;
///
/// impl ResourceLocator for Nothing {
///     fn name(&self) -> &str {
///         "nothing"
///     }
///
///     fn open(&self, _resource: &ResourceId) -> Result<Option<ResourceStream<'_>>> {
///         Ok(None)
///     }
/// }
///
/// let stream = Nothing.open(&ResourceId::for_file_name("common")).unwrap();
/// assert!(stream.is_none());
/// ```
pub trait ResourceLocator: Send + Sync {
    /// Returns a short name for this locator, used in logs and errors.
    fn name(&self) -> &str;

    /// Opens a resource for reading.
    ///
    /// * `Ok(Some(stream))` - the resource exists
    /// * `Ok(None)` - no resource with this id
    /// * `Err(ConfigError)` - the resource exists but cannot be opened
    fn open(&self, resource: &ResourceId) -> Result<Option<ResourceStream<'_>>>;

    /// Returns `true` if `open` would find the resource.
    fn exists(&self, resource: &ResourceId) -> Result<bool> {
        Ok(self.open(resource)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct OneResource;

    impl ResourceLocator for OneResource {
        fn name(&self) -> &str {
            "one"
        }

        fn open(&self, resource: &ResourceId) -> Result<Option<ResourceStream<'_>>> {
            if resource.as_str() == "/common.yaml" {
                Ok(Some(Box::new(Cursor::new(b"a: b".to_vec()))))
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn test_open_found() {
        let mut stream = OneResource
            .open(&ResourceId::for_file_name("common"))
            .unwrap()
            .unwrap();
        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        assert_eq!(content, "a: b");
    }

    #[test]
    fn test_open_missing_is_none() {
        let stream = OneResource
            .open(&ResourceId::for_file_name("localhost"))
            .unwrap();
        assert!(stream.is_none());
    }

    #[test]
    fn test_exists() {
        assert!(OneResource.exists(&ResourceId::new("/common.yaml")).unwrap());
        assert!(!OneResource.exists(&ResourceId::new("/other.yaml")).unwrap());
    }

    #[test]
    fn test_locator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ResourceLocator>>();
    }
}

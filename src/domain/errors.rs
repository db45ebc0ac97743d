// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for loading layered configuration.
//!
//! Only a small set of conditions are raised. A missing resource and a value of
//! the wrong shape are not errors: they degrade to empty defaults further up.

use thiserror::Error;

/// The main error type for configuration loading.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without breaking
/// downstream matches.
///
/// # Examples
///
/// ```
/// use pagecfg::domain::errors::ConfigError;
///
/// fn read_resource() -> Result<String, ConfigError> {
///     Err(ConfigError::ParseError {
///         resource: "/common.yaml".to_string(),
///         message: "did not find expected key".to_string(),
///         source: None,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A resource locator refused to hand out a resource it knows about.
    #[error("Resource source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the locator that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The content of a resource is not a well-formed document.
    #[error("Failed to parse resource '{resource}': {message}")]
    ParseError {
        /// The resource being parsed
        resource: String,
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading an opened resource.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Attaches a resource name to a parse error produced without one.
    ///
    /// Parsers only see text, so the store fills in the resource afterwards.
    pub fn for_resource(self, resource: &str) -> Self {
        match self {
            ConfigError::ParseError {
                resource: existing,
                message,
                source,
            } if existing.is_empty() => ConfigError::ParseError {
                resource: resource.to_string(),
                message,
                source,
            },
            other => other,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

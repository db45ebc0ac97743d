// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered YAML configuration for browser-automation test suites.
//!
//! A test suite keeps a common configuration file (`common.yaml`) and one file
//! per environment under test (`localhost.yaml`, `staging.yaml`, ...). This
//! crate loads both, overlays the environment file on the common one, and
//! exposes typed accessors for the entries a UI test needs: base URL, browser,
//! screens, element ids, element groups and messages.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: the value tree (`ConfigValue`, `ConfigDocument`), the
//!   top-level merge, the `TestConfiguration` accessor trait, errors
//! - **Ports**: `ResourceLocator`, `DocumentParser`, `SettingsSource`
//! - **Adapters**: directory and in-memory locators, the YAML parser,
//!   environment and command-line settings sources
//! - **Service**: `LoaderSettings` and `LayeredConfigStore`
//!
//! # Defaulting
//!
//! Accessors never fail. A missing key, or a key holding a value of the wrong
//! shape, yields an empty string, slice or mapping and a debug log line.
//! Callers treat empty as "not configured".
//!
//! # Feature Flags
//!
//! - `yaml`: YAML parser (default)
//! - `env`: environment variable settings source (default)
//! - `cli`: command-line settings source (default)
//!
//! # Quick Start
//!
//! ```rust
//! use pagecfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! // Reads tests/resources/test-common.yaml, then overlays
//! // tests/resources/test-discworld.yaml on it
//! let mut store = LayeredConfigStore::builder()
//!     .with_resource_dir("tests/resources")
//!     .with_common_file("test-common")
//!     .with_environment_file("test-discworld")
//!     .build()?;
//! store.load_configuration()?;
//! assert_eq!(store.base_url(), "ankhmorpork:8700");
//!
//! println!("{} on {}", store.base_url(), store.browser());
//! for screen in store.screen_names() {
//!     println!("{} -> {}", screen, store.url_for(screen));
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::domain::{
        merge, ConfigDocument, ConfigError, ConfigValue, ResourceId, Result, TestConfiguration,
    };
    pub use crate::ports::{DocumentParser, ResourceLocator, SettingsSource};
    pub use crate::service::{LayeredConfigStore, LayeredConfigStoreBuilder, LoaderSettings};

    pub use crate::adapters::{DirectoryLocator, MemoryLocator};
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineSettings;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarSettings;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}

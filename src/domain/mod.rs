// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module holds the generic value tree, the defaulting accessors, the
//! top-level merge, and the typed accessor trait. It knows nothing about where
//! documents come from or which format they were written in.

pub mod config_document;
pub mod config_value;
pub mod errors;
pub mod keys;
pub mod resource_id;
pub mod service;

// Re-export commonly used types
pub use config_document::{merge, ConfigDocument};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use resource_id::ResourceId;
pub use service::TestConfiguration;

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! Locators find resources, the YAML parser reads them, and the settings
//! sources decide which resources to look for.

#[cfg(feature = "cli")]
pub mod cli;
pub mod directory;
#[cfg(feature = "env")]
pub mod env_var;
pub mod memory;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineSettings;
pub use directory::DirectoryLocator;
#[cfg(feature = "env")]
pub use env_var::EnvVarSettings;
pub use memory::MemoryLocator;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: loader settings and the layered configuration store.

pub mod settings;
pub mod store;

// Re-export commonly used types
pub use settings::{
    LoaderSettings, COMMON_FILE_PROPERTY, DEFAULT_COMMON_FILE, DEFAULT_ENVIRONMENT_FILE,
    ENVIRONMENT_FILE_PROPERTY,
};
pub use store::{LayeredConfigStore, LayeredConfigStoreBuilder};

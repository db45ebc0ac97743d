// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the loader and the outside world: where
//! resources live, how their text is parsed, and where loader settings come
//! from. Adapters implement them.

pub mod locator;
pub mod parser;
pub mod source;

// Re-export commonly used types
pub use locator::{ResourceLocator, ResourceStream};
pub use parser::DocumentParser;
pub use source::SettingsSource;

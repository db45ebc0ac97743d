// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings source trait definition.
//!
//! This module defines the `SettingsSource` trait. Loader settings such as
//! `test.environment.config.file` can come from the environment, the command
//! line, or anywhere else that can answer a lookup by name.

use crate::domain::Result;

/// A trait for sources of loader settings.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
///
/// # Priority
///
/// When several sources know a setting, the one with the highest priority wins:
///
/// - **3 (highest)**: Command-line arguments
/// - **2**: Environment variables
/// - **1 (lowest)**: Anything else
///
/// # Examples
///
/// ```rust
/// use pagecfg::domain::Result;
/// use pagecfg::ports::SettingsSource;
///
/// struct Fixed;
///
/// impl SettingsSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &str) -> Result<Option<String>> {
///         Ok((key == "test.environment.config.file").then(|| "discworld".to_string()))
///     }
///
///     fn all_keys(&self) -> Result<Vec<String>> {
///         Ok(vec!["test.environment.config.file".to_string()])
///     }
/// }
///
/// assert_eq!(
///     Fixed.get("test.environment.config.file").unwrap().as_deref(),
///     Some("discworld")
/// );
/// ```
pub trait SettingsSource: Send + Sync {
    /// Returns the name of this source, used for logging.
    fn name(&self) -> &str;

    /// Returns the priority of this source. Higher values win.
    fn priority(&self) -> u8;

    /// Looks up a setting by its dotted name.
    ///
    /// * `Ok(Some(value))` - the setting is present
    /// * `Ok(None)` - this source does not know the setting
    /// * `Err(ConfigError)` - the source could not be queried
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Returns every setting name this source knows.
    fn all_keys(&self) -> Result<Vec<String>>;
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line settings source.
//!
//! Recognised argument forms:
//! - `--key=value`
//! - `--key value`
//! - `-Dkey=value`, the JVM system-property syntax test runners already use

use crate::domain::Result;
use crate::ports::SettingsSource;
use std::collections::HashMap;

/// Settings source backed by command-line arguments.
///
/// Arguments that are not in one of the recognised forms are ignored. A later
/// occurrence of a key overrides an earlier one.
///
/// # Priority
///
/// Command-line arguments have the highest priority (3).
///
/// # Examples
///
/// ```rust
/// use pagecfg::adapters::CommandLineSettings;
/// use pagecfg::ports::SettingsSource;
///
/// let source = CommandLineSettings::from_args(vec![
///     "-Dcommon.yaml.config.file=test-common",
///     "--test.environment.config.file",
///     "discworld",
/// ]);
/// assert_eq!(source.get("common.yaml.config.file").unwrap().as_deref(), Some("test-common"));
/// assert_eq!(source.get("test.environment.config.file").unwrap().as_deref(), Some("discworld"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineSettings {
    /// Parsed settings
    values: HashMap<String, String>,
}

impl CommandLineSettings {
    /// Creates a source with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from a list of arguments.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        let mut source = Self::new();
        source.parse_args(&args);
        source
    }

    /// Creates a source from the process arguments, skipping the program name.
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(args)
    }

    fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) {
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();

            if let Some(property) = arg.strip_prefix("-D") {
                if let Some((key, value)) = property.split_once('=') {
                    self.insert(key, value);
                }
                i += 1;
            } else if let Some(long) = arg.strip_prefix("--") {
                if let Some((key, value)) = long.split_once('=') {
                    self.insert(key, value);
                    i += 1;
                } else {
                    let next: Option<&str> = args.get(i + 1).map(AsRef::as_ref);
                    match next {
                        Some(next) if !next.starts_with('-') => {
                            self.insert(long, next);
                            i += 2;
                        }
                        _ => i += 1,
                    }
                }
            } else {
                i += 1;
            }
        }
    }

    fn insert(&mut self, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl SettingsSource for CommandLineSettings {
    fn name(&self) -> &str {
        "cli"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_settings_name_and_priority() {
        let source = CommandLineSettings::new();
        assert_eq!(source.name(), "cli");
        assert_eq!(source.priority(), 3);
        assert!(source.all_keys().unwrap().is_empty());
    }

    #[test]
    fn test_cli_settings_long_form_equals() {
        let source = CommandLineSettings::from_args(vec!["--common.yaml.config.file=test-common"]);
        assert_eq!(
            source.get("common.yaml.config.file").unwrap().as_deref(),
            Some("test-common")
        );
    }

    #[test]
    fn test_cli_settings_long_form_space() {
        let source = CommandLineSettings::from_args(vec!["--env", "discworld"]);
        assert_eq!(source.get("env").unwrap().as_deref(), Some("discworld"));
    }

    #[test]
    fn test_cli_settings_system_property_form() {
        let source =
            CommandLineSettings::from_args(vec!["-Dtest.environment.config.file=test-discworld"]);
        assert_eq!(
            source.get("test.environment.config.file").unwrap().as_deref(),
            Some("test-discworld")
        );
    }

    #[test]
    fn test_cli_settings_property_without_value_is_ignored() {
        let source = CommandLineSettings::from_args(vec!["-Dorphan", "-D=value"]);
        assert!(source.all_keys().unwrap().is_empty());
    }

    #[test]
    fn test_cli_settings_missing_value() {
        let source = CommandLineSettings::from_args(vec!["--dangling"]);
        assert!(source.get("dangling").unwrap().is_none());
    }

    #[test]
    fn test_cli_settings_flag_is_not_a_value() {
        let source = CommandLineSettings::from_args(vec!["--first", "--second", "value"]);
        assert!(source.get("first").unwrap().is_none());
        assert_eq!(source.get("second").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_cli_settings_equals_in_value() {
        let source = CommandLineSettings::from_args(vec!["--url=http://host/?a=b"]);
        assert_eq!(source.get("url").unwrap().as_deref(), Some("http://host/?a=b"));
    }

    #[test]
    fn test_cli_settings_later_value_wins() {
        let source = CommandLineSettings::from_args(vec!["-Dkey=first", "--key=second"]);
        assert_eq!(source.get("key").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_cli_settings_positional_arguments_ignored() {
        let source = CommandLineSettings::from_args(vec!["run", "features/", "-v"]);
        assert!(source.all_keys().unwrap().is_empty());
    }
}

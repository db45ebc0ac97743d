// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use pagecfg::domain::Result;
use pagecfg::ports::SettingsSource;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Directory holding the checked-in YAML fixtures.
#[allow(dead_code)]
pub fn resource_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
}

/// Creates a temporary resource root holding `name.yaml` for each entry.
#[allow(dead_code)]
pub fn temp_resources(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(format!("{}.yaml", name)), content).unwrap();
    }
    dir
}

/// A settings source with fixed values and a chosen priority.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockSettingsSource {
    name: String,
    priority: u8,
    values: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockSettingsSource {
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsSource for MockSettingsSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }
}

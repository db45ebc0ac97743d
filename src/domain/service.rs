// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessors over a loaded test-suite configuration.
//!
//! This module defines the `TestConfiguration` trait. Every accessor is a fixed
//! path through the document built from the three primitive reads on
//! [`ConfigDocument`], so none of them can fail: a missing or mis-shaped entry
//! anywhere along the path yields an empty value.

use crate::domain::keys;
use crate::domain::{ConfigDocument, ConfigValue};

/// Read-only access to the well-known entries of a configuration document.
///
/// Implementors only provide [`document`](TestConfiguration::document); all
/// other methods have default implementations.
///
/// # Examples
///
/// ```rust
/// use pagecfg::domain::{ConfigDocument, TestConfiguration};
///
/// struct Fixed(ConfigDocument);
///
/// impl TestConfiguration for Fixed {
///     fn document(&self) -> &ConfigDocument {
///         &self.0
///     }
/// }
///
/// let mut screen = ConfigDocument::new();
/// screen.insert("url", "/user");
/// let mut screens = ConfigDocument::new();
/// screens.insert("User Details", screen);
/// let mut root = ConfigDocument::new();
/// root.insert("screens", screens);
///
/// let config = Fixed(root);
/// assert_eq!(config.url_for("User Details"), "/user");
/// assert_eq!(config.title_for("User Details"), "");
/// assert_eq!(config.url_for("Unknown"), "");
/// ```
pub trait TestConfiguration {
    /// The merged document the accessors read from.
    fn document(&self) -> &ConfigDocument;

    /// The `webpage_client` section.
    fn webpage_client(&self) -> &ConfigDocument {
        self.document().mapping(keys::WEBPAGE_CLIENT)
    }

    /// The `messages` section.
    fn messages(&self) -> &ConfigDocument {
        self.document().mapping(keys::MESSAGES)
    }

    /// The `screens` section.
    fn screens(&self) -> &ConfigDocument {
        self.document().mapping(keys::SCREENS)
    }

    /// Names of all configured screens, sorted.
    fn screen_names(&self) -> Vec<&str> {
        self.screens().keys().collect()
    }

    /// The description of one screen.
    fn screen_info(&self, screen_name: &str) -> &ConfigDocument {
        self.screens().mapping(screen_name)
    }

    /// Path of a screen.
    fn url_for(&self, screen_name: &str) -> &str {
        self.screen_info(screen_name).string(keys::URL)
    }

    /// Expected title of a screen.
    fn title_for(&self, screen_name: &str) -> &str {
        self.screen_info(screen_name).string(keys::TITLE)
    }

    /// Element ids that must be present on a screen.
    fn check_for_ids_for(&self, screen_name: &str) -> &[ConfigValue] {
        self.screen_info(screen_name).sequence(keys::CHECK_FOR_IDS)
    }

    /// How a screen is reached.
    fn get_here_by_for(&self, screen_name: &str) -> &str {
        self.screen_info(screen_name).string(keys::GET_HERE_BY)
    }

    /// Form fields of a screen.
    fn form_data_for(&self, screen_name: &str) -> &[ConfigValue] {
        self.screen_info(screen_name).sequence(keys::FORM_DATA)
    }

    /// The `element_ids` section.
    fn element_ids(&self) -> &ConfigDocument {
        self.document().mapping(keys::ELEMENT_IDS)
    }

    /// DOM id for an element key.
    fn element_id(&self, element_key: &str) -> &str {
        self.element_ids().string(element_key)
    }

    /// The `element_groups` section.
    fn element_groups(&self) -> &ConfigDocument {
        self.document().mapping(keys::ELEMENT_GROUPS)
    }

    /// Names of all element groups, sorted.
    fn element_group_names(&self) -> Vec<&str> {
        self.element_groups().keys().collect()
    }

    /// Members of one element group.
    fn element_group(&self, group_name: &str) -> &[ConfigValue] {
        self.element_groups().sequence(group_name)
    }

    /// Text of a message.
    fn message(&self, message_key: &str) -> &str {
        self.messages().string(message_key)
    }

    /// Base URL of the system under test.
    fn base_url(&self) -> &str {
        self.webpage_client().string(keys::BASE_URL)
    }

    /// The `webpage_client.selenium` section.
    fn selenium(&self) -> &ConfigDocument {
        self.webpage_client().mapping(keys::SELENIUM)
    }

    /// Browser to drive.
    fn browser(&self) -> &str {
        self.selenium().string(keys::BROWSER)
    }
}

impl TestConfiguration for ConfigDocument {
    fn document(&self) -> &ConfigDocument {
        self
    }
}

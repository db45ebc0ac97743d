// SPDX-License-Identifier: MIT OR Apache-2.0

//! Well-known keys of a test-suite configuration document.

// Top level
/// Browser client settings.
pub const WEBPAGE_CLIENT: &str = "webpage_client";
/// Screen name to screen description.
pub const SCREENS: &str = "screens";
/// Message key to message text.
pub const MESSAGES: &str = "messages";
/// Element key to DOM id.
pub const ELEMENT_IDS: &str = "element_ids";
/// Group name to a list of element ids.
pub const ELEMENT_GROUPS: &str = "element_groups";

// Under webpage_client
/// Base URL of the system under test.
pub const BASE_URL: &str = "base_url";
/// Selenium driver settings.
pub const SELENIUM: &str = "selenium";

// Under selenium and under each screen
/// Browser to drive, e.g. `FIREFOX`.
pub const BROWSER: &str = "browser";
/// Path of a screen.
pub const URL: &str = "url";
/// Expected page title of a screen.
pub const TITLE: &str = "title";
/// Element ids that must be present on a screen.
pub const CHECK_FOR_IDS: &str = "check_for_ids";
/// How a screen is reached, e.g. `GET` or `POST`.
pub const GET_HERE_BY: &str = "get_here_by";
/// Form fields submitted on a screen.
pub const FORM_DATA: &str = "form_data";

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for pagecfg.
//!
//! This example demonstrates:
//! - Building a store over a resource directory
//! - Choosing the environment file from the command line or environment
//! - Reading screens, elements and messages from the merged configuration
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//!
//! # Pick the files explicitly
//! cargo run --example basic_usage -- \
//!     -Dcommon.yaml.config.file=test-common \
//!     -Dtest.environment.config.file=test-discworld
//!
//! # Or through the environment
//! TEST_ENVIRONMENT_CONFIG_FILE=test-discworld cargo run --example basic_usage
//! ```

use pagecfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== pagecfg: Basic Usage ===\n");

    let resources = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/resources");
    let mut store = LayeredConfigStore::builder()
        .with_settings(LoaderSettings::new("test-common", "test-discworld"))
        .with_env_vars()
        .with_cli_args(std::env::args().skip(1).collect())
        .with_resource_dir(resources)
        .build()?;

    println!(
        "Loading {} then {}\n",
        store.common_resource(),
        store.environment_resource()
    );
    store.load_configuration()?;

    println!("--- Client ---");
    println!("base url: {}", store.base_url());
    println!("browser:  {}\n", store.browser());

    println!("--- Screens ---");
    for screen in store.screen_names() {
        println!(
            "{:<14} {} {:<6} title='{}'",
            screen,
            store.get_here_by_for(screen),
            store.url_for(screen),
            store.title_for(screen)
        );
        for id in store.screen_info(screen).string_list("check_for_ids") {
            println!("    expects #{}", id);
        }
    }

    println!("\n--- Elements ---");
    for (name, id) in store.element_ids() {
        if let Some(id) = id.as_str() {
            println!("{:<20} #{}", name, id);
        }
    }
    for group in store.element_group_names() {
        println!("group {}: {} members", group, store.element_group(group).len());
    }

    println!("\n--- Missing keys fall back to empty ---");
    println!("url for 'Nowhere': '{}'", store.url_for("Nowhere"));
    println!("message 'unknown': '{}'", store.message("unknown"));

    Ok(())
}

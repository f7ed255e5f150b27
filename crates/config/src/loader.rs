//! Configuration loading with validation and fallback.
//!
//! Responsibilities:
//! - Parse a JSON configuration document, validate it, and fall back to
//!   the built-in defaults when either step fails.
//!
//! Does NOT handle:
//! - Locating or watching the document; the host reloads and calls
//!   `load_config` again, producing a wholly new tree.

use tracing::warn;

use crate::types::MenuConfig;
use crate::validate::validate_config;

/// Parse and validate a configuration document.
///
/// An unparseable or invalid document is rejected whole: the error is
/// logged and the default configuration is returned, so a typo in one
/// binding never leaves the user without a working menu.
pub fn load_config(json: &str) -> MenuConfig {
    let config = match MenuConfig::from_json_str(json) {
        Ok(config) => config,
        Err(error) => {
            warn!(%error, "unparseable menu configuration, using defaults");
            return MenuConfig::default();
        }
    };

    match validate_config(&config) {
        Ok(()) => config,
        Err(error) => {
            warn!(%error, "invalid menu configuration, using defaults");
            MenuConfig::default()
        }
    }
}

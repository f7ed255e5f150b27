//! Construction-time validation of menu configuration.
//!
//! Responsibilities:
//! - Enforce the structural invariants of binding trees: key length,
//!   printable keys, non-empty names, non-empty submenus and command
//!   lists, non-empty command identifiers.
//! - Enforce the `keySequenceTimeout` bounds.
//!
//! Does NOT handle:
//! - Deduplication of same-key siblings; duplicates are not errors and
//!   are healed by `tree::deduplicate` (see `effective` module).
//!
//! Invariants:
//! - A tree that passes `validate_bindings` is safe to hand to the
//!   resolver: every key has 1-2 printable characters and every submenu
//!   has at least one item.

use thiserror::Error;

use crate::constants::{MAX_KEY_CHARS, MAX_KEY_SEQUENCE_TIMEOUT_MS};
use crate::types::{Binding, MenuConfig};

/// Errors reported for an invalid menu configuration.
///
/// `path` fields render the tree location the way duplicate reports do,
/// as a chain of keys (e.g. `"b → s"`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid key '{key}' at '{path}': must be 1-{MAX_KEY_CHARS} printable characters")]
    InvalidKey { path: String, key: String },

    #[error("binding at '{path}' has an empty name")]
    EmptyName { path: String },

    #[error("submenu at '{path}' has no items")]
    EmptySubmenu { path: String },

    #[error("command binding at '{path}' has an empty command identifier")]
    EmptyCommand { path: String },

    #[error("commands binding at '{path}' has an empty command list")]
    EmptyCommandList { path: String },

    #[error(
        "key sequence timeout {value} ms is out of range (0-{MAX_KEY_SEQUENCE_TIMEOUT_MS} ms)"
    )]
    TimeoutOutOfRange { value: u64 },
}

/// Validate a whole configuration: timeout bounds plus the binding tree.
pub fn validate_config(config: &MenuConfig) -> Result<(), ConfigError> {
    if config.key_sequence_timeout > MAX_KEY_SEQUENCE_TIMEOUT_MS {
        return Err(ConfigError::TimeoutOutOfRange {
            value: config.key_sequence_timeout,
        });
    }
    validate_bindings(&config.bindings)
}

/// Validate one binding tree, failing on the first violation found.
pub fn validate_bindings(bindings: &[Binding]) -> Result<(), ConfigError> {
    validate_level(bindings, "")
}

fn validate_level(bindings: &[Binding], path: &str) -> Result<(), ConfigError> {
    for binding in bindings {
        let here = if path.is_empty() {
            binding.key().to_string()
        } else {
            format!("{path} → {}", binding.key())
        };

        validate_key(binding.key(), &here)?;
        if binding.name().is_empty() {
            return Err(ConfigError::EmptyName { path: here });
        }

        match binding {
            Binding::Command { command, .. } => {
                if command.is_empty() {
                    return Err(ConfigError::EmptyCommand { path: here });
                }
            }
            Binding::CommandList { commands, .. } => {
                if commands.is_empty() {
                    return Err(ConfigError::EmptyCommandList { path: here });
                }
                if commands.iter().any(|c| c.command().is_empty()) {
                    return Err(ConfigError::EmptyCommand { path: here });
                }
            }
            Binding::Submenu { items, .. } => {
                if items.is_empty() {
                    return Err(ConfigError::EmptySubmenu { path: here });
                }
                validate_level(items, &here)?;
            }
        }
    }
    Ok(())
}

fn validate_key(key: &str, path: &str) -> Result<(), ConfigError> {
    let chars = key.chars().count();
    let printable = key.chars().all(|c| !c.is_control());
    if chars == 0 || chars > MAX_KEY_CHARS || !printable {
        return Err(ConfigError::InvalidKey {
            path: path.to_string(),
            key: key.to_string(),
        });
    }
    Ok(())
}

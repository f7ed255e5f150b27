//! User-facing menu configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_KEY_SEQUENCE_TIMEOUT_MS;
use crate::types::Binding;

/// Strategy for combining the built-in bindings with user bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Overlay user bindings onto the defaults, key by key.
    #[default]
    Merge,
    /// User bindings fully replace the defaults.
    Replace,
}

/// Ordering applied to each menu level before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Sort by key within each partition; submenus still come first.
    Alphabetical,
    /// Keep configuration order; submenus still come first.
    #[default]
    Custom,
}

/// The complete menu configuration, matching the external schema.
///
/// Field defaults mirror the schema defaults so a partial document
/// deserializes to the same effective configuration a fully spelled
/// out one would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    /// Root-level bindings. Empty means "use the built-in defaults".
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(default)]
    pub bindings_merge_strategy: MergeStrategy,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "default_true")]
    pub show_icons: bool,
    #[serde(default = "default_true")]
    pub show_detail: bool,
    /// Disambiguation timeout in milliseconds, 0-5000. Zero disables
    /// multi-character disambiguation entirely.
    #[serde(default = "default_key_sequence_timeout")]
    pub key_sequence_timeout: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            bindings_merge_strategy: MergeStrategy::default(),
            sort_order: SortOrder::default(),
            show_icons: true,
            show_detail: true,
            key_sequence_timeout: DEFAULT_KEY_SEQUENCE_TIMEOUT_MS,
        }
    }
}

impl MenuConfig {
    /// Parse a configuration document from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_true() -> bool {
    true
}

fn default_key_sequence_timeout() -> u64 {
    DEFAULT_KEY_SEQUENCE_TIMEOUT_MS
}

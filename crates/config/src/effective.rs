//! Effective binding computation.
//!
//! Responsibilities:
//! - Combine the built-in defaults with user bindings according to the
//!   configured merge strategy.
//! - Apply deduplication unconditionally before the tree reaches the
//!   resolver, reporting every dropped sibling.
//!
//! Does NOT handle:
//! - Validation; callers validate the configuration first and fall back
//!   to defaults on failure.
//!
//! Invariants:
//! - The returned tree never contains two siblings with the same key.
//! - User bindings empty means "defaults as-is" regardless of strategy.

use tracing::warn;

use crate::defaults::default_bindings;
use crate::tree;
use crate::types::{Binding, Duplicate, MenuConfig, MergeStrategy};

/// Compute the binding tree an interactive session will run over.
///
/// Duplicate keys are not errors: the first occurrence wins and the
/// dropped ones are returned for user-facing reporting.
pub fn effective_bindings(config: &MenuConfig) -> (Vec<Binding>, Vec<Duplicate>) {
    let combined = if config.bindings.is_empty() {
        default_bindings()
    } else {
        match config.bindings_merge_strategy {
            MergeStrategy::Replace => config.bindings.clone(),
            MergeStrategy::Merge => tree::merge(&default_bindings(), &config.bindings),
        }
    };

    let (bindings, duplicates) = tree::deduplicate(&combined);
    if !duplicates.is_empty() {
        warn!(
            count = duplicates.len(),
            "dropped duplicate binding keys, first occurrence wins"
        );
    }
    (bindings, duplicates)
}

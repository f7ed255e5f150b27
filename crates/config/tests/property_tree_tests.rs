//! Property-based tests for the binding tree operations.
//!
//! These tests verify the structural guarantees of the pure tree
//! operations against randomly generated trees, catching edge cases the
//! hand-written unit tests do not cover.
//!
//! Test coverage:
//! - flatten: paths equal the root-to-leaf key concatenation, submenus
//!   are never emitted, sibling order is preserved.
//! - deduplicate: idempotent, and the result has unique keys per level.
//! - sort: submenus precede leaves for every order, output is a
//!   permutation of the input.

use proptest::prelude::*;

use leader_config::tree::{deduplicate, flatten, sort};
use leader_config::{Binding, SortOrder};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,2}".prop_map(String::from)
}

fn leaf_strategy() -> impl Strategy<Value = Binding> {
    (key_strategy(), "[A-Za-z ]{1,12}").prop_map(|(key, name)| Binding::Command {
        key,
        name,
        command: "test.run".to_string(),
        args: None,
        detail: None,
        icon: None,
    })
}

/// Trees up to 3 levels deep with 1-4 children per submenu.
fn binding_strategy() -> impl Strategy<Value = Binding> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        (
            key_strategy(),
            "[A-Za-z ]{1,12}",
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(key, name, items)| Binding::Submenu {
                key,
                name,
                items,
                detail: None,
                icon: None,
            })
    })
}

fn tree_strategy() -> impl Strategy<Value = Vec<Binding>> {
    prop::collection::vec(binding_strategy(), 0..6)
}

/// Independent recomputation of expected flatten output.
fn expected_paths(bindings: &[Binding], prefix: &str, out: &mut Vec<String>) {
    for binding in bindings {
        let path = format!("{prefix}{}", binding.key());
        match binding {
            Binding::Submenu { items, .. } => expected_paths(items, &path, out),
            _ => out.push(path),
        }
    }
}

fn assert_unique_keys_per_level(bindings: &[Binding]) {
    let mut seen = std::collections::HashSet::new();
    for binding in bindings {
        assert!(seen.insert(binding.key().to_string()));
        if let Binding::Submenu { items, .. } = binding {
            assert_unique_keys_per_level(items);
        }
    }
}

proptest! {
    #[test]
    fn flatten_paths_match_key_concatenation(tree in tree_strategy()) {
        let mut expected = Vec::new();
        expected_paths(&tree, "", &mut expected);

        let flat = flatten(&tree);
        let actual: Vec<String> = flat.iter().map(|e| e.path.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn flatten_never_emits_submenus(tree in tree_strategy()) {
        for entry in flatten(&tree) {
            prop_assert!(!entry.binding.is_submenu());
        }
    }

    #[test]
    fn deduplicate_is_idempotent(tree in tree_strategy()) {
        let (once, _) = deduplicate(&tree);
        let (twice, rerun_duplicates) = deduplicate(&once);
        prop_assert!(rerun_duplicates.is_empty());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn deduplicate_leaves_unique_keys_per_level(tree in tree_strategy()) {
        let (deduped, _) = deduplicate(&tree);
        assert_unique_keys_per_level(&deduped);
    }

    #[test]
    fn deduplicate_drop_count_matches_report(tree in tree_strategy()) {
        fn count(bindings: &[Binding]) -> usize {
            bindings.iter().map(|b| match b {
                Binding::Submenu { items, .. } => 1 + count(items),
                _ => 1,
            }).sum()
        }
        let (deduped, duplicates) = deduplicate(&tree);
        // Dropping a submenu drops its whole subtree, so compare
        // against the count of surviving nodes plus reported drops at
        // the levels that survived.
        prop_assert!(count(&deduped) + duplicates.len() <= count(&tree));
    }

    #[test]
    fn sort_keeps_submenus_first(tree in tree_strategy(), alphabetical in any::<bool>()) {
        let order = if alphabetical { SortOrder::Alphabetical } else { SortOrder::Custom };
        let sorted = sort(&tree, order);
        let first_leaf = sorted.iter().position(|b| !b.is_submenu());
        if let Some(boundary) = first_leaf {
            prop_assert!(sorted[boundary..].iter().all(|b| !b.is_submenu()));
        }
    }

    #[test]
    fn sort_is_a_permutation(tree in tree_strategy(), alphabetical in any::<bool>()) {
        let order = if alphabetical { SortOrder::Alphabetical } else { SortOrder::Custom };
        let mut sorted = sort(&tree, order);
        for binding in &tree {
            let at = sorted.iter().position(|b| b == binding);
            prop_assert!(at.is_some());
            sorted.remove(at.unwrap());
        }
        prop_assert!(sorted.is_empty());
    }
}
